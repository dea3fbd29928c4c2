//! Error types for the request signer.

use thiserror::Error;
use transip_sign_core::{KeyError, SigningError, VerificationError};

/// Errors that can occur while preparing or signing a request.
#[derive(Debug, Error)]
pub enum SignError {
    /// The RSA primitive rejected the key or block.
    #[error("signing error: {0}")]
    Signing(#[from] SigningError),

    /// The private key could not be loaded.
    #[error("key error: {0}")]
    Key(#[from] KeyError),

    /// A signature did not verify.
    #[error("verification error: {0}")]
    Verification(#[from] VerificationError),

    /// The system clock is set before the UNIX epoch.
    #[error("system clock is before the unix epoch")]
    Clock,

    /// Invalid configuration.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for signer operations.
pub type Result<T> = std::result::Result<T, SignError>;
