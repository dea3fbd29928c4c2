//! # TransIP Sign
//!
//! Request signing for the TransIP API.
//!
//! ## Overview
//!
//! Every API call carries an RSA signature over its parameters. This crate
//! builds the parameter list (method arguments plus the `__method`,
//! `__service`, `__hostname`, `__timestamp` and `__nonce` envelope) and
//! signs it with the account's private key.
//!
//! Transport is left to the caller: a [`SignedRequest`] exposes the
//! timestamp, nonce, mode and query-safe signature to attach.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use transip_sign::{RequestSigner, SignerConfig};
//!
//! fn example(pem: &str) -> transip_sign::Result<()> {
//!     let signer = RequestSigner::from_pem(pem, SignerConfig::default())?;
//!     let signed = signer.sign_call("DomainService", "getInfo", ["example.com"])?;
//!
//!     // hand signed.signature(), signed.nonce(), signed.timestamp() to transport
//!     let _ = signed.signature();
//!     Ok(())
//! }
//! ```
//!
//! ## Re-exports
//!
//! - `transip_sign::core` - the pure signing pipeline

pub mod config;
pub mod error;
pub mod request;
pub mod signer;

pub use transip_sign_core as core;

pub use config::{Mode, SignerConfig, DEFAULT_HOSTNAME};
pub use error::{Result, SignError};
pub use request::{Nonce, RequestParams};
pub use signer::{RequestSigner, SignedRequest};

pub use transip_sign_core::{PrivateKey, PublicKey};
