//! # TransIP Sign Core
//!
//! Pure primitives for signing TransIP API requests.
//!
//! This crate contains no I/O and no global state. A signature is a
//! straight-line transformation:
//!
//! 1. [`canonical`] - ordered parameters to `k=v&k=v` bytes
//! 2. [`digest`] - SHA-512 wrapped in a DER `DigestInfo`
//! 3. [`signer`] - RSA PKCS#1 v1.5 over the DigestInfo block
//! 4. [`transport`] - base64, then percent-encoding for the query string
//!
//! ## Usage
//!
//! ```rust,no_run
//! use transip_sign_core::{sign_params, PrivateKey};
//!
//! # fn example(pem: &str) -> Result<(), Box<dyn std::error::Error>> {
//! let key = PrivateKey::from_pem(pem)?;
//! let signature = sign_params(&key, &[("__method", "getDomainNames")])?;
//! # Ok(())
//! # }
//! ```

pub mod canonical;
pub mod digest;
pub mod error;
pub mod keys;
pub mod pipeline;
pub mod signer;
pub mod transport;

pub use canonical::{decode_params, encode_params};
pub use digest::{digest_info, DigestInfo, DIGEST_INFO_LEN, SHA512_DIGEST_INFO_PREFIX};
pub use error::{CanonicalError, KeyError, SigningError, TransportError, VerificationError};
pub use keys::{PrivateKey, PublicKey};
pub use pipeline::{sign_params, verify_params};
pub use signer::{sign_digest_info, verify_digest_info, Signature};
pub use transport::{decode_signature, encode_signature};
