//! Error types for the signing core.

use thiserror::Error;

/// The RSA signing primitive rejected the key or the input block.
///
/// Signing with a fixed key over a fixed block always fails the same way,
/// so callers treat this as fatal to the current request.
#[derive(Debug, Error)]
pub enum SigningError {
    #[error("modulus of {modulus_len} bytes cannot hold a padded block of {block_len} bytes")]
    ModulusTooSmall { modulus_len: usize, block_len: usize },

    #[error("rsa signing failed: {0}")]
    Rsa(#[from] rsa::Error),
}

/// Errors while loading a private key.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("unsupported PEM label, expected RSA PRIVATE KEY or PRIVATE KEY")]
    UnsupportedLabel,

    #[error("invalid PKCS#1 key: {0}")]
    Pkcs1(#[from] rsa::pkcs1::Error),

    #[error("invalid PKCS#8 key: {0}")]
    Pkcs8(#[from] rsa::pkcs8::Error),

    #[error("key failed validation: {0}")]
    Invalid(#[from] rsa::Error),
}

/// Errors while decoding a transport-encoded signature.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("percent-decoded signature is not valid UTF-8")]
    InvalidUtf8,

    #[error("invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),
}

/// Errors while decoding canonical parameter bytes.
#[derive(Debug, Error)]
pub enum CanonicalError {
    #[error("parameter segment {0} has no '=' separator")]
    MissingSeparator(usize),

    #[error("parameter segment {0} is not valid UTF-8 after decoding")]
    InvalidUtf8(usize),
}

/// Signature verification failures.
#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("signature does not match")]
    SignatureMismatch,

    #[error("malformed encoded signature: {0}")]
    Transport(#[from] TransportError),
}
