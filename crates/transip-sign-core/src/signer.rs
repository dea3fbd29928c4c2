//! RSA PKCS#1 v1.5 signing over a prepared DigestInfo block.
//!
//! The block already carries the SHA-512 algorithm identifier, so the
//! padding scheme is used unprefixed: `00 01 FF.. 00 || DigestInfo`.

use rsa::Pkcs1v15Sign;
use std::fmt;

use crate::digest::DigestInfo;
use crate::error::{SigningError, VerificationError};
use crate::keys::{PrivateKey, PublicKey};

/// Bytes of fixed overhead in a PKCS#1 v1.5 type 1 block: `00 01`, eight
/// `FF` minimum, and the `00` separator.
pub const PKCS1_V15_OVERHEAD: usize = 11;

/// A raw RSA signature, as long as the signing key's modulus.
#[derive(Clone, PartialEq, Eq)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Create from raw bytes.
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the raw bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hex = self.to_hex();
        write!(f, "Signature({}...)", &hex[..hex.len().min(16)])
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Signature {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

/// Sign a DigestInfo block with PKCS#1 v1.5 padding.
///
/// Deterministic: the same key and block always give the same signature.
pub fn sign_digest_info(key: &PrivateKey, info: &DigestInfo) -> Result<Signature, SigningError> {
    let block = info.as_bytes();
    let modulus_len = key.size();
    if modulus_len < block.len() + PKCS1_V15_OVERHEAD {
        return Err(SigningError::ModulusTooSmall {
            modulus_len,
            block_len: block.len(),
        });
    }

    let bytes = key
        .as_rsa()
        .sign(Pkcs1v15Sign::new_unprefixed(), block)?;
    Ok(Signature(bytes))
}

/// Verify a PKCS#1 v1.5 signature over a DigestInfo block.
pub fn verify_digest_info(
    key: &PublicKey,
    info: &DigestInfo,
    signature: &[u8],
) -> Result<(), VerificationError> {
    key.as_rsa()
        .verify(Pkcs1v15Sign::new_unprefixed(), info.as_bytes(), signature)
        .map_err(|_| VerificationError::SignatureMismatch)
}
