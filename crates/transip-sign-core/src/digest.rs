//! SHA-512 DigestInfo construction.
//!
//! The signing primitive pads whatever block it is handed, so the hash
//! algorithm identifier is prepended here rather than by the RSA layer.

use sha2::{Digest, Sha512};
use std::fmt;

/// DER header of a `DigestInfo` SEQUENCE for SHA-512 (OID 2.16.840.1.101.3.4.2.3).
///
/// SEQUENCE(81) { SEQUENCE(13) { OID(9), NULL }, OCTET STRING(64) }
pub const SHA512_DIGEST_INFO_PREFIX: [u8; 19] = [
    0x30, 0x51, 0x30, 0x0d, 0x06, 0x09, 0x60, 0x86, 0x48, 0x01, 0x65, 0x03, 0x04, 0x02, 0x03,
    0x05, 0x00, 0x04, 0x40,
];

/// SHA-512 output length.
pub const SHA512_LEN: usize = 64;

/// Total DigestInfo length: prefix plus digest.
pub const DIGEST_INFO_LEN: usize = SHA512_DIGEST_INFO_PREFIX.len() + SHA512_LEN;

/// An 83-byte DER `DigestInfo` block wrapping a SHA-512 digest.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct DigestInfo([u8; DIGEST_INFO_LEN]);

impl DigestInfo {
    /// Hash `data` with SHA-512 and wrap the digest.
    pub fn compute(data: &[u8]) -> Self {
        let hash = Sha512::digest(data);

        let mut block = [0u8; DIGEST_INFO_LEN];
        block[..SHA512_DIGEST_INFO_PREFIX.len()].copy_from_slice(&SHA512_DIGEST_INFO_PREFIX);
        block[SHA512_DIGEST_INFO_PREFIX.len()..].copy_from_slice(&hash);
        Self(block)
    }

    /// The full block, prefix included.
    pub const fn as_bytes(&self) -> &[u8; DIGEST_INFO_LEN] {
        &self.0
    }

    /// The raw 64-byte SHA-512 digest.
    pub fn digest(&self) -> &[u8] {
        &self.0[SHA512_DIGEST_INFO_PREFIX.len()..]
    }

    /// Convert to hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

/// Build the DigestInfo block over canonical bytes.
pub fn digest_info(data: &[u8]) -> DigestInfo {
    DigestInfo::compute(data)
}

impl fmt::Debug for DigestInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DigestInfo(sha512:{}...)", &hex::encode(self.digest())[..16])
    }
}

impl AsRef<[u8]> for DigestInfo {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
