//! The full signing pipeline: canonical bytes, DigestInfo, RSA, transport.

use crate::canonical::encode_params;
use crate::digest::digest_info;
use crate::error::{SigningError, VerificationError};
use crate::keys::{PrivateKey, PublicKey};
use crate::signer::{sign_digest_info, verify_digest_info};
use crate::transport::{decode_signature, encode_signature};

/// Sign an ordered parameter list and return the query-safe signature.
pub fn sign_params<K, V>(key: &PrivateKey, params: &[(K, V)]) -> Result<String, SigningError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let canonical = encode_params(params);
    let info = digest_info(&canonical);

    tracing::debug!(
        params = params.len(),
        canonical_len = canonical.len(),
        key_bits = key.size() * 8,
        "signing request parameters"
    );
    tracing::trace!(digest_info = %info.to_hex(), "built digest info");

    let signature = sign_digest_info(key, &info).map_err(|e| {
        tracing::warn!("request signing failed: {}", e);
        e
    })?;

    Ok(encode_signature(signature.as_bytes()))
}

/// Check a query-safe signature against an ordered parameter list.
pub fn verify_params<K, V>(
    key: &PublicKey,
    params: &[(K, V)],
    encoded_signature: &str,
) -> Result<(), VerificationError>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let signature = decode_signature(encoded_signature)?;
    let info = digest_info(&encode_params(params));
    verify_digest_info(key, &info, &signature)
}
