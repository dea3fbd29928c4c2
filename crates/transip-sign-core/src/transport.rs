//! Transport encoding of signatures: standard base64, then percent-encoding
//! so the result can be used verbatim as a query-string value.

use base64::{engine::general_purpose, Engine};

use crate::error::TransportError;

/// Encode raw signature bytes for a URL query value.
///
/// `+`, `/` and `=` from the base64 alphabet become `%2B`, `%2F`, `%3D`.
pub fn encode_signature(signature: &[u8]) -> String {
    let b64 = general_purpose::STANDARD.encode(signature);
    urlencoding::encode(&b64).into_owned()
}

/// Reverse [`encode_signature`].
pub fn decode_signature(encoded: &str) -> Result<Vec<u8>, TransportError> {
    let b64 = urlencoding::decode(encoded).map_err(|_| TransportError::InvalidUtf8)?;
    Ok(general_purpose::STANDARD.decode(b64.as_bytes())?)
}
