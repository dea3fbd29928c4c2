//! Canonical parameter encoding for request signatures.
//!
//! The signed message is the ordered parameter list serialized as
//! `key=value` pairs joined by `&`:
//! - Keys and values are percent-encoded independently
//! - Unreserved characters (`A-Z a-z 0-9 - _ . ~`) are kept, all other
//!   UTF-8 bytes become `%XX` with uppercase hex
//! - Space encodes as `%20`, never `+`
//! - Caller order is preserved; nothing is sorted or deduplicated
//!
//! **CRITICAL**: the server recomputes these bytes. Any deviation here
//! produces a signature the API rejects.

use crate::error::CanonicalError;

/// Separator between pairs.
pub const PAIR_SEPARATOR: char = '&';

/// Separator between a key and its value.
pub const KEY_VALUE_SEPARATOR: char = '=';

/// Encode an ordered parameter list to canonical bytes.
///
/// An empty list encodes to an empty byte string.
pub fn encode_params<K, V>(params: &[(K, V)]) -> Vec<u8>
where
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut buf = String::new();
    for (i, (key, value)) in params.iter().enumerate() {
        if i > 0 {
            buf.push(PAIR_SEPARATOR);
        }
        buf.push_str(&urlencoding::encode(key.as_ref()));
        buf.push(KEY_VALUE_SEPARATOR);
        buf.push_str(&urlencoding::encode(value.as_ref()));
    }
    buf.into_bytes()
}

/// Decode canonical bytes back into the ordered parameter list.
///
/// Inverse of [`encode_params`]. Each segment is split on its first `=`,
/// which is unambiguous because encoded keys never contain a literal `=`.
pub fn decode_params(bytes: &[u8]) -> Result<Vec<(String, String)>, CanonicalError> {
    if bytes.is_empty() {
        return Ok(Vec::new());
    }

    let text = std::str::from_utf8(bytes).map_err(|_| CanonicalError::InvalidUtf8(0))?;

    text.split(PAIR_SEPARATOR)
        .enumerate()
        .map(|(i, segment)| {
            let (key, value) = segment
                .split_once(KEY_VALUE_SEPARATOR)
                .ok_or(CanonicalError::MissingSeparator(i))?;
            let key = urlencoding::decode(key).map_err(|_| CanonicalError::InvalidUtf8(i))?;
            let value = urlencoding::decode(value).map_err(|_| CanonicalError::InvalidUtf8(i))?;
            Ok((key.into_owned(), value.into_owned()))
        })
        .collect()
}
