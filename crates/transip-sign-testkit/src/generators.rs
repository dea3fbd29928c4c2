//! Proptest generators for property-based testing.

use proptest::prelude::*;

/// A parameter key or value, biased toward characters that need escaping.
pub fn param_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9_.~-]{0,16}",
        "[&=%+ /?#]{0,8}",
        any::<String>(),
    ]
}

/// A single key/value pair.
pub fn param() -> impl Strategy<Value = (String, String)> {
    (param_text(), param_text())
}

/// An ordered parameter list of up to `max_len` pairs.
pub fn param_list(max_len: usize) -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(param(), 0..=max_len)
}

/// A plausible envelope: method, service, hostname, timestamp, nonce.
pub fn envelope() -> impl Strategy<Value = Vec<(String, String)>> {
    (
        "[a-z][a-zA-Z]{0,23}",
        "[A-Z][a-zA-Z]{0,15}Service",
        0u64..=4_102_444_800u64,
        "[0-9a-f]{14}\\.[0-9]{8}",
    )
        .prop_map(|(method, service, ts, nonce)| {
            vec![
                ("__method".to_string(), method),
                ("__service".to_string(), service),
                ("__hostname".to_string(), "api.transip.nl".to_string()),
                ("__timestamp".to_string(), ts.to_string()),
                ("__nonce".to_string(), nonce),
            ]
        })
}

/// Raw signature bytes of a given length.
pub fn signature_bytes(len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), len)
}
