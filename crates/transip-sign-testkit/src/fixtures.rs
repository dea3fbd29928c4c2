//! Test fixtures and helpers.
//!
//! A fixed RSA-2048 key whose signatures are pinned by the golden vectors.

use transip_sign_core::{PrivateKey, PublicKey};

/// PKCS#1 PEM of the fixed test key. Never use it outside tests.
pub const TEST_KEY_PEM: &str = include_str!("../fixtures/test_key.pem");

/// Modulus length of the test key in bytes.
pub const TEST_KEY_SIZE: usize = 256;

/// Load the fixed test key.
pub fn test_key() -> PrivateKey {
    PrivateKey::from_pkcs1_pem(TEST_KEY_PEM).expect("test key fixture should parse")
}

/// Public half of the fixed test key.
pub fn test_public_key() -> PublicKey {
    test_key().public_key()
}

/// Convert borrowed pairs to the owned form the signer produces.
pub fn owned_params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_key_loads() {
        let key = test_key();
        assert_eq!(key.size(), TEST_KEY_SIZE);
        assert_eq!(test_public_key(), key.public_key());
    }

    #[test]
    fn test_fixture_key_via_label_dispatch() {
        let key = PrivateKey::from_pem(TEST_KEY_PEM).unwrap();
        assert_eq!(key.public_key(), test_public_key());
    }

    #[test]
    fn test_owned_params() {
        assert_eq!(
            owned_params(&[("a", "1")]),
            vec![("a".to_string(), "1".to_string())]
        );
    }
}
