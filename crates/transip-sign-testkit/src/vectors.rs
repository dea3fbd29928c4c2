//! Golden test vectors for deterministic verification.
//!
//! These pin the canonical bytes, DigestInfo block and final signature
//! string the API accepts for known inputs. Signatures are produced with
//! the fixed key from [`crate::fixtures`].

use transip_sign_core::{digest_info, encode_params, sign_params};

use crate::fixtures::test_key;

/// A golden test vector.
#[derive(Debug, Clone)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Ordered request parameters.
    pub params: &'static [(&'static str, &'static str)],
    /// Expected canonical bytes.
    pub canonical: &'static str,
    /// Expected DigestInfo block (hex). Empty when not pinned.
    pub digest_info: &'static str,
    /// Expected transport-encoded signature. Empty when not pinned.
    pub signature: &'static str,
}

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "getDomainNames canonical encoding",
            params: &[
                ("__method", "getDomainNames"),
                ("__service", "DomainService"),
                ("__hostname", "api.transip.nl"),
                ("__timestamp", "1492760973"),
                ("__nonce", "58f9b98ddd3999.86051758"),
            ],
            canonical: "__method=getDomainNames&__service=DomainService&__hostname=api.transip.nl&__timestamp=1492760973&__nonce=58f9b98ddd3999.86051758",
            digest_info: "",
            signature: "",
        },
        GoldenVector {
            name: "getDomainNames signed with test key",
            params: &[
                ("__method", "getDomainNames"),
                ("__service", "DomainService"),
                ("__hostname", "api.transip.nl"),
                ("__timestamp", "1492851509"),
                ("__nonce", "58fb1b35916f25.33598874"),
            ],
            canonical: "__method=getDomainNames&__service=DomainService&__hostname=api.transip.nl&__timestamp=1492851509&__nonce=58fb1b35916f25.33598874",
            digest_info: concat!(
                "3051300d060960864801650304020305000440",
                "60878e6a114a92c762248ab3a1c028d6fb80e0008cced422973189b81238bbeb",
                "b17d8e69d99b29622250b07f4c3d5fcc6b9d82f8d4e4bafb0ee1426ddfe6ef12",
            ),
            signature: concat!(
                "3xhFhDsp1H2%2Ba4LidS2hXuQQjNmsxIGlEkgastg9jO5BRvqTLUXppAXjhieoq4P%2Bf8E5BF9%2FZ4Sn",
                "YWKkQUvMbG%2BfoMnmK%2BGL6CwYeyn%2FLglZMNrFdoMw18PRH1iW3quvF2yxVcnCJXT%2FRwXUQu4T",
                "bH7f8kYH12R20hNI6HlDDx%2FQbLPtMyS9nMAmhhebtmjnutlmZS%2BCK%2Bh9jllaGcMiCorYGBD5a",
                "XHu%2FUdlsxmzSQ8acvtDa%2BfBkZ%2BDcvi%2B9fafzMCxd1OT5%2BP9vj93u1i9VmL0Bz3Z88Uj%2F",
                "xCnTXH0VdZZGyWuqKNNjawXs1wwoJ5%2FrDhMCyVdqt%2Fb8X2%2Bt%2F%2Bpww%3D%3D",
            ),
        },
        GoldenVector {
            name: "empty parameter list",
            params: &[],
            canonical: "",
            digest_info: concat!(
                "3051300d060960864801650304020305000440",
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce",
                "47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
            ),
            signature: "",
        },
    ]
}

/// Outcome of checking one vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VectorResult {
    pub name: String,
    pub canonical: String,
    pub digest_info: String,
    pub signature: String,
    pub matches: bool,
}

/// Run a single vector through the pipeline with the test key.
pub fn run_vector(vector: &GoldenVector) -> VectorResult {
    let canonical = String::from_utf8(encode_params(vector.params))
        .expect("canonical bytes are always ASCII");
    let info = digest_info(canonical.as_bytes()).to_hex();
    let signature =
        sign_params(&test_key(), vector.params).expect("test key signs an 83-byte block");

    // Empty expectations only report what we got
    let matches = canonical == vector.canonical
        && (vector.digest_info.is_empty() || info == vector.digest_info)
        && (vector.signature.is_empty() || signature == vector.signature);

    VectorResult {
        name: vector.name.to_string(),
        canonical,
        digest_info: info,
        signature,
        matches,
    }
}

/// Verify all golden vectors.
pub fn verify_all_vectors() -> Vec<VectorResult> {
    all_vectors().iter().map(run_vector).collect()
}
