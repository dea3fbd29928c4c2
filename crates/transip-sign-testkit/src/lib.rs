//! # TransIP Sign Testkit
//!
//! Testing utilities for TransIP request signing.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known inputs with the exact canonical bytes, DigestInfo and signature the API accepts
//! - **Generators**: Proptest strategies for parameter lists and signatures
//! - **Fixtures**: The fixed RSA test key
//!
//! ## Golden Vectors
//!
//! ```rust
//! use transip_sign_testkit::vectors::verify_all_vectors;
//!
//! for result in verify_all_vectors() {
//!     assert!(result.matches, "{}", result.name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use transip_sign_testkit::generators::param_list;
//!
//! proptest! {
//!     #[test]
//!     fn canonical_bytes_are_deterministic(params in param_list(8)) {
//!         let b1 = transip_sign_core::encode_params(&params);
//!         let b2 = transip_sign_core::encode_params(&params);
//!         prop_assert_eq!(b1, b2);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{owned_params, test_key, test_public_key, TEST_KEY_PEM};
pub use generators::{envelope, param_list};
pub use vectors::{all_vectors, run_vector, verify_all_vectors, GoldenVector, VectorResult};
