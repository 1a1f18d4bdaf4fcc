//! # Codepoint Kernel Testkit
//!
//! Testing utilities for the Codepoint Kernel.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: Known sequences with expected hashes under each scheme
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: Sample keys, known collisions, and a populated index
//!
//! ## Golden Vectors
//!
//! Golden vectors pin the hash function so stored values stay valid:
//!
//! ```rust
//! use codepoint_kernel_testkit::vectors::verify_all_vectors;
//!
//! for (name, ok) in verify_all_vectors() {
//!     assert!(ok, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use codepoint_kernel_testkit::generators::sequence;
//!
//! proptest! {
//!     #[test]
//!     fn clone_is_equal(s in sequence(32)) {
//!         prop_assert_eq!(s.clone(), s);
//!     }
//! }
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{colliding_pairs, repeating_block, sample_identifiers, IndexFixture};
pub use generators::{elements, identifier, sequence, unicode_sequence};
pub use vectors::{all_vectors, verify_all_vectors, HashVector};
