//! # Codepoint Kernel
//!
//! The unified API for canonical codepoint sequences: the storage form of
//! identifiers and text values, and the keys of hash-based indexes.
//!
//! ## Overview
//!
//! - **Sequences**: Immutable runs of codepoints in `0..=0x7FFFFFFF`
//! - **Key policy**: Equality and a chunk-folding hash, always used together
//! - **Indexes**: Thread-safe maps keyed by sequences
//! - **Interning**: One shared instance per distinct identifier
//!
//! ## Key Concepts
//!
//! - **Equality**: Elementwise identity of integers. No normalization, no case folding.
//! - **Hash**: Computed once per instance and cached.
//! - **Hash scheme**: `folded` by default; `legacy` reproduces hashes of earlier releases.
//!
//! ## Usage
//!
//! ```rust
//! use codepoint_kernel::{InsertResult, KernelConfig, Keyspace};
//!
//! let keyspace = Keyspace::new(KernelConfig::default());
//! let index = keyspace.index::<u64>();
//!
//! let name = keyspace.identifier("employee_id").unwrap();
//! assert_eq!(index.insert(name, 7).unwrap(), InsertResult::Inserted);
//!
//! let probe = keyspace.text("employee_id");
//! assert_eq!(index.get(&probe).unwrap(), Some(7));
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `codepoint_kernel::core` - Sequences, hash schemes, key policies
//! - `codepoint_kernel::index` - Policy containers, shared index, interner

pub mod config;
pub mod error;
pub mod keyspace;

// Re-export component crates
pub use codepoint_kernel_core as core;
pub use codepoint_kernel_index as index;

// Re-export main types for convenience
pub use config::KernelConfig;
pub use error::{KernelError, Result};
pub use keyspace::Keyspace;

// Re-export commonly used types
pub use codepoint_kernel_core::{
    CodepointSequence, CodepointSequenceComparer, CoreError, HashScheme, KeyPolicy, MAX_CODEPOINT,
};
pub use codepoint_kernel_index::{CodepointIndex, InsertResult, Interner, PolicyMap, PolicySet};
