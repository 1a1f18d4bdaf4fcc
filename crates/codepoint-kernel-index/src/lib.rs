//! # Codepoint Kernel Index
//!
//! Hash-based containers keyed through a [`KeyPolicy`], plus the shared
//! structures the value model builds on them.
//!
//! ## Overview
//!
//! A container never hashes or compares keys on its own: it asks the policy
//! it was built with. Equality and hash therefore always travel together.
//!
//! ## Key Types
//!
//! - [`PolicyKey`] - Adapts a key and its policy into `Hash + Eq`
//! - [`PolicyMap`] / [`PolicySet`] - Single-threaded policy-keyed containers
//! - [`CodepointIndex`] - Thread-safe map from codepoint sequences to values
//! - [`Interner`] - One canonical shared instance per distinct sequence
//!
//! ## Usage
//!
//! ```rust
//! use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer};
//! use codepoint_kernel_index::{CodepointIndex, InsertResult};
//!
//! let index = CodepointIndex::new(CodepointSequenceComparer::default());
//! let key = CodepointSequence::from_text("name");
//! assert_eq!(index.insert(key.clone(), 1).unwrap(), InsertResult::Inserted);
//! assert_eq!(index.get(&CodepointSequence::from_text("name")).unwrap(), Some(1));
//! ```
//!
//! ## Design Notes
//!
//! - **Idempotent inserts**: Inserting an equal value twice returns `AlreadyExists`
//! - **Conflict detection**: A different value under an equal key returns `Conflict`
//! - **Interning**: Interned keys compare through the identity fast path
//!
//! [`KeyPolicy`]: codepoint_kernel_core::KeyPolicy

pub mod error;
pub mod index;
pub mod interner;
pub mod keyed;
pub mod map;
pub mod set;

pub use error::{IndexError, Result};
pub use index::{CodepointIndex, InsertResult};
pub use interner::Interner;
pub use keyed::PolicyKey;
pub use map::PolicyMap;
pub use set::PolicySet;
