//! # Codepoint Kernel Core
//!
//! Pure primitives for the Codepoint Kernel: codepoint sequences and the
//! equality/hash policy used to key hash-based containers with them.
//!
//! This crate contains no I/O and no logging. It is pure computation over
//! immutable integer sequences.
//!
//! ## Key Types
//!
//! - [`CodepointSequence`] - An immutable sequence of codepoints in `0..=0x7FFFFFFF`
//! - [`CodepointSequenceComparer`] - Equality and hash, packaged as one [`KeyPolicy`]
//! - [`HashScheme`] - Chunk folding rule used to hash a sequence
//!
//! ## Hashing
//!
//! Sequences are hashed by folding chunks of four codepoints into the byte
//! lanes of a 32-bit value. See [`hash`] module.

pub mod error;
pub mod hash;
pub mod policy;
pub mod sequence;
pub mod text;

pub use error::CoreError;
pub use hash::HashScheme;
pub use policy::{CodepointSequenceComparer, KeyPolicy};
pub use sequence::{CodepointSequence, MAX_CODEPOINT};
