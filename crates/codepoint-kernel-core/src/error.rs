//! Error types for the Codepoint Kernel Core.

use thiserror::Error;

/// Errors that can occur when building or reading a codepoint sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A supplied value lies outside `0..=0x7FFFFFFF`.
    #[error("codepoint {value} at index {index} is outside 0..=0x7FFFFFFF")]
    RangeViolation { index: usize, value: i64 },

    /// An element index outside `0..len` was requested.
    #[error("index {index} out of range for sequence of length {len}")]
    OutOfRange { index: isize, len: usize },
}
