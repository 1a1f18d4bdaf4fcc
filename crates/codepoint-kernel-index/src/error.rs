//! Error types for the index module.

use thiserror::Error;

/// Errors that can occur during shared index operations.
#[derive(Debug, Error)]
pub enum IndexError {
    /// A thread panicked while holding the index lock.
    #[error("index lock poisoned")]
    LockPoisoned,
}

impl<T> From<std::sync::PoisonError<T>> for IndexError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        IndexError::LockPoisoned
    }
}

/// Result type for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;
