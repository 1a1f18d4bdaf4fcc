//! Error types for the Kernel.

use codepoint_kernel_core::CoreError;
use codepoint_kernel_index::IndexError;
use thiserror::Error;

/// Errors that can occur during Kernel operations.
#[derive(Debug, Error)]
pub enum KernelError {
    /// Invalid codepoint input or element access.
    #[error("sequence error: {0}")]
    Core(#[from] CoreError),

    /// Shared index or interner error.
    #[error("index error: {0}")]
    Index(#[from] IndexError),

    /// Configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for Kernel operations.
pub type Result<T> = std::result::Result<T, KernelError>;
