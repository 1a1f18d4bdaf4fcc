//! Kernel configuration.

use serde::Deserialize;

use codepoint_kernel_core::HashScheme;

use crate::error::{KernelError, Result};

/// Configuration for a [`Keyspace`](crate::Keyspace).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KernelConfig {
    /// Chunk folding rule for hashing sequences.
    pub hash_scheme: HashScheme,
    /// Whether identifiers are interned to a single shared instance.
    pub intern_identifiers: bool,
    /// Initial capacity of the interner and of indexes built by the keyspace.
    pub initial_capacity: usize,
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self {
            hash_scheme: HashScheme::Folded,
            intern_identifiers: true,
            initial_capacity: 0,
        }
    }
}

impl KernelConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| KernelError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = KernelConfig::default();
        assert_eq!(config.hash_scheme, HashScheme::Folded);
        assert!(config.intern_identifiers);
        assert_eq!(config.initial_capacity, 0);
    }

    #[test]
    fn test_from_json_partial() {
        let config = KernelConfig::from_json(r#"{"hash_scheme": "legacy"}"#).unwrap();
        assert_eq!(config.hash_scheme, HashScheme::Legacy);
        assert!(config.intern_identifiers);
    }

    #[test]
    fn test_from_json_full() {
        let config = KernelConfig::from_json(
            r#"{"hash_scheme": "folded", "intern_identifiers": false, "initial_capacity": 64}"#,
        )
        .unwrap();
        assert!(!config.intern_identifiers);
        assert_eq!(config.initial_capacity, 64);
    }

    #[test]
    fn test_from_json_rejects_unknown_scheme() {
        let err = KernelConfig::from_json(r#"{"hash_scheme": "sip"}"#).unwrap_err();
        assert!(matches!(err, KernelError::Config(_)));
    }
}
