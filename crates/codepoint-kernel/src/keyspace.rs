//! The Keyspace: entry point the value model uses for sequence keys.
//!
//! A keyspace fixes one key policy for everything built through it, so
//! identifiers, text values, and serialization keys created here hash the
//! same way as the indexes that store them.

use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer, KeyPolicy};
use codepoint_kernel_index::{CodepointIndex, Interner};

use crate::config::KernelConfig;
use crate::error::Result;

/// Builds, hashes, and indexes codepoint sequences under one configuration.
pub struct Keyspace {
    /// Configuration.
    config: KernelConfig,
    /// Policy shared by every index this keyspace creates.
    comparer: CodepointSequenceComparer,
    /// Canonical identifier instances.
    interner: Interner,
}

impl Keyspace {
    /// Create a keyspace.
    pub fn new(config: KernelConfig) -> Self {
        let comparer = CodepointSequenceComparer::new(config.hash_scheme);
        tracing::debug!(
            scheme = ?config.hash_scheme,
            intern_identifiers = config.intern_identifiers,
            "creating keyspace"
        );
        Self {
            interner: Interner::with_capacity(comparer, config.initial_capacity),
            comparer,
            config,
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    /// The key policy for sequences of this keyspace.
    pub fn comparer(&self) -> CodepointSequenceComparer {
        self.comparer
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Construction
    // ─────────────────────────────────────────────────────────────────────────

    /// An unqualified identifier.
    ///
    /// With `intern_identifiers` set, equal names return the same instance.
    pub fn identifier(&self, name: &str) -> Result<CodepointSequence> {
        let sequence = CodepointSequence::from_text(name);
        if !self.config.intern_identifiers {
            return Ok(sequence);
        }
        Ok(self.interner.intern(sequence)?)
    }

    /// The canonical storage form of a text value.
    pub fn text(&self, text: &str) -> CodepointSequence {
        CodepointSequence::from_text(text)
    }

    /// A serialization key from raw codepoints, validated for range.
    pub fn key(&self, elements: Vec<i32>) -> Result<CodepointSequence> {
        Ok(CodepointSequence::new(elements)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Equality and hashing
    // ─────────────────────────────────────────────────────────────────────────

    /// Hash of `sequence` under this keyspace's scheme.
    pub fn hash(&self, sequence: &CodepointSequence) -> i32 {
        self.comparer.hash_code(Some(sequence))
    }

    /// Equality of two possibly absent sequences.
    pub fn equals(&self, a: Option<&CodepointSequence>, b: Option<&CodepointSequence>) -> bool {
        self.comparer.equals(a, b)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Indexes
    // ─────────────────────────────────────────────────────────────────────────

    /// A new empty index keyed with this keyspace's policy.
    pub fn index<V: Clone + PartialEq>(&self) -> CodepointIndex<V> {
        CodepointIndex::with_capacity(self.comparer, self.config.initial_capacity)
    }

    /// Number of distinct identifiers interned so far.
    pub fn interned_count(&self) -> Result<usize> {
        Ok(self.interner.len()?)
    }
}

impl Default for Keyspace {
    fn default() -> Self {
        Self::new(KernelConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codepoint_kernel_core::{CoreError, HashScheme};

    use crate::error::KernelError;

    #[test]
    fn test_identifiers_are_interned() {
        let ks = Keyspace::default();
        let a = ks.identifier("attr").unwrap();
        let b = ks.identifier("attr").unwrap();
        assert!(a.ptr_eq(&b));
        assert_eq!(ks.interned_count().unwrap(), 1);
    }

    #[test]
    fn test_interning_disabled() {
        let ks = Keyspace::new(KernelConfig {
            intern_identifiers: false,
            ..KernelConfig::default()
        });
        let a = ks.identifier("attr").unwrap();
        let b = ks.identifier("attr").unwrap();
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
        assert_eq!(ks.interned_count().unwrap(), 0);
    }

    #[test]
    fn test_text_matches_identifier_contents() {
        let ks = Keyspace::default();
        assert!(ks.equals(Some(&ks.text("x")), Some(&ks.identifier("x").unwrap())));
    }

    #[test]
    fn test_key_rejects_out_of_range() {
        let ks = Keyspace::default();
        let err = ks.key(vec![1, i32::MIN]).unwrap_err();
        assert!(matches!(
            err,
            KernelError::Core(CoreError::RangeViolation { index: 1, .. })
        ));
    }

    #[test]
    fn test_hash_follows_configured_scheme() {
        let folded = Keyspace::default();
        let legacy = Keyspace::new(KernelConfig {
            hash_scheme: HashScheme::Legacy,
            ..KernelConfig::default()
        });
        let abcd = folded.text("ABCD");
        assert_eq!(folded.hash(&abcd), 0x4142_4344);
        assert_eq!(legacy.hash(&abcd), 0x4100_0044);
        assert_eq!(legacy.index::<u8>().policy().scheme(), HashScheme::Legacy);
    }
}
