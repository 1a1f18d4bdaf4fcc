//! Interning: one canonical shared instance per distinct sequence.
//!
//! Interned sequences compare through the identity fast path, so repeated
//! identifiers cost a pointer comparison instead of an elementwise scan.

use std::sync::RwLock;

use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer};

use crate::error::Result;
use crate::set::PolicySet;

/// Thread-safe pool of canonical sequence instances.
pub struct Interner {
    set: RwLock<PolicySet<CodepointSequence, CodepointSequenceComparer>>,
}

impl Interner {
    /// Create an empty interner using `policy`.
    pub fn new(policy: CodepointSequenceComparer) -> Self {
        Self::with_capacity(policy, 0)
    }

    /// Create an empty interner with room for `capacity` sequences.
    pub fn with_capacity(policy: CodepointSequenceComparer, capacity: usize) -> Self {
        Self {
            set: RwLock::new(PolicySet::with_capacity(policy, capacity)),
        }
    }

    /// The canonical instance equal to `sequence`, adopting it if none exists.
    pub fn intern(&self, sequence: CodepointSequence) -> Result<CodepointSequence> {
        if let Some(existing) = self.set.read()?.get(&sequence) {
            return Ok(existing.clone());
        }

        let mut set = self.set.write()?;
        // Another thread may have interned it between the two locks.
        if let Some(existing) = set.get(&sequence) {
            return Ok(existing.clone());
        }
        tracing::trace!(sequence = ?sequence, "interning new sequence");
        set.insert(sequence.clone());
        Ok(sequence)
    }

    /// The canonical instance equal to `sequence`, if interned.
    pub fn get(&self, sequence: &CodepointSequence) -> Result<Option<CodepointSequence>> {
        Ok(self.set.read()?.get(sequence).cloned())
    }

    /// Whether a sequence equal to `sequence` is interned.
    pub fn contains(&self, sequence: &CodepointSequence) -> Result<bool> {
        Ok(self.set.read()?.contains(sequence))
    }

    /// Number of interned sequences.
    pub fn len(&self) -> Result<usize> {
        Ok(self.set.read()?.len())
    }

    /// Whether nothing has been interned.
    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.set.read()?.is_empty())
    }
}

impl Default for Interner {
    fn default() -> Self {
        Self::new(CodepointSequenceComparer::default())
    }
}
