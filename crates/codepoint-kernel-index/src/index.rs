//! Thread-safe index from codepoint sequences to values.
//!
//! This is the lookup structure the value model builds over identifiers,
//! text values, and serialization keys. It has the same semantics as a
//! [`PolicyMap`] but can be shared across threads.

use std::sync::RwLock;

use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer};

use crate::error::Result;
use crate::map::PolicyMap;

/// Result of inserting into a [`CodepointIndex`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertResult<V> {
    /// The key was absent; the value was stored.
    Inserted,
    /// An equal key already maps to an equal value (idempotent).
    AlreadyExists,
    /// An equal key maps to a different value. Nothing was changed.
    Conflict { existing: V },
}

/// Shared map keyed by codepoint sequence. Thread-safe via RwLock.
pub struct CodepointIndex<V> {
    policy: CodepointSequenceComparer,
    inner: RwLock<PolicyMap<CodepointSequence, V, CodepointSequenceComparer>>,
}

impl<V: Clone + PartialEq> CodepointIndex<V> {
    /// Create an empty index using `policy`.
    pub fn new(policy: CodepointSequenceComparer) -> Self {
        Self::with_capacity(policy, 0)
    }

    /// Create an empty index with room for `capacity` entries.
    pub fn with_capacity(policy: CodepointSequenceComparer, capacity: usize) -> Self {
        tracing::debug!(scheme = ?policy.scheme(), capacity, "creating codepoint index");
        Self {
            policy,
            inner: RwLock::new(PolicyMap::with_capacity(policy, capacity)),
        }
    }

    /// The policy keys are compared and hashed with.
    pub fn policy(&self) -> CodepointSequenceComparer {
        self.policy
    }

    /// Insert `value` under `key` unless an equal key is already present.
    pub fn insert(&self, key: CodepointSequence, value: V) -> Result<InsertResult<V>> {
        let mut inner = self.inner.write()?;

        if let Some(existing) = inner.get(&key) {
            if *existing == value {
                return Ok(InsertResult::AlreadyExists);
            }
            tracing::warn!(key = ?key, "conflicting value for existing index key");
            return Ok(InsertResult::Conflict {
                existing: existing.clone(),
            });
        }

        tracing::trace!(key = ?key, "inserting index entry");
        inner.insert(key, value);
        Ok(InsertResult::Inserted)
    }

    /// Insert or replace, returning the value previously stored.
    pub fn upsert(&self, key: CodepointSequence, value: V) -> Result<Option<V>> {
        let mut inner = self.inner.write()?;
        Ok(inner.insert(key, value))
    }

    /// The value stored under a key equal to `key`.
    pub fn get(&self, key: &CodepointSequence) -> Result<Option<V>> {
        let inner = self.inner.read()?;
        Ok(inner.get(key).cloned())
    }

    /// Whether a key equal to `key` is present.
    pub fn contains(&self, key: &CodepointSequence) -> Result<bool> {
        let inner = self.inner.read()?;
        Ok(inner.contains_key(key))
    }

    /// Remove the entry under a key equal to `key`.
    pub fn remove(&self, key: &CodepointSequence) -> Result<Option<V>> {
        let mut inner = self.inner.write()?;
        Ok(inner.remove(key))
    }

    /// Number of entries.
    pub fn len(&self) -> Result<usize> {
        let inner = self.inner.read()?;
        Ok(inner.len())
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> Result<bool> {
        let inner = self.inner.read()?;
        Ok(inner.is_empty())
    }
}

impl<V: Clone + PartialEq> Default for CodepointIndex<V> {
    fn default() -> Self {
        Self::new(CodepointSequenceComparer::default())
    }
}
