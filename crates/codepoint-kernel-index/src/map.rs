//! A hash map whose key equality and hash come from a [`KeyPolicy`].

use std::collections::HashMap;
use std::fmt;

use codepoint_kernel_core::KeyPolicy;

use crate::keyed::PolicyKey;

/// Hash map keyed through a policy.
///
/// Lookups take a borrowed key and clone it into a [`PolicyKey`], so `K`
/// should be cheap to clone (a [`CodepointSequence`] clone is a reference
/// count bump).
///
/// [`CodepointSequence`]: codepoint_kernel_core::CodepointSequence
#[derive(Clone)]
pub struct PolicyMap<K, V, P> {
    entries: HashMap<PolicyKey<K, P>, V>,
    policy: P,
}

impl<K, V, P> PolicyMap<K, V, P>
where
    K: Clone,
    P: KeyPolicy<K> + Clone,
{
    /// Create an empty map using `policy`.
    pub fn new(policy: P) -> Self {
        Self::with_capacity(policy, 0)
    }

    /// Create an empty map with room for `capacity` entries.
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            entries: HashMap::with_capacity(capacity),
            policy,
        }
    }

    /// The policy keys are compared and hashed with.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    fn keyed(&self, key: K) -> PolicyKey<K, P> {
        PolicyKey::new(key, self.policy.clone())
    }

    /// Insert a value, returning the previous value under an equal key.
    ///
    /// When an equal key is already present, the stored key is kept.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let keyed = self.keyed(key);
        self.entries.insert(keyed, value)
    }

    /// The value stored under a key equal to `key`.
    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(&self.keyed(key.clone()))
    }

    /// The stored key equal to `key`, with its value.
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.entries
            .get_key_value(&self.keyed(key.clone()))
            .map(|(k, v)| (k.key(), v))
    }

    /// Whether a key equal to `key` is present.
    pub fn contains_key(&self, key: &K) -> bool {
        self.entries.contains_key(&self.keyed(key.clone()))
    }

    /// Remove the entry under a key equal to `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let keyed = self.keyed(key.clone());
        self.entries.remove(&keyed)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k.key(), v))
    }

    /// Iterate over keys in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys().map(PolicyKey::key)
    }
}

impl<K, V, P> PolicyMap<K, V, P> {
    pub(crate) fn debug_keys(&self) -> impl Iterator<Item = &K> {
        self.entries.keys().map(PolicyKey::key)
    }
}

impl<K: fmt::Debug, V: fmt::Debug, P> fmt::Debug for PolicyMap<K, V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}
