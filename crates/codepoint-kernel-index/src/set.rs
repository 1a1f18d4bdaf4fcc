//! A hash set whose membership is decided by a [`KeyPolicy`].

use std::fmt;

use codepoint_kernel_core::KeyPolicy;

use crate::map::PolicyMap;

/// Hash set keyed through a policy.
#[derive(Clone)]
pub struct PolicySet<K, P> {
    map: PolicyMap<K, (), P>,
}

impl<K, P> PolicySet<K, P>
where
    K: Clone,
    P: KeyPolicy<K> + Clone,
{
    /// Create an empty set using `policy`.
    pub fn new(policy: P) -> Self {
        Self {
            map: PolicyMap::new(policy),
        }
    }

    /// Create an empty set with room for `capacity` members.
    pub fn with_capacity(policy: P, capacity: usize) -> Self {
        Self {
            map: PolicyMap::with_capacity(policy, capacity),
        }
    }

    /// Add `value`; returns `false` if an equal member was already present.
    pub fn insert(&mut self, value: K) -> bool {
        self.map.insert(value, ()).is_none()
    }

    /// The stored member equal to `value`.
    pub fn get(&self, value: &K) -> Option<&K> {
        self.map.get_key_value(value).map(|(k, _)| k)
    }

    /// Whether a member equal to `value` is present.
    pub fn contains(&self, value: &K) -> bool {
        self.map.contains_key(value)
    }

    /// Remove the member equal to `value`.
    pub fn remove(&mut self, value: &K) -> bool {
        self.map.remove(value).is_some()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate over members in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &K> {
        self.map.keys()
    }
}

impl<K: fmt::Debug, P> fmt::Debug for PolicySet<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.map.debug_keys()).finish()
    }
}
