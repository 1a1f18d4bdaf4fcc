//! Adapter giving a key the `Hash` and `Eq` of its policy.

use std::fmt;
use std::hash::{Hash, Hasher};

use codepoint_kernel_core::KeyPolicy;

/// A key bundled with the policy that hashes and compares it.
#[derive(Clone)]
pub struct PolicyKey<K, P> {
    key: K,
    policy: P,
}

impl<K, P: KeyPolicy<K>> PolicyKey<K, P> {
    /// Bundle `key` with `policy`.
    pub fn new(key: K, policy: P) -> Self {
        Self { key, policy }
    }
}

impl<K, P> PolicyKey<K, P> {
    /// The wrapped key.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// Unwrap the key.
    pub fn into_key(self) -> K {
        self.key
    }
}

impl<K, P: KeyPolicy<K>> PartialEq for PolicyKey<K, P> {
    fn eq(&self, other: &Self) -> bool {
        self.policy.equals(Some(&self.key), Some(&other.key))
    }
}

impl<K, P: KeyPolicy<K>> Eq for PolicyKey<K, P> {}

impl<K, P: KeyPolicy<K>> Hash for PolicyKey<K, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.policy.hash_code(Some(&self.key)));
    }
}

impl<K: fmt::Debug, P> fmt::Debug for PolicyKey<K, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.key.fmt(f)
    }
}
