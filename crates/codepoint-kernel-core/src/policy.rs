//! Key policies: paired equality and hash functions for hash-based containers.
//!
//! A container keyed through a [`KeyPolicy`] consults one value for both
//! operations, so equality can never be installed without its hash.

use crate::hash::HashScheme;
use crate::sequence::CodepointSequence;

/// An equivalence relation and a hash function that agree with it.
///
/// Implementations must guarantee that `equals(Some(a), Some(b))` implies
/// `hash_code(Some(a)) == hash_code(Some(b))`.
pub trait KeyPolicy<T: ?Sized> {
    /// Whether two possibly absent values are equivalent.
    fn equals(&self, a: Option<&T>, b: Option<&T>) -> bool;

    /// Hash of a possibly absent value.
    fn hash_code(&self, value: Option<&T>) -> i32;
}

/// Equality and hash for [`CodepointSequence`].
///
/// Equality is elementwise identity of the integer values. Two absent values
/// are equal; an absent value never equals a present one. The hash of an
/// absent value is 0, the same as the empty sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CodepointSequenceComparer {
    scheme: HashScheme,
}

impl CodepointSequenceComparer {
    /// A comparer hashing with `scheme`.
    pub const fn new(scheme: HashScheme) -> Self {
        Self { scheme }
    }

    /// A comparer that reproduces hash values of earlier releases.
    pub const fn legacy() -> Self {
        Self::new(HashScheme::Legacy)
    }

    /// The hash scheme in use.
    pub const fn scheme(&self) -> HashScheme {
        self.scheme
    }
}

impl KeyPolicy<CodepointSequence> for CodepointSequenceComparer {
    fn equals(&self, a: Option<&CodepointSequence>, b: Option<&CodepointSequence>) -> bool {
        let (a, b) = match (a, b) {
            (None, None) => return true,
            (Some(a), Some(b)) => (a, b),
            _ => return false,
        };
        if a.ptr_eq(b) {
            return true;
        }
        if a.len() != b.len() {
            return false;
        }
        if a.is_empty() {
            return true;
        }
        a.as_slice() == b.as_slice()
    }

    fn hash_code(&self, value: Option<&CodepointSequence>) -> i32 {
        value.map_or(0, |v| v.cached_hash(self.scheme))
    }
}
