//! The codepoint sequence: an immutable, shareable run of codepoints.
//!
//! A sequence is the canonical form of an identifier, a text value, or a
//! generated serialization key. Once built it never changes, which is what
//! lets the hash be computed once and cached.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

use crate::error::CoreError;
use crate::hash::HashScheme;
use crate::policy::{CodepointSequenceComparer, KeyPolicy};

/// Largest value a codepoint may take.
pub const MAX_CODEPOINT: i32 = 0x7FFF_FFFF;

/// An ordered, immutable sequence of codepoints in `0..=0x7FFFFFFF`.
///
/// Cloning is cheap: clones share the element storage and the hash cache,
/// and compare equal through the identity fast path.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "Vec<i32>", into = "Vec<i32>")]
pub struct CodepointSequence {
    inner: Arc<Inner>,
}

struct Inner {
    elements: Box<[i32]>,
    cache: HashCache,
}

/// Compute-once hash slots, one per scheme.
#[derive(Default)]
struct HashCache {
    folded: OnceLock<i32>,
    legacy: OnceLock<i32>,
}

impl HashCache {
    fn slot(&self, scheme: HashScheme) -> &OnceLock<i32> {
        match scheme {
            HashScheme::Folded => &self.folded,
            HashScheme::Legacy => &self.legacy,
        }
    }
}

impl CodepointSequence {
    /// Build a sequence, rejecting any element outside `0..=0x7FFFFFFF`.
    pub fn new(elements: Vec<i32>) -> Result<Self, CoreError> {
        if let Some(index) = elements.iter().position(|&c| c < 0) {
            return Err(CoreError::RangeViolation {
                index,
                value: elements[index].into(),
            });
        }
        Ok(Self::from_valid(elements))
    }

    /// Build a sequence from unsigned values, rejecting any above `0x7FFFFFFF`.
    pub fn from_u32s(values: &[u32]) -> Result<Self, CoreError> {
        let elements = values
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                i32::try_from(value).map_err(|_| CoreError::RangeViolation {
                    index,
                    value: value.into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_valid(elements))
    }

    /// The empty sequence.
    pub fn empty() -> Self {
        Self::from_valid(Vec::new())
    }

    /// Wrap elements already known to be in range.
    pub(crate) fn from_valid(elements: Vec<i32>) -> Self {
        Self {
            inner: Arc::new(Inner {
                elements: elements.into_boxed_slice(),
                cache: HashCache::default(),
            }),
        }
    }

    /// Number of codepoints.
    pub fn len(&self) -> usize {
        self.inner.elements.len()
    }

    /// Whether the sequence has no codepoints.
    pub fn is_empty(&self) -> bool {
        self.inner.elements.is_empty()
    }

    /// The codepoint at `index`.
    ///
    /// Fails with [`CoreError::OutOfRange`] when `index` is negative or not
    /// less than [`len`](Self::len).
    pub fn element_at(&self, index: isize) -> Result<i32, CoreError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.get(i))
            .ok_or(CoreError::OutOfRange {
                index,
                len: self.len(),
            })
    }

    /// The codepoint at `index`, if any.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.inner.elements.get(index).copied()
    }

    /// All codepoints, in order.
    pub fn as_slice(&self) -> &[i32] {
        &self.inner.elements
    }

    /// Iterate over the codepoints.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.inner.elements.iter().copied()
    }

    /// Whether `self` and `other` are handles to the same instance.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Hash under `scheme`, computing and caching it on first use.
    pub(crate) fn cached_hash(&self, scheme: HashScheme) -> i32 {
        *self
            .inner
            .cache
            .slot(scheme)
            .get_or_init(|| scheme.hash(&self.inner.elements))
    }

    #[cfg(test)]
    pub(crate) fn is_hash_cached(&self, scheme: HashScheme) -> bool {
        self.inner.cache.slot(scheme).get().is_some()
    }
}

impl Default for CodepointSequence {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for CodepointSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CodepointSequence")
            .field(&self.as_slice())
            .finish()
    }
}

impl PartialEq for CodepointSequence {
    fn eq(&self, other: &Self) -> bool {
        CodepointSequenceComparer::default().equals(Some(self), Some(other))
    }
}

impl Eq for CodepointSequence {}

impl Hash for CodepointSequence {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(CodepointSequenceComparer::default().hash_code(Some(self)));
    }
}

impl PartialOrd for CodepointSequence {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodepointSequence {
    fn cmp(&self, other: &Self) -> Ordering {
        if self.ptr_eq(other) {
            return Ordering::Equal;
        }
        self.as_slice().cmp(other.as_slice())
    }
}

impl TryFrom<Vec<i32>> for CodepointSequence {
    type Error = CoreError;

    fn try_from(elements: Vec<i32>) -> Result<Self, Self::Error> {
        Self::new(elements)
    }
}

impl TryFrom<&[i32]> for CodepointSequence {
    type Error = CoreError;

    fn try_from(elements: &[i32]) -> Result<Self, Self::Error> {
        Self::new(elements.to_vec())
    }
}

impl From<CodepointSequence> for Vec<i32> {
    fn from(sequence: CodepointSequence) -> Self {
        sequence.as_slice().to_vec()
    }
}

impl AsRef<[i32]> for CodepointSequence {
    fn as_ref(&self) -> &[i32] {
        self.as_slice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn seq(elements: &[i32]) -> CodepointSequence {
        CodepointSequence::new(elements.to_vec()).unwrap()
    }

    #[test]
    fn test_construct_accepts_full_range() {
        let s = seq(&[0, 65, MAX_CODEPOINT]);
        assert_eq!(s.len(), 3);
        assert_eq!(s.as_slice(), &[0, 65, MAX_CODEPOINT]);
    }

    #[test]
    fn test_construct_rejects_negative() {
        let err = CodepointSequence::new(vec![65, -1, 66]).unwrap_err();
        assert_eq!(err, CoreError::RangeViolation { index: 1, value: -1 });
    }

    #[test]
    fn test_from_u32s_rejects_above_max() {
        let err = CodepointSequence::from_u32s(&[1, 0x8000_0000]).unwrap_err();
        assert_eq!(
            err,
            CoreError::RangeViolation {
                index: 1,
                value: 0x8000_0000
            }
        );
        let ok = CodepointSequence::from_u32s(&[1, 0x7FFF_FFFF]).unwrap();
        assert_eq!(ok.as_slice(), &[1, MAX_CODEPOINT]);
    }

    #[test]
    fn test_empty_is_valid() {
        let s = seq(&[]);
        assert!(s.is_empty());
        assert_eq!(s, CodepointSequence::empty());
        assert_eq!(s, CodepointSequence::default());
    }

    #[test]
    fn test_element_at_in_bounds() {
        let s = seq(&[10, 20, 30]);
        assert_eq!(s.element_at(0), Ok(10));
        assert_eq!(s.element_at(2), Ok(30));
        assert_eq!(s.get(1), Some(20));
    }

    #[test]
    fn test_element_at_out_of_range() {
        for elements in [&[][..], &[65][..], &[1, 2, 3, 4, 5][..]] {
            let s = seq(elements);
            let len = s.len();
            assert_eq!(
                s.element_at(len as isize),
                Err(CoreError::OutOfRange {
                    index: len as isize,
                    len
                })
            );
            assert_eq!(
                s.element_at(-1),
                Err(CoreError::OutOfRange { index: -1, len })
            );
        }
    }

    #[test]
    fn test_clone_shares_instance_and_cache() {
        let s = seq(&[1, 2, 3]);
        let c = s.clone();
        assert!(s.ptr_eq(&c));
        let _ = c.cached_hash(HashScheme::Folded);
        assert!(s.is_hash_cached(HashScheme::Folded));
        assert!(!s.is_hash_cached(HashScheme::Legacy));
    }

    #[test]
    fn test_independent_instances_are_not_identical() {
        let a = seq(&[1, 2, 3]);
        let b = seq(&[1, 2, 3]);
        assert!(!a.ptr_eq(&b));
        assert_eq!(a, b);
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        assert!(seq(&[1, 2]) < seq(&[1, 3]));
        assert!(seq(&[1, 2]) < seq(&[1, 2, 0]));
        assert!(seq(&[]) < seq(&[0]));
        let s = seq(&[5]);
        assert_eq!(s.cmp(&s.clone()), Ordering::Equal);
    }

    #[test]
    fn test_serde_roundtrip_and_validation() {
        let s = seq(&[65, 66, 0x10FFFF]);
        let json = serde_json::to_string(&s).unwrap();
        assert_eq!(json, "[65,66,1114111]");
        let back: CodepointSequence = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        let bad = serde_json::from_str::<CodepointSequence>("[1,-5]");
        assert!(bad.is_err());
    }

    #[test]
    fn test_debug_shows_elements() {
        assert_eq!(format!("{:?}", seq(&[65, 66])), "CodepointSequence([65, 66])");
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CodepointSequence>();
    }

    proptest! {
        #[test]
        fn prop_construct_preserves_elements(elements in prop::collection::vec(0..=MAX_CODEPOINT, 0..32)) {
            let s = CodepointSequence::new(elements.clone()).unwrap();
            prop_assert_eq!(s.len(), elements.len());
            for (i, &c) in elements.iter().enumerate() {
                prop_assert_eq!(s.element_at(i as isize), Ok(c));
            }
        }

        #[test]
        fn prop_ordering_matches_slices(
            a in prop::collection::vec(0..4i32, 0..6),
            b in prop::collection::vec(0..4i32, 0..6),
        ) {
            let sa = CodepointSequence::new(a.clone()).unwrap();
            let sb = CodepointSequence::new(b.clone()).unwrap();
            prop_assert_eq!(sa.cmp(&sb), a.cmp(&b));
        }
    }
}
