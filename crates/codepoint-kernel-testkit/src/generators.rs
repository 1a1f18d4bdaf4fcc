//! Proptest generators for property-based testing.

use proptest::prelude::*;

use codepoint_kernel_core::{CodepointSequence, MAX_CODEPOINT};

/// Generate any valid codepoint.
pub fn codepoint() -> impl Strategy<Value = i32> {
    0..=MAX_CODEPOINT
}

/// Generate raw elements of at most `max_len` codepoints.
pub fn elements(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(codepoint(), 0..=max_len)
}

/// Generate a sequence of at most `max_len` codepoints.
pub fn sequence(max_len: usize) -> impl Strategy<Value = CodepointSequence> {
    elements(max_len).prop_map(|e| {
        CodepointSequence::new(e).expect("generated codepoints are in range")
    })
}

/// Generate a sequence of Unicode scalar values.
pub fn unicode_sequence(max_len: usize) -> impl Strategy<Value = CodepointSequence> {
    prop::collection::vec(any::<char>(), 0..=max_len).prop_map(CodepointSequence::from_iter)
}

/// Generate an identifier name.
pub fn identifier() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,31}".prop_map(String::from)
}

/// Generate a value outside `0..=0x7FFFFFFF` as seen through `i32`.
pub fn out_of_range() -> impl Strategy<Value = i32> {
    i32::MIN..0
}

/// Generate elements together with a valid index into them.
pub fn elements_with_index(max_len: usize) -> impl Strategy<Value = (Vec<i32>, usize)> {
    prop::collection::vec(codepoint(), 1..=max_len.max(1)).prop_flat_map(|e| {
        let len = e.len();
        (Just(e), 0..len)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use codepoint_kernel_core::{CodepointSequenceComparer, CoreError, KeyPolicy};

    proptest! {
        #[test]
        fn test_independent_construction_is_equal(e in elements(40)) {
            let a = CodepointSequence::new(e.clone()).unwrap();
            let b = CodepointSequence::new(e).unwrap();
            prop_assert_eq!(&a, &b);
            let policy = CodepointSequenceComparer::default();
            prop_assert_eq!(policy.hash_code(Some(&a)), policy.hash_code(Some(&b)));
        }

        #[test]
        fn test_clone_is_same_instance(s in sequence(32)) {
            let c = s.clone();
            prop_assert!(c.ptr_eq(&s));
            prop_assert_eq!(c, s);
        }

        #[test]
        fn test_unicode_sequence_renders(s in unicode_sequence(40)) {
            prop_assert!(s.is_unicode());
            let text = s.to_text().unwrap();
            prop_assert_eq!(CodepointSequence::from_text(&text), s);
        }

        #[test]
        fn test_out_of_range_rejected(
            (mut e, index) in elements_with_index(16),
            bad in out_of_range(),
        ) {
            e[index] = bad;
            let err = CodepointSequence::new(e).unwrap_err();
            prop_assert_eq!(err, CoreError::RangeViolation { index, value: bad.into() });
        }

        #[test]
        fn test_single_perturbation_changes_folded_hash(
            (e, index) in elements_with_index(16),
            delta in 1..128i32,
        ) {
            // The replacement differs from the original in its low 7 bits,
            // so its byte lane changes whatever its position in the chunk.
            let mut perturbed = e.clone();
            perturbed[index] = (e[index] % 128 + delta) % 128;
            let a = CodepointSequence::new(e).unwrap();
            let b = CodepointSequence::new(perturbed).unwrap();
            let policy = CodepointSequenceComparer::default();
            prop_assert_ne!(policy.hash_code(Some(&a)), policy.hash_code(Some(&b)));
        }

        #[test]
        fn test_identifier_sequences_are_ascii(name in identifier()) {
            let s = CodepointSequence::from_text(&name);
            prop_assert_eq!(s.len(), name.len());
            prop_assert!(s.iter().all(|c| c < 128));
        }
    }
}
