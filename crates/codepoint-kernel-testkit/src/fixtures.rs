//! Test fixtures and helpers.
//!
//! Common setup code for index and interning tests.

use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer};
use codepoint_kernel_index::{CodepointIndex, Interner};

/// Identifier names typical of tuple attribute names.
pub fn sample_identifiers() -> Vec<&'static str> {
    vec![
        "", "a", "id", "name", "employee_id", "dept", "salary", "x1", "x2", "_",
        "attr_with_a_rather_long_name",
    ]
}

/// `block` repeated `times` times.
pub fn repeating_block(block: &[i32], times: usize) -> CodepointSequence {
    CodepointSequence::new(block.repeat(times)).expect("block codepoints are in range")
}

/// Pairs of unequal sequences with equal hashes under `policy`.
pub fn colliding_pairs(
    policy: CodepointSequenceComparer,
) -> Vec<(CodepointSequence, CodepointSequence)> {
    use codepoint_kernel_core::HashScheme;

    let mut pairs = vec![
        // Repeated blocks cancel under XOR.
        (
            CodepointSequence::from_text("ABCDABCD"),
            CodepointSequence::from_text("WXYZWXYZ"),
        ),
        // Lanes only see the low bits.
        (
            CodepointSequence::from_text("A"),
            CodepointSequence::from_text("\u{C1}"),
        ),
        (CodepointSequence::empty(), CodepointSequence::from_text("\u{1F600}")),
    ];
    if policy.scheme() == HashScheme::Legacy {
        // Interior members of a full chunk are not folded.
        pairs.push((
            CodepointSequence::from_text("ABCD"),
            CodepointSequence::from_text("AxyD"),
        ));
    }
    pairs
}

/// An index and interner populated with [`sample_identifiers`].
pub struct IndexFixture {
    pub policy: CodepointSequenceComparer,
    pub index: CodepointIndex<usize>,
    pub interner: Interner,
}

impl IndexFixture {
    /// Create a fixture using `policy`, mapping each sample name to its position.
    pub fn new(policy: CodepointSequenceComparer) -> Self {
        let index = CodepointIndex::new(policy);
        let interner = Interner::new(policy);
        for (position, name) in sample_identifiers().into_iter().enumerate() {
            let key = interner
                .intern(CodepointSequence::from_text(name))
                .expect("fresh interner lock");
            index.insert(key, position).expect("fresh index lock");
        }
        Self {
            policy,
            index,
            interner,
        }
    }

    /// Look up a sample name with a freshly built, non-interned key.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        self.index
            .get(&CodepointSequence::from_text(name))
            .expect("fixture lock is never poisoned")
    }
}

impl Default for IndexFixture {
    fn default() -> Self {
        Self::new(CodepointSequenceComparer::default())
    }
}
