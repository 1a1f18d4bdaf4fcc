//! Chunk-folding hash for codepoint sequences.
//!
//! Codepoints are taken in consecutive chunks of up to four. Each member's
//! low-order bits land in its own byte lane of a 32-bit value:
//!
//! | member | reduction | lane weight |
//! |--------|-----------|-------------|
//! | 1st    | `% 128`   | `2^24`      |
//! | 2nd    | `% 256`   | `2^16`      |
//! | 3rd    | `% 256`   | `2^8`       |
//! | 4th    | `% 256`   | `2^0`       |
//!
//! The per-chunk values are combined with XOR, starting from 0, so the empty
//! sequence hashes to 0. The top bit is never set, so every hash is a
//! non-negative `i32`.
//!
//! Repeating blocks cancel out: `ABCDABCD` folds to 0. Keys with that shape
//! crowd a single bucket.

use serde::{Deserialize, Serialize};

/// Number of codepoints folded together into one 32-bit value.
pub const CHUNK_LEN: usize = 4;

/// Lane weights, as shift amounts, for the members of a chunk.
const LANE_SHIFTS: [u32; CHUNK_LEN] = [24, 16, 8, 0];

/// Which members of a chunk are folded into the hash.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HashScheme {
    /// Every member present in a chunk is folded.
    #[default]
    Folded,

    /// Reproduces hash values stored by earlier releases.
    ///
    /// Member `n` (1-based, `n >= 2`) is folded only when the chunk holds at
    /// most `n` members, and a member past the end of the chunk counts as 0.
    /// In a full chunk the 2nd and 3rd members are therefore ignored.
    Legacy,
}

impl HashScheme {
    /// Hash a slice of codepoints under this scheme.
    ///
    /// Elements are expected to be non-negative; [`crate::CodepointSequence`]
    /// guarantees that at construction.
    pub fn hash(self, elements: &[i32]) -> i32 {
        elements
            .chunks(CHUNK_LEN)
            .fold(0u32, |acc, chunk| acc ^ self.fold_chunk(chunk)) as i32
    }

    /// Fold a single chunk of 1 to 4 members into its 32-bit lane value.
    fn fold_chunk(self, chunk: &[i32]) -> u32 {
        let size = chunk.len();
        let mut value = 0u32;
        for (position, shift) in LANE_SHIFTS.iter().enumerate() {
            let included = match self {
                HashScheme::Folded => position < size,
                HashScheme::Legacy => position == 0 || size <= position + 1,
            };
            if !included {
                continue;
            }
            // Bounds guard: a member past the end of the chunk contributes 0.
            let Some(&member) = chunk.get(position) else {
                continue;
            };
            value += lane(member, position) << shift;
        }
        value
    }
}

/// Reduce a member to its lane width: 7 bits for the first, 8 for the rest.
fn lane(member: i32, position: usize) -> u32 {
    let modulus = if position == 0 { 128 } else { 256 };
    member.rem_euclid(modulus) as u32
}
