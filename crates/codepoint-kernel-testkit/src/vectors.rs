//! Golden hash vectors.
//!
//! Each vector pins the hash of one sequence under both schemes. A change to
//! any expected value breaks every hash previously stored by a consumer.

use codepoint_kernel_core::{CodepointSequence, CodepointSequenceComparer, HashScheme, KeyPolicy};

/// A golden hash vector.
#[derive(Debug, Clone)]
pub struct HashVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Codepoints of the sequence.
    pub elements: &'static [i32],
    /// Expected hash under [`HashScheme::Folded`].
    pub folded: i32,
    /// Expected hash under [`HashScheme::Legacy`].
    pub legacy: i32,
}

impl HashVector {
    /// Build the sequence this vector describes.
    pub fn sequence(&self) -> CodepointSequence {
        CodepointSequence::try_from(self.elements).expect("golden vectors are in range")
    }

    /// Expected hash under `scheme`.
    pub fn expected(&self, scheme: HashScheme) -> i32 {
        match scheme {
            HashScheme::Folded => self.folded,
            HashScheme::Legacy => self.legacy,
        }
    }
}

/// Get all golden hash vectors.
pub fn all_vectors() -> Vec<HashVector> {
    vec![
        HashVector {
            name: "empty",
            elements: &[],
            folded: 0,
            legacy: 0,
        },
        HashVector {
            name: "single ASCII",
            elements: &[65],
            folded: 0x4100_0000,
            legacy: 0x4100_0000,
        },
        HashVector {
            name: "two members",
            elements: &[65, 66],
            folded: 0x4142_0000,
            legacy: 0x4142_0000,
        },
        HashVector {
            name: "three members",
            elements: &[65, 66, 67],
            folded: 0x4142_4300,
            legacy: 0x4100_4300,
        },
        HashVector {
            name: "full chunk",
            elements: &[65, 66, 67, 68],
            folded: 0x4142_4344,
            legacy: 0x4100_0044,
        },
        HashVector {
            name: "two full chunks",
            elements: &[1, 2, 3, 4, 5, 6, 7, 8],
            folded: 0x0404_040C,
            legacy: 0x0400_000C,
        },
        HashVector {
            name: "two full chunks, third member changed",
            elements: &[1, 2, 99, 4, 5, 6, 7, 8],
            folded: 0x0404_640C,
            legacy: 0x0400_000C,
        },
        HashVector {
            name: "length 5",
            elements: &[1, 2, 3, 4, 5],
            folded: 0x0402_0304,
            legacy: 0x0400_0004,
        },
        HashVector {
            name: "length 6",
            elements: &[1, 2, 3, 4, 5, 6],
            folded: 0x0404_0304,
            legacy: 0x0406_0004,
        },
        HashVector {
            name: "length 7",
            elements: &[1, 2, 3, 4, 5, 6, 7],
            folded: 0x0404_0404,
            legacy: 0x0400_0704,
        },
        HashVector {
            name: "repeated block cancels",
            elements: &[65, 66, 67, 68, 65, 66, 67, 68],
            folded: 0,
            legacy: 0,
        },
        HashVector {
            name: "maximum codepoint",
            elements: &[0x7FFF_FFFF],
            folded: 0x7F00_0000,
            legacy: 0x7F00_0000,
        },
        HashVector {
            name: "maximum codepoint twice",
            elements: &[0x7FFF_FFFF, 0x7FFF_FFFF],
            folded: 0x7FFF_0000,
            legacy: 0x7FFF_0000,
        },
        HashVector {
            name: "lane reduction",
            elements: &[128, 256, 384, 512],
            folded: 0x0000_8000,
            legacy: 0,
        },
        HashVector {
            name: "non-ASCII text",
            elements: &[104, 233, 108, 108, 111],
            folded: 0x07E9_6C6C,
            legacy: 0x0700_006C,
        },
        HashVector {
            name: "astral codepoint with zero low bits",
            elements: &[0x1F600],
            folded: 0,
            legacy: 0,
        },
    ]
}

/// Check every vector under both schemes through the key policy.
///
/// Returns `(name, matches)` per vector.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let policies = [
        CodepointSequenceComparer::new(HashScheme::Folded),
        CodepointSequenceComparer::legacy(),
    ];
    all_vectors()
        .iter()
        .map(|v| {
            let s = v.sequence();
            let matches = policies
                .iter()
                .all(|p| p.hash_code(Some(&s)) == v.expected(p.scheme()));
            (v.name.to_string(), matches)
        })
        .collect()
}
