//! Conversions between Rust strings and codepoint sequences.
//!
//! Each `char` maps to its scalar value and back. No normalization or case
//! folding is applied in either direction.

use crate::sequence::CodepointSequence;

impl CodepointSequence {
    /// Build a sequence from the scalar values of `text`.
    pub fn from_text(text: &str) -> Self {
        text.chars().collect()
    }

    /// Render as a `String` when every codepoint is a Unicode scalar value.
    ///
    /// Returns `None` for surrogates and values above `0x10FFFF`.
    pub fn to_text(&self) -> Option<String> {
        self.iter()
            .map(|c| u32::try_from(c).ok().and_then(char::from_u32))
            .collect()
    }

    /// Whether every codepoint is a Unicode scalar value.
    pub fn is_unicode(&self) -> bool {
        self.iter()
            .all(|c| u32::try_from(c).ok().and_then(char::from_u32).is_some())
    }
}

impl From<&str> for CodepointSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl FromIterator<char> for CodepointSequence {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        // char is at most 0x10FFFF, always in range.
        Self::from_valid(iter.into_iter().map(|c| c as i32).collect())
    }
}
