//! Canonical form of a title.

use std::collections::BTreeSet;

/// Marker dropped from every title; some stores put it in DLC names.
const DLC_MARKER: &str = "dlc";

/// Normalize a title into its canonical comparable form.
///
/// - commas are deleted outright so "1,000" stays a single number
/// - ASCII letters are lowercased
/// - every other character outside `[a-z0-9]` becomes a space
/// - "dlc" is removed until none is left
/// - whitespace runs collapse to one space and the ends are trimmed
///
/// The result only contains `[a-z0-9 ]`, so canonicalizing it again is a no-op.
pub fn canonicalize(text: &str) -> String {
    let mut folded: String = text
        .chars()
        .filter(|c| *c != ',')
        .map(|c| {
            let c = c.to_ascii_lowercase();
            if c.is_ascii_alphanumeric() {
                c
            } else {
                ' '
            }
        })
        .collect();

    // Removing one marker can splice a new one together ("ddlclc").
    while folded.contains(DLC_MARKER) {
        folded = folded.replace(DLC_MARKER, "");
    }

    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// A canonical title with the derived views the equivalence tests need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalTitle {
    text: String,
    words: BTreeSet<String>,
    sorted_chars: Vec<u8>,
    word_count: usize,
}

impl CanonicalTitle {
    /// Canonicalize raw text.
    pub fn new(raw: &str) -> Self {
        Self::from_canonical(canonicalize(raw))
    }

    /// Wrap text that is already canonical (e.g. a numeral variant).
    pub fn from_canonical(text: String) -> Self {
        let words = text.split_whitespace().map(str::to_string).collect();
        let word_count = text.split_whitespace().count();
        let mut sorted_chars: Vec<u8> = text.bytes().filter(|b| *b != b' ').collect();
        sorted_chars.sort_unstable();

        Self {
            text,
            words,
            sorted_chars,
            word_count,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Number of space-delimited words.
    pub fn word_count(&self) -> usize {
        self.word_count
    }

    /// Words in order of appearance.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    /// Same text, byte for byte.
    pub fn is_exact(&self, other: &CanonicalTitle) -> bool {
        self.text == other.text
    }

    /// Same set of words, any order.
    pub fn has_same_words(&self, other: &CanonicalTitle) -> bool {
        self.words == other.words
    }

    /// Same characters once spaces are dropped and the rest is sorted.
    ///
    /// Catches transposed letters ("outlsat" / "outlast") but has no
    /// distance bound: any two anagrams of equal length compare equal.
    pub fn has_same_characters(&self, other: &CanonicalTitle) -> bool {
        self.sorted_chars == other.sorted_chars
    }

    /// `other` appears as a contiguous substring of `self`.
    pub fn contains(&self, other: &CanonicalTitle) -> bool {
        self.text.contains(other.text.as_str())
    }

    /// Every word of `other` appears somewhere in `self`, not necessarily
    /// on a word boundary.
    pub fn contains_all_words_of(&self, other: &CanonicalTitle) -> bool {
        other.words().all(|word| self.text.contains(word))
    }
}
