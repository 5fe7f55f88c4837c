//! Hash-set backed dictionary

use super::{ALLOWED, ANSWERS};
use crate::game::Dictionary;
use rustc_hash::FxHashSet;

/// Set of accepted words, stored uppercase
///
/// Lookups are case-insensitive.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: FxHashSet<String>,
}

impl WordList {
    /// Build from any words; blank entries are skipped
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_ascii_uppercase())
            .filter(|word| !word.is_empty())
            .collect();
        Self { words }
    }

    /// The embedded dictionary: every allowed guess plus every answer
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(ALLOWED.iter().chain(ANSWERS))
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_ascii_uppercase())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}
