//! Staged input for the guess being typed

use crate::core::WORD_SIZE;

/// Letters typed so far for the next guess
///
/// Only ASCII letters are kept (uppercased) and at most [`WORD_SIZE`] of
/// them. The buffer is never scored; it is only handed to the game on submit.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GuessBuffer {
    letters: String,
}

impl GuessBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a typed character
    ///
    /// Returns `false` if it was dropped (not a letter, or buffer full).
    pub fn push(&mut self, c: char) -> bool {
        if !c.is_ascii_alphabetic() || self.is_full() {
            return false;
        }
        self.letters.push(c.to_ascii_uppercase());
        true
    }

    /// Remove the last letter
    pub fn pop(&mut self) -> Option<char> {
        self.letters.pop()
    }

    pub fn clear(&mut self) {
        self.letters.clear();
    }

    /// Replace the contents as if `raw` had been typed from scratch
    ///
    /// Anything beyond the first [`WORD_SIZE`] letters is cut off.
    pub fn set(&mut self, raw: &str) {
        self.clear();
        for c in raw.chars() {
            self.push(c);
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.letters
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.letters.len() >= WORD_SIZE
    }
}
