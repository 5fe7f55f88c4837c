//! Word representation
//!
//! A `Word` is a validated guess: exactly [`WORD_SIZE`] uppercase ASCII
//! letters. An `Answer` is the configured secret, which is kept verbatim even
//! when it is malformed so that a misconfigured game can still be played.

use super::WORD_SIZE;
use rustc_hash::FxHashMap;
use std::fmt;

/// A validated 5-letter guess
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    chars: [u8; WORD_SIZE],
}

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    InvalidLength(usize),
    NonAscii,
    InvalidCharacters,
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {WORD_SIZE} letters, got {len}")
            }
            Self::NonAscii => write!(f, "Word must contain only ASCII letters"),
            Self::InvalidCharacters => write!(f, "Word contains invalid characters"),
        }
    }
}

impl std::error::Error for WordError {}

impl Word {
    /// Create a new Word from a string, normalizing it to uppercase
    ///
    /// # Errors
    /// Returns `WordError` if:
    /// - Length is not exactly 5
    /// - Contains non-ASCII characters
    /// - Contains non-alphabetic characters
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Word;
    ///
    /// let word = Word::new("crane").unwrap();
    /// assert_eq!(word.text(), "CRANE");
    ///
    /// assert!(Word::new("too long").is_err());
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        if !text.is_ascii() {
            return Err(WordError::NonAscii);
        }

        let chars: [u8; WORD_SIZE] = text
            .to_ascii_uppercase()
            .into_bytes()
            .try_into()
            .map_err(|bytes: Vec<u8>| WordError::InvalidLength(bytes.len()))?;

        if !chars.iter().all(u8::is_ascii_uppercase) {
            return Err(WordError::InvalidCharacters);
        }

        Ok(Self { chars })
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        // Only ASCII letters are ever stored
        std::str::from_utf8(&self.chars).unwrap_or_default()
    }

    /// Get the word as a byte array
    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[u8; WORD_SIZE] {
        &self.chars
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The secret word of a game
///
/// Stored exactly as configured. Validation happens separately and only
/// produces warnings, so this type accepts any string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    text: String,
}

impl Answer {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Whether `guess` spells out this answer exactly
    #[must_use]
    pub fn matches(&self, guess: &Word) -> bool {
        self.as_bytes() == guess.chars()
    }

    /// Count of each byte in the answer
    ///
    /// This is the pool consumed while scoring a guess.
    pub(crate) fn letter_counts(&self) -> FxHashMap<u8, u8> {
        let mut counts = FxHashMap::default();
        for &ch in self.as_bytes() {
            let count: &mut u8 = counts.entry(ch).or_insert(0);
            *count = count.saturating_add(1);
        }
        counts
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Uppercase `raw` and drop every character that is not an ASCII letter
///
/// Non-letters never occupy a slot, so `"h3!rt"` becomes `"HRT"`.
#[must_use]
pub fn normalize_guess(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
