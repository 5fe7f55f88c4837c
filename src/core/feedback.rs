//! Guess scoring and per-letter feedback
//!
//! Every letter of a guess is classified as:
//! - `Correct`: right letter in the right position
//! - `Almost`: letter is in the answer, but somewhere else
//! - `Incorrect`: letter is not in the answer (or all copies are used up)
//!
//! The classification is ordered `Incorrect < Almost < Correct` so that the
//! strongest observation of a letter across several guesses is simply the
//! maximum.

use super::{Answer, WORD_SIZE, Word};
use std::fmt;
use std::str::FromStr;

/// Feedback for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterFeedback {
    Incorrect,
    Almost,
    Correct,
}

impl LetterFeedback {
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Almost => '🟨',
            Self::Incorrect => '⬜',
        }
    }
}

/// Feedback for a whole guess, one entry per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_SIZE]);

impl Feedback {
    /// All positions correct
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_SIZE]);

    #[inline]
    #[must_use]
    pub const fn letters(&self) -> &[LetterFeedback; WORD_SIZE] {
        &self.0
    }

    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Number of positions with the given classification
    #[must_use]
    pub fn count(&self, kind: LetterFeedback) -> usize {
        self.0.iter().filter(|&&f| f == kind).count()
    }

    /// Render as a string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|f| f.to_emoji()).collect()
    }
}

impl FromStr for Feedback {
    type Err = String;

    /// Parse a pattern from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts 'G'/'g'/🟩 for correct, 'Y'/'y'/🟨 for almost and
    /// '-'/'_'/⬜ for incorrect.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parsed: Vec<LetterFeedback> = s
            .chars()
            .map(|ch| match ch {
                'G' | 'g' | '🟩' => Ok(LetterFeedback::Correct),
                'Y' | 'y' | '🟨' => Ok(LetterFeedback::Almost),
                '-' | '_' | '⬜' => Ok(LetterFeedback::Incorrect),
                _ => Err(format!("Invalid feedback character '{ch}' in {s}")),
            })
            .collect::<Result<_, _>>()?;

        let letters: [LetterFeedback; WORD_SIZE] = parsed
            .try_into()
            .map_err(|_| format!("Invalid feedback string: {s}"))?;

        Ok(Self(letters))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_emoji())
    }
}

/// A submitted guess together with its feedback
///
/// Created once when the guess is accepted and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    word: Word,
    feedback: Feedback,
}

impl GuessRecord {
    /// Score `word` against `answer` and record the result
    #[must_use]
    pub fn score(word: Word, answer: &Answer) -> Self {
        let feedback = score_guess(&word, answer);
        Self { word, feedback }
    }

    #[inline]
    #[must_use]
    pub const fn word(&self) -> &Word {
        &self.word
    }

    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    /// Letter and feedback for each position
    pub fn letters(&self) -> impl Iterator<Item = (u8, LetterFeedback)> + '_ {
        self.word
            .chars()
            .iter()
            .copied()
            .zip(self.feedback.letters().iter().copied())
    }
}

/// Calculate the feedback when `guess` is played against `answer`
///
/// Handles duplicate letters the way Wordle does: a letter that occurs `k`
/// times in the answer is marked `Correct` or `Almost` at most `k` times in
/// the guess, and exact matches claim their copy first.
///
/// # Algorithm
/// 1. First pass: mark exact matches and remove them from the letter pool
/// 2. Second pass: mark remaining letters `Almost` while the pool has copies
///    left, otherwise `Incorrect`
///
/// An answer of the wrong length is tolerated: positions past its end are
/// never exact matches.
///
/// # Examples
/// ```
/// use wordle_game::core::{Answer, Feedback, Word, score_guess};
///
/// let feedback = score_guess(&Word::new("paper").unwrap(), &Answer::new("PLANT"));
/// assert_eq!(feedback, "GY---".parse::<Feedback>().unwrap());
/// ```
#[must_use]
pub fn score_guess(guess: &Word, answer: &Answer) -> Feedback {
    let mut result = [LetterFeedback::Incorrect; WORD_SIZE];
    let mut exact = [false; WORD_SIZE];
    let mut available = answer.letter_counts();
    let answer = answer.as_bytes();

    // First pass: exact position matches
    for (i, &letter) in guess.chars().iter().enumerate() {
        if answer.get(i) == Some(&letter) {
            result[i] = LetterFeedback::Correct;
            exact[i] = true;
            if let Some(count) = available.get_mut(&letter) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: present elsewhere, while copies remain
    for (i, &letter) in guess.chars().iter().enumerate() {
        if exact[i] {
            continue;
        }
        if let Some(count) = available.get_mut(&letter)
            && *count > 0
        {
            result[i] = LetterFeedback::Almost;
            *count -= 1;
        }
    }

    Feedback(result)
}

/// Strongest feedback ever observed for `letter` across `history`
///
/// Comparison is case-insensitive. Returns `None` if the letter has not been
/// guessed yet. Because this is a maximum over every observation, a key never
/// regresses to a weaker color as more guesses are made.
#[must_use]
pub fn best_feedback_for_letter(letter: char, history: &[GuessRecord]) -> Option<LetterFeedback> {
    if !letter.is_ascii() {
        return None;
    }
    let target = letter.to_ascii_uppercase() as u8;

    history
        .iter()
        .flat_map(GuessRecord::letters)
        .filter(|&(ch, _)| ch == target)
        .map(|(_, feedback)| feedback)
        .max()
}

/// Best feedback for every key `A..=Z`, indexed by `letter - 'A'`
///
/// Recomputed from scratch on each call.
#[must_use]
pub fn keyboard_feedback(history: &[GuessRecord]) -> [Option<LetterFeedback>; 26] {
    let mut keys = [None; 26];
    for (slot, letter) in keys.iter_mut().zip('A'..='Z') {
        *slot = best_feedback_for_letter(letter, history);
    }
    keys
}
