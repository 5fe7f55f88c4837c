//! One-off scoring command
//!
//! Scores a guess against an answer without starting a game.

use crate::core::{Answer, GuessRecord, Word};
use anyhow::{Context, Result};

/// Score `guess` against `answer`
///
/// The answer is taken as given (uppercased), like a configured answer.
///
/// # Errors
///
/// Returns an error if `guess` is not a 5-letter word.
pub fn score_word(guess: &str, answer: &str) -> Result<GuessRecord> {
    let word = Word::new(guess).with_context(|| format!("Invalid guess '{guess}'"))?;
    let answer = Answer::new(answer.to_ascii_uppercase());
    Ok(GuessRecord::score(word, &answer))
}
