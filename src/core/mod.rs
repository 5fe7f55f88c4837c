//! Core domain types for Wordle
//!
//! Words, feedback and the scoring rules. Everything here is pure: no I/O,
//! no game state, no collaborators.

mod feedback;
mod word;

pub use feedback::{
    Feedback, GuessRecord, LetterFeedback, best_feedback_for_letter, keyboard_feedback,
    score_guess,
};
pub use word::{Answer, Word, WordError, normalize_guess};

/// Number of letters in every word
pub const WORD_SIZE: usize = 5;

/// Attempts a player gets before the game is lost
pub const MAX_GUESSES: usize = 6;

/// Shown once the answer has been guessed
pub const VICTORY_MESSAGE: &str = "You won! 🥳";

/// Shown once every attempt has been used without finding the answer
pub const DEFEAT_MESSAGE: &str = "Better luck next time! 😞";
