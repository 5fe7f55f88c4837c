//! Wordle Game
//!
//! A terminal Wordle: the scoring rules, a game state machine with injected
//! collaborators, and TUI and line-based front-ends.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_game::core::{Answer, LetterFeedback, Word, score_guess};
//! use wordle_game::game::{GameState, NoCelebration, Outcome};
//!
//! // Score a single guess
//! let feedback = score_guess(&Word::new("paper").unwrap(), &Answer::new("PLANT"));
//! assert_eq!(feedback.letters()[0], LetterFeedback::Correct);
//!
//! // Play a game against a tiny dictionary
//! let dictionary = |word: &str| ["PLANT", "PAPER"].contains(&word);
//! let mut quiet = |_: &Answer, _: &wordle_game::game::AnswerIssue| {};
//! let mut game = GameState::new("PLANT", 6, &dictionary, &mut quiet);
//! assert_eq!(
//!     game.submit_guess("plant", &dictionary, &mut NoCelebration),
//!     Ok(Outcome::Victory)
//! );
//! ```

// Core domain types
pub mod core;

/// Shown by the front-ends, since the embedded dictionary is small
pub const DICTIONARY_HINT: &str = "Words missing? Use --wordlist <FILE> for a bigger dictionary.";

// Game state machine
pub mod game;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
