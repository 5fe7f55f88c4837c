//! Collaborators the game talks to but does not own
//!
//! - [`Dictionary`]: decides whether a word is a real word
//! - [`CelebrationSink`]: told once when the player wins
//! - [`DiagnosticSink`]: receives warnings about a misconfigured answer
//!
//! Closures implement each trait, so tests and front-ends can pass plain
//! functions instead of dedicated types.

use super::validation::AnswerIssue;
use crate::core::{Answer, GuessRecord};

/// Word lookup used to validate guesses and the configured answer
pub trait Dictionary {
    /// Whether `word` is a recognized word
    fn is_valid_word(&self, word: &str) -> bool;
}

impl<F> Dictionary for F
where
    F: Fn(&str) -> bool,
{
    fn is_valid_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Notified exactly once per game, on the transition into victory
pub trait CelebrationSink {
    /// `turns` is the number of guesses it took, including the winning one
    fn celebrate(&mut self, winning: &GuessRecord, turns: usize);
}

impl<F> CelebrationSink for F
where
    F: FnMut(&GuessRecord, usize),
{
    fn celebrate(&mut self, winning: &GuessRecord, turns: usize) {
        self(winning, turns);
    }
}

/// Celebration sink that ignores victories
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCelebration;

impl CelebrationSink for NoCelebration {
    fn celebrate(&mut self, _winning: &GuessRecord, _turns: usize) {}
}

/// Non-fatal warning channel for answer configuration problems
pub trait DiagnosticSink {
    fn warn(&mut self, answer: &Answer, issue: &AnswerIssue);
}

impl<F> DiagnosticSink for F
where
    F: FnMut(&Answer, &AnswerIssue),
{
    fn warn(&mut self, answer: &Answer, issue: &AnswerIssue) {
        self(answer, issue);
    }
}

/// Diagnostic sink that forwards warnings to the `log` facade
#[derive(Debug, Default, Clone, Copy)]
pub struct LogDiagnostics;

impl DiagnosticSink for LogDiagnostics {
    fn warn(&mut self, answer: &Answer, issue: &AnswerIssue) {
        log::warn!("Invalid answer '{answer}': {issue}");
    }
}
