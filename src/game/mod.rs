//! Game state machine
//!
//! Validates guesses, keeps the guess history and decides the outcome.
//! Dictionary lookups, victory effects and diagnostics are injected.

mod buffer;
mod collaborators;
mod config;
mod session;
mod state;
mod validation;

pub use buffer::GuessBuffer;
pub use collaborators::{
    CelebrationSink, DiagnosticSink, Dictionary, LogDiagnostics, NoCelebration,
};
pub use config::GameConfig;
pub use session::Session;
pub use state::{GameState, Outcome, Rejection};
pub use validation::{AnswerIssue, validate_answer};
