//! Terminal output formatting
//!
//! Colored boards, keyboards and score summaries for the line-based modes.

pub mod display;
pub mod formatters;

pub use display::{PrintDiagnostics, print_board, print_keyboard, print_score, print_session};
