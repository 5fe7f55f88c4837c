//! Interactive TUI interface
//!
//! A full-screen board with an on-screen keyboard, running statistics and a
//! confetti burst on every win.

mod app;
mod confetti;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use confetti::{BurstOptions, Confetti, Origin, PARTICLE_COUNT};
