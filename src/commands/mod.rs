//! Command implementations

pub mod score;
pub mod simple;

pub use score::score_word;
pub use simple::{BannerCelebration, SimpleStats, run_simple};
