//! Game configuration

use crate::core::{DEFEAT_MESSAGE, MAX_GUESSES, VICTORY_MESSAGE};

/// Settings shared by every game of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub max_guesses: usize,
    pub victory_message: String,
    pub defeat_message: String,
}

impl GameConfig {
    #[must_use]
    pub fn with_max_guesses(max_guesses: usize) -> Self {
        Self {
            max_guesses,
            ..Self::default()
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: MAX_GUESSES,
            victory_message: VICTORY_MESSAGE.to_string(),
            defeat_message: DEFEAT_MESSAGE.to_string(),
        }
    }
}
