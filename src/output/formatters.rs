//! Formatting utilities for terminal output

use crate::core::{GuessRecord, LetterFeedback};
use colored::{ColoredString, Colorize};

/// Keyboard rows in QWERTY order
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// A letter tile colored by its feedback; `None` is an unused key
#[must_use]
pub fn letter_tile(letter: char, feedback: Option<LetterFeedback>) -> ColoredString {
    let tile = format!(" {letter} ");
    match feedback {
        Some(LetterFeedback::Correct) => tile.black().on_green().bold(),
        Some(LetterFeedback::Almost) => tile.black().on_yellow().bold(),
        Some(LetterFeedback::Incorrect) => tile.white().on_bright_black(),
        None => tile.normal(),
    }
}

/// A guess rendered as a row of colored tiles
#[must_use]
pub fn guess_row(record: &GuessRecord) -> String {
    record
        .letters()
        .map(|(letter, feedback)| letter_tile(char::from(letter), Some(feedback)).to_string())
        .collect()
}

/// Feedback for the key `letter` from a `keyboard_feedback` table
#[must_use]
pub fn key_feedback(keys: &[Option<LetterFeedback>; 26], letter: char) -> Option<LetterFeedback> {
    let index = (letter.to_ascii_uppercase() as usize).checked_sub('A' as usize)?;
    keys.get(index).copied().flatten()
}

/// One line per keyboard row, each key colored by its best feedback
#[must_use]
pub fn keyboard_lines(keys: &[Option<LetterFeedback>; 26]) -> Vec<String> {
    KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(row, letters)| {
            let indent = " ".repeat(row * 2);
            let tiles: String = letters
                .chars()
                .map(|letter| letter_tile(letter, key_feedback(keys, letter)).to_string())
                .collect();
            format!("{indent}{tiles}")
        })
        .collect()
}
