//! Word list loading utilities
//!
//! Reads a user-supplied dictionary file, one word per line.

use super::WordList;
use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load a dictionary from a file
///
/// Lines are trimmed; blank lines and entries that are not 5-letter words
/// are skipped.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_game::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/allowed.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<WordList> {
    let content = fs::read_to_string(path)?;
    Ok(parse_word_list(&content))
}

/// Parse newline-delimited words into a dictionary
#[must_use]
pub fn parse_word_list(content: &str) -> WordList {
    WordList::new(
        content
            .lines()
            .map(str::trim)
            .filter(|line| Word::new(line).is_ok()),
    )
}
