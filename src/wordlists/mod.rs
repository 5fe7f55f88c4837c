//! Word lists for the game
//!
//! The answer pool and the guess dictionary are generated from `data/` by the
//! build script and compiled into the binary.

mod dictionary;
pub mod loader;

pub use dictionary::WordList;

include!(concat!(env!("OUT_DIR"), "/answers.rs"));
include!(concat!(env!("OUT_DIR"), "/allowed.rs"));

use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick a random answer from the embedded pool, uppercased
#[must_use]
pub fn random_answer<R: Rng + ?Sized>(rng: &mut R) -> String {
    ANSWERS
        .choose(rng)
        .map_or_else(String::new, |word| word.to_ascii_uppercase())
}

/// Where each new game gets its answer from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// The same configured answer every game
    Fixed(String),
    /// A fresh random pick from the embedded answers
    Random,
}

impl AnswerSource {
    /// Answer for the next game
    #[must_use]
    pub fn next_answer(&self) -> String {
        match self {
            Self::Fixed(answer) => answer.clone(),
            Self::Random => random_answer(&mut rand::rng()),
        }
    }
}
