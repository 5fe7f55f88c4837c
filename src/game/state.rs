//! Turn-based game state
//!
//! `InProgress` moves to `Victory` or `Defeat` and never leaves either. All
//! mutation goes through [`GameState::submit_guess`].

use super::collaborators::{CelebrationSink, DiagnosticSink, Dictionary};
use super::validation::validate_answer;
use crate::core::{Answer, GuessRecord, WORD_SIZE, Word, normalize_guess};
use std::fmt;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    InProgress,
    Victory,
    Defeat,
}

impl Outcome {
    /// Derive the outcome from the guesses made so far
    ///
    /// Victory wins over defeat when the last allowed guess is the answer.
    #[must_use]
    pub fn derive(history: &[GuessRecord], answer: &Answer, max_guesses: usize) -> Self {
        if history.iter().any(|record| answer.matches(record.word())) {
            Self::Victory
        } else if history.len() >= max_guesses {
            Self::Defeat
        } else {
            Self::InProgress
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

/// Why a submission did not change the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The game was already decided
    GameOver(Outcome),
    /// Wrong number of letters after stripping non-letters
    WrongLength { len: usize },
    /// Not in the dictionary
    UnknownWord(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GameOver(_) => write!(f, "The game is already over"),
            Self::WrongLength { len } => {
                write!(f, "Guess must have {WORD_SIZE} letters, got {len}")
            }
            Self::UnknownWord(word) => write!(f, "'{word}' is not in the word list"),
        }
    }
}

impl std::error::Error for Rejection {}

/// History, answer and outcome of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    answer: Answer,
    history: Vec<GuessRecord>,
    max_guesses: usize,
    outcome: Outcome,
}

impl GameState {
    /// Start a game against `answer`
    ///
    /// The answer is checked for length, case and dictionary membership. Each
    /// problem is reported to `diagnostics`, but the game starts anyway.
    /// A game with no guesses allowed starts out lost.
    pub fn new<D, S>(
        answer: impl Into<String>,
        max_guesses: usize,
        dictionary: &D,
        diagnostics: &mut S,
    ) -> Self
    where
        D: Dictionary + ?Sized,
        S: DiagnosticSink + ?Sized,
    {
        let answer = Answer::new(answer);
        for issue in validate_answer(&answer, dictionary) {
            diagnostics.warn(&answer, &issue);
        }

        let outcome = Outcome::derive(&[], &answer, max_guesses);
        Self {
            answer,
            history: Vec::with_capacity(max_guesses),
            max_guesses,
            outcome,
        }
    }

    /// Submit raw player input as a guess
    ///
    /// Checks, in order: the game is still in progress; the input has
    /// exactly [`WORD_SIZE`] letters once uppercased and stripped of
    /// non-letters; the word is in `dictionary`. A rejected guess leaves the
    /// state untouched.
    ///
    /// Over-long input is not truncated here: `"TESTSEXTRA"` is rejected with
    /// [`Rejection::WrongLength`]. Typed input is capped at [`WORD_SIZE`] by
    /// [`GuessBuffer`](super::GuessBuffer), which is what
    /// [`Session`](super::Session) submits.
    ///
    /// On acceptance the scored guess is appended and the outcome recomputed
    /// before `celebration` is notified, which happens only on the move into
    /// victory.
    ///
    /// # Errors
    /// Returns the [`Rejection`] reason. Callers usually ignore it.
    ///
    /// # Examples
    /// ```
    /// use wordle_game::game::{GameState, LogDiagnostics, NoCelebration, Outcome};
    ///
    /// let dictionary = |word: &str| ["STARS", "TESTS"].contains(&word);
    /// let mut game = GameState::new("TESTS", 6, &dictionary, &mut LogDiagnostics);
    ///
    /// assert_eq!(game.submit_guess("stars", &dictionary, &mut NoCelebration), Ok(Outcome::InProgress));
    /// assert_eq!(game.submit_guess("t-e-s-t-s", &dictionary, &mut NoCelebration), Ok(Outcome::Victory));
    /// assert!(game.submit_guess("STARS", &dictionary, &mut NoCelebration).is_err());
    /// assert_eq!(game.history().len(), 2);
    /// ```
    pub fn submit_guess<D, C>(
        &mut self,
        raw: &str,
        dictionary: &D,
        celebration: &mut C,
    ) -> Result<Outcome, Rejection>
    where
        D: Dictionary + ?Sized,
        C: CelebrationSink + ?Sized,
    {
        if self.outcome.is_over() {
            return Err(Rejection::GameOver(self.outcome));
        }

        let normalized = normalize_guess(raw);
        let word = Word::new(&normalized).map_err(|_| Rejection::WrongLength {
            len: normalized.len(),
        })?;

        if !dictionary.is_valid_word(word.text()) {
            return Err(Rejection::UnknownWord(normalized));
        }

        self.history.push(GuessRecord::score(word, &self.answer));
        self.outcome = Outcome::derive(&self.history, &self.answer, self.max_guesses);

        if self.outcome == Outcome::Victory
            && let Some(winning) = self.history.last()
        {
            celebration.celebrate(winning, self.history.len());
        }

        Ok(self.outcome)
    }

    #[inline]
    #[must_use]
    pub const fn answer(&self) -> &Answer {
        &self.answer
    }

    /// Accepted guesses in submission order
    #[inline]
    #[must_use]
    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub const fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub fn guesses_remaining(&self) -> usize {
        self.max_guesses.saturating_sub(self.history.len())
    }

    #[inline]
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.outcome.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Feedback, LetterFeedback, best_feedback_for_letter};
    use crate::game::{AnswerIssue, NoCelebration};

    const WORDS: &[&str] = &[
        "TESTS", "STARS", "WRONG", "GUESS", "HELLO", "WORLD", "HAPPY", "CODER", "PLANT", "PAPER",
    ];

    fn dictionary(word: &str) -> bool {
        WORDS.contains(&word)
    }

    fn quiet(_: &Answer, _: &AnswerIssue) {}

    fn new_game(answer: &str) -> GameState {
        GameState::new(answer, 6, &dictionary, &mut quiet)
    }

    fn submit(game: &mut GameState, raw: &str) -> Result<Outcome, Rejection> {
        game.submit_guess(raw, &dictionary, &mut NoCelebration)
    }

    #[test]
    fn new_game_is_in_progress() {
        let game = new_game("TESTS");
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.history().is_empty());
        assert_eq!(game.guesses_remaining(), 6);
    }

    #[test]
    fn invalid_answer_warns_but_game_starts() {
        let mut issues = Vec::new();
        let mut game = GameState::new("FLY", 6, &dictionary, &mut |_: &Answer, issue: &AnswerIssue| {
            issues.push(issue.clone());
        });

        assert!(!issues.is_empty());
        assert_eq!(submit(&mut game, "STARS"), Ok(Outcome::InProgress));
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn valid_answer_does_not_warn() {
        let mut warned = false;
        let _ = GameState::new("TESTS", 6, &dictionary, &mut |_: &Answer, _: &AnswerIssue| {
            warned = true;
        });
        assert!(!warned);
    }

    #[test]
    fn guessing_the_answer_wins() {
        let mut game = new_game("TESTS");
        assert_eq!(submit(&mut game, "TESTS"), Ok(Outcome::Victory));
        assert!(game.is_over());
        assert!(game.history()[0].feedback().is_perfect());
    }

    #[test]
    fn guesses_are_case_insensitive() {
        let mut game = new_game("TESTS");
        assert_eq!(submit(&mut game, "tests"), Ok(Outcome::Victory));
    }

    #[test]
    fn six_misses_lose() {
        let mut game = new_game("TESTS");
        for _ in 0..5 {
            assert_eq!(submit(&mut game, "STARS"), Ok(Outcome::InProgress));
        }
        assert_eq!(submit(&mut game, "STARS"), Ok(Outcome::Defeat));
        assert_eq!(game.guesses_remaining(), 0);
    }

    #[test]
    fn winning_on_last_guess_is_victory() {
        let mut game = new_game("TESTS");
        for _ in 0..5 {
            submit(&mut game, "STARS").unwrap();
        }
        assert_eq!(submit(&mut game, "TESTS"), Ok(Outcome::Victory));
    }

    #[test]
    fn finished_game_rejects_guesses() {
        let mut game = new_game("TESTS");
        for _ in 0..6 {
            submit(&mut game, "STARS").unwrap();
        }
        let before = game.clone();

        assert_eq!(
            submit(&mut game, "TESTS"),
            Err(Rejection::GameOver(Outcome::Defeat))
        );
        assert_eq!(game, before);
        assert_eq!(game.history().len(), 6);
    }

    #[test]
    fn won_game_rejects_guesses() {
        let mut game = new_game("TESTS");
        submit(&mut game, "TESTS").unwrap();
        assert_eq!(
            submit(&mut game, "STARS"),
            Err(Rejection::GameOver(Outcome::Victory))
        );
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn zero_guess_game_rejects_everything() {
        let mut game = GameState::new("TESTS", 0, &dictionary, &mut quiet);
        assert_eq!(game.outcome(), Outcome::Defeat);

        for guess in ["STARS", "TESTS"] {
            assert_eq!(
                submit(&mut game, guess),
                Err(Rejection::GameOver(Outcome::Defeat))
            );
        }
        assert!(game.history().len() <= game.max_guesses());
    }

    #[test]
    fn history_never_exceeds_limit() {
        for limit in 1..=3 {
            let mut game = GameState::new("TESTS", limit, &dictionary, &mut quiet);
            for _ in 0..limit + 2 {
                let _ = submit(&mut game, "STARS");
            }
            assert_eq!(game.history().len(), limit);
            assert_eq!(game.outcome(), Outcome::Defeat);
        }
    }

    #[test]
    fn wrong_length_is_rejected_without_change() {
        let mut game = new_game("TESTS");
        let before = game.clone();

        assert_eq!(
            submit(&mut game, "TEST"),
            Err(Rejection::WrongLength { len: 4 })
        );
        assert_eq!(
            submit(&mut game, "TESTSEXTRA"),
            Err(Rejection::WrongLength { len: 10 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn non_letters_are_stripped_before_length_check() {
        let mut game = new_game("TESTS");
        assert_eq!(
            submit(&mut game, "H3!RT"),
            Err(Rejection::WrongLength { len: 3 })
        );
        assert_eq!(submit(&mut game, "t.e.s.t.s"), Ok(Outcome::Victory));
    }

    #[test]
    fn unknown_word_is_rejected_without_change() {
        let mut game = new_game("TESTS");
        let before = game.clone();

        assert_eq!(
            submit(&mut game, "QWERT"),
            Err(Rejection::UnknownWord("QWERT".to_string()))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn game_over_is_checked_before_length() {
        let mut game = new_game("TESTS");
        submit(&mut game, "TESTS").unwrap();
        assert_eq!(
            submit(&mut game, "X"),
            Err(Rejection::GameOver(Outcome::Victory))
        );
    }

    #[test]
    fn celebration_fires_once_on_victory() {
        let mut game = new_game("TESTS");
        let mut celebrations = Vec::new();
        let mut sink = |winning: &GuessRecord, turns: usize| {
            celebrations.push((winning.word().text().to_string(), turns));
        };

        game.submit_guess("STARS", &dictionary, &mut sink).unwrap();
        game.submit_guess("TESTS", &dictionary, &mut sink).unwrap();
        let _ = game.submit_guess("TESTS", &dictionary, &mut sink);

        assert_eq!(celebrations, vec![("TESTS".to_string(), 2)]);
    }

    #[test]
    fn celebration_not_fired_on_defeat() {
        let mut game = new_game("TESTS");
        let mut fired = false;
        let mut sink = |_: &GuessRecord, _: usize| fired = true;

        for _ in 0..6 {
            game.submit_guess("STARS", &dictionary, &mut sink).unwrap();
        }

        assert_eq!(game.outcome(), Outcome::Defeat);
        assert!(!fired);
    }

    #[test]
    fn history_records_feedback() {
        let mut game = new_game("PLANT");
        submit(&mut game, "PAPER").unwrap();

        let record = &game.history()[0];
        assert_eq!(record.word().text(), "PAPER");
        assert_eq!(*record.feedback(), "GY---".parse::<Feedback>().unwrap());
    }

    #[test]
    fn winning_letters_are_all_correct_on_keyboard() {
        let mut game = new_game("WORLD");
        submit(&mut game, "WRONG").unwrap();
        submit(&mut game, "WORLD").unwrap();

        for letter in "WORLD".chars() {
            assert_eq!(
                best_feedback_for_letter(letter, game.history()),
                Some(LetterFeedback::Correct)
            );
        }
    }

    #[test]
    fn outcome_derive() {
        let answer = Answer::new("TESTS");
        let miss = GuessRecord::score(Word::new("STARS").unwrap(), &answer);
        let hit = GuessRecord::score(Word::new("TESTS").unwrap(), &answer);

        assert_eq!(Outcome::derive(&[], &answer, 6), Outcome::InProgress);
        assert_eq!(
            Outcome::derive(&[miss.clone(), miss.clone()], &answer, 2),
            Outcome::Defeat
        );
        assert_eq!(Outcome::derive(&[miss, hit], &answer, 2), Outcome::Victory);
    }
}
