//! A single player's game: state, typed input and collaborators
//!
//! Front-ends drive a `Session` with keystrokes or whole lines and read
//! everything they render back from it.

use super::buffer::GuessBuffer;
use super::collaborators::{CelebrationSink, DiagnosticSink, Dictionary};
use super::config::GameConfig;
use super::state::{GameState, Outcome, Rejection};
use crate::core::{LetterFeedback, keyboard_feedback};

/// Game state plus the input being typed
pub struct Session<D: Dictionary, C: CelebrationSink> {
    config: GameConfig,
    state: GameState,
    buffer: GuessBuffer,
    dictionary: D,
    celebration: C,
}

impl<D: Dictionary, C: CelebrationSink> Session<D, C> {
    /// Start a session against `answer`
    ///
    /// Answer problems are reported to `diagnostics` only.
    pub fn new<S: DiagnosticSink + ?Sized>(
        config: GameConfig,
        answer: impl Into<String>,
        dictionary: D,
        celebration: C,
        diagnostics: &mut S,
    ) -> Self {
        let state = GameState::new(answer, config.max_guesses, &dictionary, diagnostics);
        Self {
            config,
            state,
            buffer: GuessBuffer::new(),
            dictionary,
            celebration,
        }
    }

    /// Start a fresh game against a new answer, keeping the collaborators
    pub fn restart<S: DiagnosticSink + ?Sized>(
        &mut self,
        answer: impl Into<String>,
        diagnostics: &mut S,
    ) {
        self.state = GameState::new(
            answer,
            self.config.max_guesses,
            &self.dictionary,
            diagnostics,
        );
        self.buffer.clear();
    }

    /// Type one character into the buffer
    ///
    /// Ignored once the game is over.
    pub fn type_char(&mut self, c: char) -> bool {
        !self.state.is_over() && self.buffer.push(c)
    }

    pub fn backspace(&mut self) -> Option<char> {
        self.buffer.pop()
    }

    /// Replace the buffer with `raw`, filtered and truncated as if typed
    pub fn set_input(&mut self, raw: &str) {
        self.buffer.set(raw);
    }

    /// Submit the buffer as a guess
    ///
    /// The buffer is cleared only when the guess is accepted, so a rejected
    /// word can be corrected.
    ///
    /// # Errors
    /// Returns the [`Rejection`] reason; nothing changes in that case.
    pub fn submit(&mut self) -> Result<Outcome, Rejection> {
        let result =
            self.state
                .submit_guess(self.buffer.as_str(), &self.dictionary, &mut self.celebration);

        match &result {
            Ok(outcome) => {
                log::debug!("Accepted guess {} -> {outcome:?}", self.buffer.as_str());
                self.buffer.clear();
                if outcome.is_over() {
                    log::info!(
                        "Game over: {outcome:?} after {} guesses (answer {})",
                        self.state.history().len(),
                        self.state.answer()
                    );
                }
            }
            Err(rejection) => log::debug!("Rejected guess {}: {rejection}", self.buffer.as_str()),
        }

        result
    }

    /// Best feedback per key `A..=Z`
    #[must_use]
    pub fn keyboard(&self) -> [Option<LetterFeedback>; 26] {
        keyboard_feedback(self.state.history())
    }

    /// Victory or defeat message, once the game is decided
    #[must_use]
    pub fn end_message(&self) -> Option<&str> {
        match self.state.outcome() {
            Outcome::InProgress => None,
            Outcome::Victory => Some(&self.config.victory_message),
            Outcome::Defeat => Some(&self.config.defeat_message),
        }
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &GuessBuffer {
        &self.buffer
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn celebration(&self) -> &C {
        &self.celebration
    }

    #[inline]
    pub const fn celebration_mut(&mut self) -> &mut C {
        &mut self.celebration
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Answer, GuessRecord, VICTORY_MESSAGE};
    use crate::game::{AnswerIssue, NoCelebration};

    fn dictionary(word: &str) -> bool {
        ["TESTS", "STARS", "CRANE"].contains(&word)
    }

    fn quiet(_: &Answer, _: &AnswerIssue) {}

    fn session() -> Session<fn(&str) -> bool, NoCelebration> {
        Session::new(
            GameConfig::default(),
            "TESTS",
            dictionary as fn(&str) -> bool,
            NoCelebration,
            &mut quiet,
        )
    }

    #[test]
    fn typing_fills_buffer() {
        let mut session = session();
        for c in "st4rs!".chars() {
            session.type_char(c);
        }
        assert_eq!(session.buffer().as_str(), "STRS");
        assert_eq!(session.backspace(), Some('S'));
    }

    #[test]
    fn accepted_guess_clears_buffer() {
        let mut session = session();
        session.set_input("stars");
        assert_eq!(session.submit(), Ok(Outcome::InProgress));
        assert!(session.buffer().is_empty());
        assert_eq!(session.state().history().len(), 1);
    }

    #[test]
    fn rejected_guess_keeps_buffer_and_state() {
        let mut session = session();
        session.set_input("QWERT");
        let state_before = session.state().clone();

        assert!(session.submit().is_err());
        assert_eq!(session.buffer().as_str(), "QWERT");
        assert_eq!(session.state(), &state_before);

        session.set_input("TES");
        assert!(session.submit().is_err());
        assert_eq!(session.buffer().as_str(), "TES");
    }

    #[test]
    fn over_long_input_is_truncated_before_submit() {
        let mut session = session();
        session.set_input("TESTSEXTRA");
        assert_eq!(session.submit(), Ok(Outcome::Victory));
        assert_eq!(session.end_message(), Some(VICTORY_MESSAGE));
    }

    #[test]
    fn typing_ignored_after_game_over() {
        let mut session = session();
        session.set_input("TESTS");
        session.submit().unwrap();
        assert!(!session.type_char('A'));
        assert!(session.buffer().is_empty());
    }

    #[test]
    fn end_message_on_defeat() {
        let mut session = session();
        assert_eq!(session.end_message(), None);
        for _ in 0..6 {
            session.set_input("STARS");
            session.submit().unwrap();
        }
        assert_eq!(
            session.end_message(),
            Some(GameConfig::default().defeat_message.as_str())
        );
    }

    #[test]
    fn keyboard_reflects_history() {
        let mut session = session();
        session.set_input("STARS");
        session.submit().unwrap();

        let keys = session.keyboard();
        assert_eq!(keys[usize::from(b'S' - b'A')], Some(LetterFeedback::Correct));
        assert_eq!(keys[usize::from(b'T' - b'A')], Some(LetterFeedback::Almost));
        assert_eq!(keys[usize::from(b'A' - b'A')], Some(LetterFeedback::Incorrect));
    }

    #[test]
    fn celebration_sink_owned_by_session() {
        let mut wins = 0;
        {
            let mut session = Session::new(
                GameConfig::default(),
                "TESTS",
                dictionary,
                |_: &GuessRecord, _: usize| wins += 1,
                &mut quiet,
            );
            session.set_input("TESTS");
            session.submit().unwrap();
            session.set_input("TESTS");
            assert!(session.submit().is_err());
        }
        assert_eq!(wins, 1);
    }

    #[test]
    fn restart_resets_state_and_buffer() {
        let mut session = session();
        session.set_input("STARS");
        session.submit().unwrap();
        session.set_input("CRA");

        session.restart("CRANE", &mut quiet);

        assert!(session.state().history().is_empty());
        assert!(session.buffer().is_empty());
        assert_eq!(session.state().answer().text(), "CRANE");
    }
}
