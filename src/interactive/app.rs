//! TUI application state and logic

use super::confetti::Confetti;
use crate::DICTIONARY_HINT;
use crate::core::Answer;
use crate::game::{
    AnswerIssue, DiagnosticSink, GameConfig, LogDiagnostics, Outcome, Rejection, Session,
};
use crate::wordlists::{AnswerSource, WordList};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Redraw interval while confetti is flying
const TICK_RATE: Duration = Duration::from_millis(40);

/// Application state
pub struct App {
    pub session: Session<WordList, Confetti>,
    pub answers: AnswerSource,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by number of guesses; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }

    fn record(&mut self, outcome: Outcome, guesses: usize) {
        self.total_games += 1;
        if outcome == Outcome::Victory {
            self.games_won += 1;
            if self.guess_distribution.len() <= guesses {
                self.guess_distribution.resize(guesses + 1, 0);
            }
            self.guess_distribution[guesses] += 1;
        }
    }
}

/// Forwards answer warnings to the log and collects them for the message panel
#[derive(Default)]
struct CollectDiagnostics {
    warnings: Vec<String>,
}

impl DiagnosticSink for CollectDiagnostics {
    fn warn(&mut self, answer: &Answer, issue: &AnswerIssue) {
        LogDiagnostics.warn(answer, issue);
        self.warnings.push(issue.to_string());
    }
}

impl App {
    #[must_use]
    pub fn new(config: GameConfig, dictionary: WordList, answers: AnswerSource) -> Self {
        let mut diagnostics = CollectDiagnostics::default();
        let session = Session::new(
            config,
            answers.next_answer(),
            dictionary,
            Confetti::default(),
            &mut diagnostics,
        );

        let mut app = Self {
            session,
            answers,
            messages: Vec::new(),
            stats: Statistics::default(),
            should_quit: false,
        };
        app.add_message(
            &format!(
                "Guess the word in {} tries. Type letters, Enter to submit.",
                app.session.config().max_guesses
            ),
            MessageStyle::Info,
        );
        app.add_message(DICTIONARY_HINT, MessageStyle::Info);
        app.report_warnings(diagnostics);
        app
    }

    /// Handle one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            _ if self.session.state().is_over() => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            KeyCode::Char(c) => {
                self.session.type_char(c);
            }
            KeyCode::Backspace => {
                self.session.backspace();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    pub fn submit(&mut self) {
        match self.session.submit() {
            Ok(Outcome::InProgress) => {}
            Ok(outcome) => {
                self.stats
                    .record(outcome, self.session.state().history().len());
                let style = if outcome == Outcome::Victory {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                let message = self.session.end_message().unwrap_or_default().to_string();
                self.add_message(&message, style);
                if outcome == Outcome::Defeat {
                    let reveal = format!("The word was {}", self.session.state().answer());
                    self.add_message(&reveal, MessageStyle::Info);
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(Rejection::WrongLength { .. }) => {
                self.add_message("Not enough letters", MessageStyle::Error);
            }
            Err(rejection @ Rejection::UnknownWord(_)) => {
                self.add_message(&rejection.to_string(), MessageStyle::Error);
            }
            Err(Rejection::GameOver(_)) => {}
        }
    }

    pub fn new_game(&mut self) {
        let mut diagnostics = CollectDiagnostics::default();
        self.session
            .restart(self.answers.next_answer(), &mut diagnostics);
        self.session.celebration_mut().clear();
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
        self.report_warnings(diagnostics);
    }

    pub fn on_tick(&mut self) {
        self.session.celebration_mut().tick();
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    fn report_warnings(&mut self, diagnostics: CollectDiagnostics) {
        for warning in diagnostics.warnings {
            self.add_message(&format!("Warning: {warning}"), MessageStyle::Error);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
        {
            app.handle_key(key);
        }
        app.on_tick();

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(
            GameConfig::default(),
            WordList::new(["TESTS", "STARS", "CRANE"]),
            AnswerSource::Fixed("TESTS".to_string()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn typing_and_submitting() {
        let mut app = app();
        type_word(&mut app, "stars");
        assert_eq!(app.session.state().history().len(), 1);
        assert!(app.session.buffer().is_empty());
    }

    #[test]
    fn backspace_edits_buffer() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('b'));
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.session.buffer().as_str(), "A");
    }

    #[test]
    fn rejected_word_shows_message_and_keeps_buffer() {
        let mut app = app();
        type_word(&mut app, "qwert");
        assert_eq!(app.session.buffer().as_str(), "QWERT");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
    }

    #[test]
    fn victory_fires_confetti_and_records_stats() {
        let mut app = app();
        type_word(&mut app, "stars");
        type_word(&mut app, "tests");

        assert_eq!(app.session.state().outcome(), Outcome::Victory);
        assert!(app.session.celebration().is_active());
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 1);
        assert_eq!(app.stats.guess_distribution[2], 1);
    }

    #[test]
    fn defeat_records_loss() {
        let mut app = app();
        for _ in 0..6 {
            type_word(&mut app, "stars");
        }
        assert_eq!(app.session.state().outcome(), Outcome::Defeat);
        assert!(!app.session.celebration().is_active());
        assert_eq!(app.stats.total_games, 1);
        assert!(app.stats.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn new_game_after_finish() {
        let mut app = app();
        type_word(&mut app, "tests");
        press(&mut app, KeyCode::Char('n'));

        assert_eq!(app.session.state().outcome(), Outcome::InProgress);
        assert!(app.session.state().history().is_empty());
        assert!(!app.session.celebration().is_active());
    }

    #[test]
    fn n_and_q_are_letters_while_playing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'));
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.session.buffer().as_str(), "NQ");
        assert!(!app.should_quit);
    }

    #[test]
    fn quit_keys() {
        let mut escaped = app();
        press(&mut escaped, KeyCode::Esc);
        assert!(escaped.should_quit);

        let mut interrupted = app();
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_quit);
    }

    #[test]
    fn invalid_answer_is_reported_in_messages() {
        let app = App::new(
            GameConfig::default(),
            WordList::new(["TESTS"]),
            AnswerSource::Fixed("FLY".to_string()),
        );
        assert!(app.messages.iter().any(|m| m.text.starts_with("Warning:")));
    }

    #[test]
    fn start_messages_mention_wordlist_flag() {
        let app = app();
        assert!(app.messages.iter().any(|m| m.text == DICTIONARY_HINT));
        assert!(DICTIONARY_HINT.contains("--wordlist"));
    }

    #[test]
    fn tick_advances_confetti() {
        let mut app = app();
        type_word(&mut app, "tests");
        for _ in 0..500 {
            app.on_tick();
        }
        assert!(!app.session.celebration().is_active());
    }
}
