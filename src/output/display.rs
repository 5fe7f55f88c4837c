//! Printing game state to the terminal

use super::formatters::{guess_row, keyboard_lines, letter_tile};
use crate::core::{Answer, Feedback, GuessRecord, LetterFeedback, WORD_SIZE};
use crate::game::{
    AnswerIssue, CelebrationSink, DiagnosticSink, Dictionary, GameState, Outcome, Session,
};
use colored::Colorize;

/// Print every guess so far followed by the empty rows still available
pub fn print_board(state: &GameState) {
    println!();
    for (i, record) in state.history().iter().enumerate() {
        println!("  {} {}", (i + 1).to_string().bright_black(), guess_row(record));
    }
    for i in state.history().len()..state.max_guesses() {
        let empty: String = (0..WORD_SIZE)
            .map(|_| letter_tile('·', None).to_string())
            .collect();
        println!("  {} {}", (i + 1).to_string().bright_black(), empty);
    }
}

/// Print the on-screen keyboard
pub fn print_keyboard(keys: &[Option<LetterFeedback>; 26]) {
    println!();
    for line in keyboard_lines(keys) {
        println!("  {line}");
    }
    println!();
}

/// Print the board, keyboard and, if the game is over, the end message
pub fn print_session<D: Dictionary, C: CelebrationSink>(session: &Session<D, C>) {
    print_board(session.state());
    print_keyboard(&session.keyboard());

    if let Some(message) = session.end_message() {
        let styled = match session.state().outcome() {
            Outcome::Victory => message.green().bold(),
            _ => message.red().bold(),
        };
        println!("  {styled}");
        if session.state().outcome() == Outcome::Defeat {
            println!(
                "  The word was {}",
                session.state().answer().text().bright_yellow().bold()
            );
        }
        println!();
    }
}

/// Print a one-off score of `record`
pub fn print_score(record: &GuessRecord, answer: &str) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Scoring {} against {}",
        record.word().text().bright_white().bold(),
        answer.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());
    println!("\n  {}   {}", guess_row(record), record.feedback().to_emoji());

    let feedback: &Feedback = record.feedback();
    println!(
        "\n  Correct: {}  Almost: {}  Incorrect: {}\n",
        feedback.count(LetterFeedback::Correct).to_string().green(),
        feedback.count(LetterFeedback::Almost).to_string().yellow(),
        feedback.count(LetterFeedback::Incorrect).to_string().bright_black()
    );
}

/// Diagnostic sink printing answer problems to stderr in color
///
/// Used by the line-based front-end in addition to the log output.
#[derive(Debug, Default, Clone, Copy)]
pub struct PrintDiagnostics;

impl DiagnosticSink for PrintDiagnostics {
    fn warn(&mut self, answer: &Answer, issue: &AnswerIssue) {
        log::warn!("Invalid answer '{answer}': {issue}");
        eprintln!("{} {issue}", "warning:".yellow().bold());
    }
}
