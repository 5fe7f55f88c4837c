//! Simple interactive CLI mode
//!
//! Line-based game without the TUI: each line read is one guess.

use crate::DICTIONARY_HINT;
use crate::core::GuessRecord;
use crate::game::{CelebrationSink, DiagnosticSink, Dictionary, GameConfig, Outcome, Session};
use crate::output::formatters::guess_row;
use crate::output::print_session;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Games played during one run of the simple mode
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SimpleStats {
    pub games: usize,
    pub wins: usize,
}

/// Celebration sink printing a victory banner
#[derive(Debug, Default, Clone, Copy)]
pub struct BannerCelebration;

impl CelebrationSink for BannerCelebration {
    fn celebrate(&mut self, winning: &GuessRecord, turns: usize) {
        println!("\n{}", "═".repeat(50).bright_cyan());
        println!(
            "{}",
            "   🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉"
                .bright_green()
                .bold()
        );
        println!("{}", "═".repeat(50).bright_cyan());

        let performance = match turns {
            1 => "🏆 Perfect! Incredible hole-in-one!",
            2 => "⭐ Excellent! Outstanding performance!",
            3 => "💫 Great! Very well played!",
            4 => "✨ Good! Nice work!",
            5 => "👍 Solved! Got it!",
            _ => "😅 Phew! Just made it!",
        };
        println!("\n  {}", performance.bright_yellow().bold());
        println!(
            "  {} in {} {}",
            guess_row(winning),
            turns.to_string().bright_cyan().bold(),
            if turns == 1 { "guess" } else { "guesses" }
        );
    }
}

/// Run the line-based game
///
/// `next_answer` supplies the answer for the first game and for every game
/// started with `new`. Input ends at EOF or on `quit`.
///
/// # Errors
///
/// Returns an error if reading input or flushing stdout fails.
pub fn run_simple<D, C, R, F, S>(
    config: GameConfig,
    dictionary: D,
    celebration: C,
    mut next_answer: F,
    diagnostics: &mut S,
    mut reader: R,
) -> Result<SimpleStats>
where
    D: Dictionary,
    C: CelebrationSink,
    R: BufRead,
    F: FnMut() -> String,
    S: DiagnosticSink + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════╗");
    println!("║              Wordle - Simple Mode            ║");
    println!("╚══════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        crate::core::WORD_SIZE,
        config.max_guesses
    );
    println!("Commands: 'quit' to exit, 'new' for a new game");
    println!("{}\n", DICTIONARY_HINT.bright_black());

    let mut session = Session::new(config, next_answer(), dictionary, celebration, diagnostics);
    let mut stats = SimpleStats {
        games: 1,
        wins: 0,
    };

    loop {
        print!("{} ", "guess>".bright_cyan());
        io::stdout().flush()?;

        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        match line.trim().to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                break;
            }
            "new" | "n" => {
                session.restart(next_answer(), diagnostics);
                stats.games += 1;
                println!("\n🔄 New game started!\n");
                continue;
            }
            _ => {}
        }

        if session.state().is_over() {
            println!("Game over. Type 'new' to play again or 'quit' to exit.");
            continue;
        }

        session.set_input(&line);
        match session.submit() {
            Ok(outcome) => {
                print_session(&session);
                if outcome == Outcome::Victory {
                    stats.wins += 1;
                }
                if outcome.is_over() {
                    println!("Type 'new' to play again or 'quit' to exit.");
                }
            }
            Err(rejection) => println!("{}", rejection.to_string().red()),
        }
    }

    Ok(stats)
}
