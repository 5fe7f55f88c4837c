//! Wordle - CLI
//!
//! Play Wordle in a full-screen TUI or a plain line-based mode, or score a
//! single guess.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use wordle_game::{
    commands::{BannerCelebration, run_simple, score_word},
    game::GameConfig,
    output::{PrintDiagnostics, print_score},
    wordlists::{AnswerSource, WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Wordle in your terminal",
    after_help = "The embedded dictionary holds a few hundred common words. \
                  Pass --wordlist <FILE> (one word per line) to accept more guesses.",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Play against this answer instead of a random one
    #[arg(short, long, global = true)]
    answer: Option<String>,

    /// Dictionary file with one word per line, for a larger vocabulary than
    /// the embedded list
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<String>,

    /// Guesses allowed per game (at least 1)
    #[arg(short, long, global = true, default_value = "6", value_parser = parse_max_guesses)]
    max_guesses: usize,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Score a guess against an answer
    Score {
        /// The guessed word
        guess: String,

        /// The answer to score against
        #[arg(value_name = "ANSWER")]
        target: String,
    },
}

fn parse_max_guesses(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(0) => Err("a game needs at least one guess".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Load the dictionary from `-w <path>`, or the embedded list
fn load_dictionary(path: Option<&str>) -> Result<WordList> {
    match path {
        Some(path) => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            log::info!("Loaded {} words from {path}", words.len());
            Ok(words)
        }
        None => Ok(WordList::embedded()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if let Commands::Score { guess, target } = &command {
        return run_score_command(guess, target);
    }

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let answers = cli.answer.map_or(AnswerSource::Random, AnswerSource::Fixed);
    let config = GameConfig::with_max_guesses(cli.max_guesses);

    match command {
        Commands::Simple => run_simple_command(config, dictionary, &answers),
        _ => run_play_command(config, dictionary, answers),
    }
}

fn run_score_command(guess: &str, answer: &str) -> Result<()> {
    let record = score_word(guess, answer)?;
    print_score(&record, answer);
    Ok(())
}

fn run_simple_command(
    config: GameConfig,
    dictionary: WordList,
    answers: &AnswerSource,
) -> Result<()> {
    let stats = run_simple(
        config,
        dictionary,
        BannerCelebration,
        || answers.next_answer(),
        &mut PrintDiagnostics,
        io::stdin().lock(),
    )?;
    log::info!("Played {} games, won {}", stats.games, stats.wins);
    Ok(())
}

fn run_play_command(config: GameConfig, dictionary: WordList, answers: AnswerSource) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(config, dictionary, answers);
    run_tui(app)
}
