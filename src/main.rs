//! Lexiguess - CLI
//!
//! Wordle-style guessing game over a lexeme lexicon, with interactive play,
//! one-off guess scoring and lexicon inspection.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lexiguess::{
    commands::{run_play, score_guess},
    core::Lexeme,
    game::{DEFAULT_MAX_ATTEMPTS, Difficulty},
    lexicon::{self, FetchOptions},
    output::display,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lexiguess",
    about = "Wordle-style word guessing game backed by lexicographical data",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to a JSON lexeme file (default: embedded lexicon)
    #[arg(short = 'w', long, global = true)]
    lexicon: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactive rounds (default)
    Play {
        /// Difficulty: easy, medium (default), hard
        #[arg(short, long, default_value = "medium")]
        difficulty: String,

        /// Attempts per word
        #[arg(short = 'a', long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
        max_attempts: usize,

        /// Shortest lemma to draw
        #[arg(long, default_value_t = lexicon::MIN_WORD_LENGTH)]
        min_length: usize,

        /// Longest lemma to draw
        #[arg(long, default_value_t = lexicon::MAX_WORD_LENGTH)]
        max_length: usize,

        /// Candidate pool size per round
        #[arg(short, long, default_value_t = lexicon::DEFAULT_LIMIT)]
        limit: usize,
    },

    /// Score one guess against a known target word
    Score {
        /// The guessed word
        guess: String,

        /// The target word
        target: String,
    },

    /// List the lexemes in the lexicon
    Words,
}

/// Load the lexicon from the -w flag, falling back to the embedded one
fn load_lexicon(path: Option<&PathBuf>) -> Result<Vec<Lexeme>> {
    let lexemes = match path {
        Some(path) => lexicon::load_from_file(path)?,
        None => lexicon::builtin()?,
    };
    Ok(lexemes)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let lexemes = load_lexicon(cli.lexicon.as_ref())?;

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play {
        difficulty: "medium".to_string(),
        max_attempts: DEFAULT_MAX_ATTEMPTS,
        min_length: lexicon::MIN_WORD_LENGTH,
        max_length: lexicon::MAX_WORD_LENGTH,
        limit: lexicon::DEFAULT_LIMIT,
    });

    match command {
        Commands::Play {
            difficulty,
            max_attempts,
            min_length,
            max_length,
            limit,
        } => {
            let difficulty = Difficulty::from_name(&difficulty);
            let options = FetchOptions {
                limit,
                min_length,
                max_length,
            };
            let candidates = options.apply(lexemes);
            run_play(&candidates, difficulty, max_attempts)
        }
        Commands::Score { guess, target } => {
            let result = score_guess(&guess, &target)?;
            display::print_score_result(&result);
            Ok(())
        }
        Commands::Words => {
            display::print_lexicon(&lexemes);
            Ok(())
        }
    }
}
