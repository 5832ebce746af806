//! Interactive play mode
//!
//! Text-based round loop: the player guesses the hidden lemma, asks for
//! hints within the active difficulty tier, and starts fresh rounds. This
//! is presentation glue only; all game rules live in
//! [`crate::game::RoundController`].

use crate::core::Lexeme;
use crate::game::{Difficulty, GuessError, HintKind, RoundController};
use crate::output::display;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

/// Points awarded for solving a word
const POINTS_PER_WORD: u32 = 100;

/// Bonus per unused attempt on a win
const POINTS_PER_SPARE_ATTEMPT: u32 = 10;

/// Session-wide statistics across rounds
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct SessionStats {
    pub played: u32,
    pub won: u32,
    pub score: u32,
}

impl SessionStats {
    /// Record a won round, with a bonus per attempt left unused
    pub fn record_win(&mut self, attempts_remaining: usize) {
        self.played += 1;
        self.won += 1;
        let spare = u32::try_from(attempts_remaining).unwrap_or(0);
        self.score += POINTS_PER_WORD + POINTS_PER_SPARE_ATTEMPT * spare;
    }

    /// Record a lost round
    pub fn record_loss(&mut self) {
        self.played += 1;
    }

    /// Percentage of rounds won, 0 when none played
    #[must_use]
    pub fn win_rate(&self) -> u32 {
        if self.played == 0 {
            0
        } else {
            self.won * 100 / self.played
        }
    }
}

/// Run the interactive play loop until the player quits
///
/// # Errors
/// Returns an error on stdin/stdout failure or when no usable candidates
/// are available for a round.
pub fn run_play(
    candidates: &[Lexeme],
    difficulty: Difficulty,
    max_attempts: usize,
) -> Result<()> {
    let mut controller = RoundController::new();
    let mut stats = SessionStats::default();

    display::print_play_banner(difficulty, max_attempts);

    controller
        .start_round(candidates, max_attempts)
        .context("could not start a round")?;
    display::print_round_start(&controller.info(), difficulty);

    loop {
        let input = get_user_input("Guess (or 'hint', 'new', 'quit')")?;
        let input = input.trim().to_lowercase();

        match input.as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                display::print_session_stats(&stats);
                return Ok(());
            }
            "new" | "n" => {
                controller
                    .start_round(candidates, max_attempts)
                    .context("could not start a round")?;
                display::print_round_start(&controller.info(), difficulty);
            }
            "hint" | "hints" => {
                display::print_hint_menu(difficulty, controller.hint_ledger());
            }
            _ => {
                if let Some(name) = input.strip_prefix("hint ") {
                    handle_hint(&mut controller, difficulty, name.trim());
                } else {
                    handle_guess(&mut controller, &mut stats, &input);
                }
            }
        }
    }
}

/// Resolve one hint request against the controller
fn handle_hint(controller: &mut RoundController, difficulty: Difficulty, name: &str) {
    let Some(kind) = HintKind::from_name(name) else {
        println!("Unknown hint '{name}'. Type 'hint' to list what's available.\n");
        return;
    };

    if !difficulty.allows(kind) {
        println!(
            "The {} hint is not offered on {difficulty} difficulty.\n",
            kind.label()
        );
        return;
    }

    // Checked before requesting so "already used" and "no data" read
    // differently, even though both come back as no payload
    if controller.hint_ledger().is_revealed(kind) {
        println!("You already used the {} hint this round.\n", kind.label());
        return;
    }

    match controller.request_hint(kind) {
        Ok(Some(payload)) => display::print_hint_payload(&payload),
        Ok(None) => println!("No {} data for this word.\n", kind.label()),
        Err(_) => println!("No round in progress. Type 'new' to start one.\n"),
    }
}

/// Submit one guess and update the session stats on a decided round
fn handle_guess(controller: &mut RoundController, stats: &mut SessionStats, text: &str) {
    match controller.submit_guess(text) {
        Ok(outcome) => {
            display::print_guess_feedback(&outcome);

            if let Some(end) = &outcome.terminal {
                if end.won {
                    stats.record_win(outcome.attempts_remaining);
                } else {
                    stats.record_loss();
                }
                display::print_round_end(end, stats);
            }
        }
        Err(GuessError::LengthMismatch { expected, actual }) => {
            println!("The word has {expected} letters, your guess had {actual}.");
            println!("No attempt consumed. Try again.\n");
        }
        Err(GuessError::NotPlaying) => {
            println!("The round is over. Type 'new' to play again.\n");
        }
    }
}

/// Prompt on stdout and read one line from stdin
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("failed to read from stdin")?;
    Ok(input)
}
