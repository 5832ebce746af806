//! Lexiguess
//!
//! A Wordle-style word-guessing game whose vocabulary comes from
//! lexicographical knowledge-base entries. The core is a small synchronous
//! state machine: a round controller that picks a target lexeme, scores
//! guesses with the classic two-pass duplicate-aware algorithm, and doles
//! out metadata hints at most once per kind.
//!
//! # Quick Start
//!
//! ```rust
//! use lexiguess::core::Lexeme;
//! use lexiguess::game::{RoundController, RoundPhase};
//!
//! let candidates = vec![Lexeme::new("crane").unwrap()];
//!
//! let mut controller = RoundController::new();
//! let info = controller.start_round(&candidates, 6).unwrap();
//! assert_eq!(info.word_length, Some(5));
//!
//! let outcome = controller.submit_guess("crane").unwrap();
//! assert!(outcome.terminal.is_some_and(|end| end.won));
//! assert_eq!(controller.phase(), RoundPhase::Won);
//! ```

// Core domain types
pub mod core;

// Round state machine, hints and difficulty
pub mod game;

// Word source
pub mod lexicon;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
