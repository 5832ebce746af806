//! Core domain types for the guessing game
//!
//! Pure, deterministic building blocks with no game state: lexeme entries
//! and the guess evaluator. Everything stateful lives in [`crate::game`].

mod evaluation;
mod lexeme;

pub use evaluation::{Evaluation, LetterResult, LetterStatus, evaluate};
pub use lexeme::{Lexeme, LemmaError};
