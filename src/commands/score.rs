//! One-off guess scoring
//!
//! Scores a single guess against a known target without running a round.
//! Useful for checking feedback by hand and for scripting.

use crate::core::{Evaluation, LemmaError, Lexeme, evaluate};
use serde::Serialize;
use thiserror::Error;

/// Error scoring a standalone guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("invalid {which} word: {source}")]
    InvalidWord {
        which: &'static str,
        #[source]
        source: LemmaError,
    },
    #[error("guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Scored feedback for a standalone guess
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    pub guess: String,
    pub target: String,
    pub evaluation: Evaluation,
    pub exact: bool,
}

/// Score `guess` against `target`
///
/// Both words are validated and lowercased the same way the round
/// controller treats guesses.
///
/// # Errors
/// Returns `ScoreError` if either word is not a valid lemma or the lengths
/// differ.
pub fn score_guess(guess: &str, target: &str) -> Result<ScoreResult, ScoreError> {
    let target = Lexeme::new(target).map_err(|source| ScoreError::InvalidWord {
        which: "target",
        source,
    })?;
    let guess = Lexeme::new(guess).map_err(|source| ScoreError::InvalidWord {
        which: "guess",
        source,
    })?;

    if guess.len() != target.len() {
        return Err(ScoreError::LengthMismatch {
            expected: target.len(),
            actual: guess.len(),
        });
    }

    let evaluation = evaluate(guess.chars(), target.chars());
    let exact = evaluation.is_all_correct();

    Ok(ScoreResult {
        guess: guess.lemma().to_string(),
        target: target.lemma().to_string(),
        evaluation,
        exact,
    })
}
