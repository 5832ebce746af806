//! Formatting utilities for terminal output

use crate::core::{Evaluation, LetterStatus};
use colored::Colorize;

/// Format an evaluation as an emoji string
///
/// Green for correct, yellow for present, white for absent, one square per
/// letter of the guess.
#[must_use]
pub fn evaluation_to_emoji(evaluation: &Evaluation) -> String {
    evaluation
        .iter()
        .map(|result| match result.status {
            LetterStatus::Correct => '🟩',
            LetterStatus::Present => '🟨',
            LetterStatus::Absent => '⬜',
        })
        .collect()
}

/// Format an evaluation as a row of colored letter tiles
#[must_use]
pub fn evaluation_to_tiles(evaluation: &Evaluation) -> String {
    evaluation
        .iter()
        .map(|result| {
            let letter = result.letter.to_uppercase().to_string();
            let tile = match result.status {
                LetterStatus::Correct => format!(" {letter} ").on_green().bold(),
                LetterStatus::Present => format!(" {letter} ").on_yellow().bold(),
                LetterStatus::Absent => format!(" {letter} ").dimmed(),
            };
            tile.to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Placeholder display for an unguessed word of the given length
#[must_use]
pub fn masked_word(length: usize) -> String {
    vec!["_"; length].join(" ")
}
