//! Lexicon: the word source that supplies candidate lexemes
//!
//! Plays the role of the external knowledge-base query service: the game
//! core only ever sees the resulting candidate slice. Provides an embedded
//! lexicon, a JSON file loader and the fetch-style filtering options the
//! query service would otherwise apply server-side.

mod loader;

pub use loader::{LexiconError, builtin, load_from_file};

use crate::core::Lexeme;

/// Default number of candidates handed to a round
pub const DEFAULT_LIMIT: usize = 50;

/// Shortest guessable lemma
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest guessable lemma
pub const MAX_WORD_LENGTH: usize = 12;

/// Candidate filtering options, mirroring a query service's fetch parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOptions {
    pub limit: usize,
    pub min_length: usize,
    pub max_length: usize,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            min_length: MIN_WORD_LENGTH,
            max_length: MAX_WORD_LENGTH,
        }
    }
}

impl FetchOptions {
    /// Apply length bounds and the limit to a pool of lexemes
    #[must_use]
    pub fn apply(&self, lexemes: Vec<Lexeme>) -> Vec<Lexeme> {
        lexemes
            .into_iter()
            .filter(|l| l.len() >= self.min_length && l.len() <= self.max_length)
            .take(self.limit)
            .collect()
    }
}
