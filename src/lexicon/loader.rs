//! Lexicon loading
//!
//! Reads candidate lexemes from JSON, either the lexicon embedded in the
//! binary or a user-supplied file. Records with invalid lemmas are skipped,
//! so a partially bad lexicon still yields its usable entries.

use crate::core::Lexeme;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Lexicon shipped with the binary
const EMBEDDED: &str = include_str!("../../data/lexemes.json");

/// Error loading a lexicon
#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse lexicon JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Raw JSON shape of one lexicon entry
#[derive(Debug, Deserialize)]
struct LexemeRecord {
    lemma: String,
    #[serde(default)]
    grammatical_features: Option<String>,
    #[serde(default)]
    definition: Option<String>,
    #[serde(default)]
    translations: Option<String>,
    #[serde(default)]
    pronunciation: Option<String>,
    #[serde(default)]
    image: Option<String>,
}

impl LexemeRecord {
    /// Validate the record into a lexeme, `None` if the lemma is unusable
    fn into_lexeme(self) -> Option<Lexeme> {
        let mut lexeme = Lexeme::new(self.lemma).ok()?;
        if let Some(features) = self.grammatical_features {
            lexeme = lexeme.with_grammatical_features(features);
        }
        if let Some(definition) = self.definition {
            lexeme = lexeme.with_definition(definition);
        }
        if let Some(translations) = self.translations {
            lexeme = lexeme.with_translations(translations);
        }
        if let Some(pronunciation) = self.pronunciation {
            lexeme = lexeme.with_pronunciation(pronunciation);
        }
        if let Some(image) = self.image {
            lexeme = lexeme.with_image(image);
        }
        Some(lexeme)
    }
}

/// Load the lexicon embedded in the binary
///
/// # Errors
/// Returns `LexiconError::Parse` if the embedded JSON is malformed.
pub fn builtin() -> Result<Vec<Lexeme>, LexiconError> {
    parse(EMBEDDED)
}

/// Load a lexicon from a JSON file
///
/// # Errors
/// Returns an error if the file cannot be read or its JSON is malformed.
///
/// # Examples
/// ```no_run
/// use lexiguess::lexicon::load_from_file;
///
/// let lexemes = load_from_file("data/lexemes.json").unwrap();
/// println!("Loaded {} lexemes", lexemes.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<Lexeme>, LexiconError> {
    let content = fs::read_to_string(path)?;
    parse(&content)
}

/// Parse lexicon JSON, skipping records with invalid lemmas
fn parse(content: &str) -> Result<Vec<Lexeme>, LexiconError> {
    let records: Vec<LexemeRecord> = serde_json::from_str(content)?;
    Ok(records
        .into_iter()
        .filter_map(LexemeRecord::into_lexeme)
        .collect())
}
