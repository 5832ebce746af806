//! Knowledge-base lexeme entries
//!
//! A Lexeme bundles a guessable lemma (the canonical dictionary form of a
//! word) with the optional linguistic metadata a knowledge base attaches to
//! it: grammatical features, a definition, translations, a pronunciation
//! recording and an illustrative image.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A lexeme entry supplied by the word source
///
/// The lemma is validated and lowercased at construction and the entry is
/// immutable afterwards. Lengths are measured in chars, not bytes, so lemmas
/// from any alphabetic script work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Lexeme {
    lemma: String,
    #[serde(skip)]
    chars: Vec<char>,
    grammatical_features: Option<String>,
    definition: Option<String>,
    translations: Option<String>,
    pronunciation: Option<String>,
    image: Option<String>,
}

/// Error type for invalid lemmas
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LemmaError {
    #[error("lemma must not be empty")]
    Empty,
    #[error("lemma contains non-alphabetic character {0:?}")]
    InvalidCharacter(char),
}

impl Lexeme {
    /// Create a new lexeme from a lemma with no metadata attached
    ///
    /// The lemma is trimmed and lowercased. Metadata is added with the
    /// `with_*` builder methods.
    ///
    /// # Errors
    /// Returns `LemmaError` if the trimmed lemma is empty or contains a
    /// non-alphabetic character.
    ///
    /// # Examples
    /// ```
    /// use lexiguess::core::Lexeme;
    ///
    /// let lexeme = Lexeme::new("Crane").unwrap();
    /// assert_eq!(lexeme.lemma(), "crane");
    /// assert_eq!(lexeme.len(), 5);
    ///
    /// assert!(Lexeme::new("").is_err());
    /// assert!(Lexeme::new("cran3").is_err());
    /// ```
    pub fn new(lemma: impl Into<String>) -> Result<Self, LemmaError> {
        let lemma: String = lemma.into().trim().to_lowercase();

        if lemma.is_empty() {
            return Err(LemmaError::Empty);
        }

        if let Some(bad) = lemma.chars().find(|c| !c.is_alphabetic()) {
            return Err(LemmaError::InvalidCharacter(bad));
        }

        let chars: Vec<char> = lemma.chars().collect();

        Ok(Self {
            lemma,
            chars,
            grammatical_features: None,
            definition: None,
            translations: None,
            pronunciation: None,
            image: None,
        })
    }

    /// Attach a grammatical-features tag (e.g. "noun, feminine")
    #[must_use]
    pub fn with_grammatical_features(mut self, features: impl Into<String>) -> Self {
        self.grammatical_features = non_empty(features.into());
        self
    }

    /// Attach a definition
    #[must_use]
    pub fn with_definition(mut self, definition: impl Into<String>) -> Self {
        self.definition = non_empty(definition.into());
        self
    }

    /// Attach translations into other languages
    #[must_use]
    pub fn with_translations(mut self, translations: impl Into<String>) -> Self {
        self.translations = non_empty(translations.into());
        self
    }

    /// Attach a pronunciation reference (audio URI or phonetic spelling)
    #[must_use]
    pub fn with_pronunciation(mut self, pronunciation: impl Into<String>) -> Self {
        self.pronunciation = non_empty(pronunciation.into());
        self
    }

    /// Attach an illustrative image URI
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = non_empty(image.into());
        self
    }

    /// Get the lemma as a string slice
    #[inline]
    #[must_use]
    pub fn lemma(&self) -> &str {
        &self.lemma
    }

    /// Get the lemma as a char slice
    #[inline]
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length of the lemma in chars
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True if the lemma has no characters (never holds for a valid lexeme)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Grammatical-features tag, if the knowledge base supplied one
    #[inline]
    #[must_use]
    pub fn grammatical_features(&self) -> Option<&str> {
        self.grammatical_features.as_deref()
    }

    /// Definition, if the knowledge base supplied one
    #[inline]
    #[must_use]
    pub fn definition(&self) -> Option<&str> {
        self.definition.as_deref()
    }

    /// Translations, if the knowledge base supplied any
    #[inline]
    #[must_use]
    pub fn translations(&self) -> Option<&str> {
        self.translations.as_deref()
    }

    /// Pronunciation reference, if the knowledge base supplied one
    #[inline]
    #[must_use]
    pub fn pronunciation(&self) -> Option<&str> {
        self.pronunciation.as_deref()
    }

    /// Image URI, if the knowledge base supplied one
    #[inline]
    #[must_use]
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }

}

impl fmt::Display for Lexeme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lemma)
    }
}

/// Treat empty metadata strings from the data source as missing
fn non_empty(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
