//! Hint ledger and hint payloads
//!
//! A hint reveals one category of auxiliary knowledge-base metadata about
//! the target lexeme. The ledger enforces at-most-once disclosure per kind
//! within a round: a kind already revealed never produces new output.

use crate::core::Lexeme;
use rustc_hash::FxHashSet;
use serde::Serialize;
use std::fmt;

/// Fallback markers for metadata the knowledge base did not supply
const NOT_SPECIFIED: &str = "not specified";
const NOT_AVAILABLE: &str = "not available";

/// Category of auxiliary information that can be revealed about the target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HintKind {
    GrammaticalFeatures,
    Definition,
    Image,
    Translations,
    Pronunciation,
}

impl HintKind {
    /// Every hint kind, in catalog order
    pub const ALL: [Self; 5] = [
        Self::GrammaticalFeatures,
        Self::Definition,
        Self::Image,
        Self::Translations,
        Self::Pronunciation,
    ];

    /// Parse a hint kind from a user-facing name
    ///
    /// Accepts the canonical snake_case name plus the short aliases used by
    /// the interactive prompt. Returns `None` for unrecognized names.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "grammatical_features" | "grammar" => Some(Self::GrammaticalFeatures),
            "definition" | "def" => Some(Self::Definition),
            "image" | "img" => Some(Self::Image),
            "translations" | "translation" => Some(Self::Translations),
            "pronunciation" | "audio" => Some(Self::Pronunciation),
            _ => None,
        }
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::GrammaticalFeatures => "grammatical_features",
            Self::Definition => "definition",
            Self::Image => "image",
            Self::Translations => "translations",
            Self::Pronunciation => "pronunciation",
        }
    }

    /// Short label for menus and buttons
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GrammaticalFeatures => "Grammar",
            Self::Definition => "Definition",
            Self::Image => "Image",
            Self::Translations => "Translation",
            Self::Pronunciation => "Audio",
        }
    }
}

impl fmt::Display for HintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A revealed hint, one variant per kind
///
/// Textual kinds (grammar, definition, translations) always carry a value,
/// falling back to a marker string when the lexeme has no data. Media kinds
/// (image, pronunciation) are only produced when the lexeme carries the
/// reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum HintPayload {
    GrammaticalFeatures(String),
    Definition(String),
    Translations(String),
    Image(String),
    Pronunciation(String),
}

/// Tracks which hint kinds have been revealed in the current round
///
/// One ledger per round; the controller resets it whenever a new round
/// starts. The ledger is difficulty-agnostic: filtering which kinds are on
/// offer is the caller's concern.
#[derive(Debug, Clone, Default)]
pub struct HintLedger {
    revealed: FxHashSet<HintKind>,
}

impl HintLedger {
    /// Create an empty ledger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal a hint of the given kind about `lexeme`
    ///
    /// Returns `None` if the kind was already revealed this round, or if the
    /// kind is a media reference the lexeme does not carry. Either way the
    /// kind counts as revealed afterwards; use [`HintLedger::is_revealed`]
    /// to tell the two cases apart.
    pub fn request(&mut self, kind: HintKind, lexeme: &Lexeme) -> Option<HintPayload> {
        if !self.revealed.insert(kind) {
            return None;
        }

        match kind {
            HintKind::GrammaticalFeatures => Some(HintPayload::GrammaticalFeatures(
                lexeme
                    .grammatical_features()
                    .unwrap_or(NOT_SPECIFIED)
                    .to_string(),
            )),
            HintKind::Definition => Some(HintPayload::Definition(
                lexeme.definition().unwrap_or(NOT_AVAILABLE).to_string(),
            )),
            HintKind::Translations => Some(HintPayload::Translations(
                lexeme.translations().unwrap_or(NOT_AVAILABLE).to_string(),
            )),
            HintKind::Image => lexeme.image().map(|uri| HintPayload::Image(uri.to_string())),
            HintKind::Pronunciation => lexeme
                .pronunciation()
                .map(|p| HintPayload::Pronunciation(p.to_string())),
        }
    }

    /// Whether the given kind has been revealed this round
    #[inline]
    #[must_use]
    pub fn is_revealed(&self, kind: HintKind) -> bool {
        self.revealed.contains(&kind)
    }

    /// The kinds revealed so far, in catalog order
    #[must_use]
    pub fn revealed_kinds(&self) -> Vec<HintKind> {
        HintKind::ALL
            .into_iter()
            .filter(|kind| self.revealed.contains(kind))
            .collect()
    }

    /// Forget everything revealed; called at the start of every new round
    pub fn reset(&mut self) {
        self.revealed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_lexeme() -> Lexeme {
        Lexeme::new("water")
            .unwrap()
            .with_definition("a transparent liquid")
            .with_grammatical_features("noun")
            .with_translations("French: eau")
            .with_pronunciation("https://example.org/water.ogg")
            .with_image("https://example.org/water.jpg")
    }

    fn bare_lexeme() -> Lexeme {
        Lexeme::new("water").unwrap()
    }

    #[test]
    fn hint_revealed_at_most_once() {
        let lexeme = full_lexeme();

        for kind in HintKind::ALL {
            let mut ledger = HintLedger::new();
            assert!(ledger.request(kind, &lexeme).is_some());
            assert!(ledger.request(kind, &lexeme).is_none(), "{kind} repeated");
            assert!(ledger.is_revealed(kind));
        }
    }

    #[test]
    fn hint_kinds_are_independent() {
        let lexeme = full_lexeme();
        let mut ledger = HintLedger::new();

        assert!(ledger.request(HintKind::Definition, &lexeme).is_some());
        assert!(!ledger.is_revealed(HintKind::Image));
        assert!(ledger.request(HintKind::Image, &lexeme).is_some());
    }

    #[test]
    fn hint_definition_payload() {
        let mut ledger = HintLedger::new();
        let payload = ledger.request(HintKind::Definition, &full_lexeme());
        assert_eq!(
            payload,
            Some(HintPayload::Definition("a transparent liquid".to_string()))
        );
    }

    #[test]
    fn hint_textual_kinds_fall_back_to_markers() {
        let lexeme = bare_lexeme();
        let mut ledger = HintLedger::new();

        assert_eq!(
            ledger.request(HintKind::GrammaticalFeatures, &lexeme),
            Some(HintPayload::GrammaticalFeatures("not specified".to_string()))
        );
        assert_eq!(
            ledger.request(HintKind::Definition, &lexeme),
            Some(HintPayload::Definition("not available".to_string()))
        );
        assert_eq!(
            ledger.request(HintKind::Translations, &lexeme),
            Some(HintPayload::Translations("not available".to_string()))
        );
    }

    #[test]
    fn hint_media_kinds_need_data() {
        let lexeme = bare_lexeme();
        let mut ledger = HintLedger::new();

        // No payload, but the attempt still consumes the kind
        assert_eq!(ledger.request(HintKind::Image, &lexeme), None);
        assert!(ledger.is_revealed(HintKind::Image));

        assert_eq!(ledger.request(HintKind::Pronunciation, &lexeme), None);
        assert!(ledger.is_revealed(HintKind::Pronunciation));
    }

    #[test]
    fn hint_ledger_reset() {
        let lexeme = full_lexeme();
        let mut ledger = HintLedger::new();

        assert!(ledger.request(HintKind::Image, &lexeme).is_some());
        ledger.reset();

        assert!(!ledger.is_revealed(HintKind::Image));
        assert!(ledger.request(HintKind::Image, &lexeme).is_some());
    }

    #[test]
    fn hint_revealed_kinds_in_catalog_order() {
        let lexeme = full_lexeme();
        let mut ledger = HintLedger::new();

        ledger.request(HintKind::Pronunciation, &lexeme);
        ledger.request(HintKind::GrammaticalFeatures, &lexeme);

        assert_eq!(
            ledger.revealed_kinds(),
            vec![HintKind::GrammaticalFeatures, HintKind::Pronunciation]
        );
    }

    #[test]
    fn hint_kind_from_name() {
        assert_eq!(
            HintKind::from_name("grammar"),
            Some(HintKind::GrammaticalFeatures)
        );
        assert_eq!(HintKind::from_name("definition"), Some(HintKind::Definition));
        assert_eq!(HintKind::from_name("audio"), Some(HintKind::Pronunciation));
        assert_eq!(HintKind::from_name("bogus"), None);
    }
}
