//! Difficulty tiers
//!
//! A tier is nothing more than the ordered set of hint kinds the caller is
//! allowed to offer; the hint ledger itself is difficulty-agnostic.

use super::hints::HintKind;
use serde::Serialize;
use std::fmt;

/// Difficulty tier controlling which hint kinds are on offer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Rich textual hints: grammar and definition
    Easy,
    /// Indirect hints: image and translations
    #[default]
    Medium,
    /// Audio only
    Hard,
}

impl Difficulty {
    /// Parse a difficulty from a name string
    ///
    /// Defaults to medium if the name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "easy" => Self::Easy,
            "hard" => Self::Hard,
            _ => Self::Medium,
        }
    }

    /// The hint kinds this tier allows, in offer order
    #[must_use]
    pub const fn allowed_kinds(self) -> &'static [HintKind] {
        match self {
            Self::Easy => &[HintKind::GrammaticalFeatures, HintKind::Definition],
            Self::Medium => &[HintKind::Image, HintKind::Translations],
            Self::Hard => &[HintKind::Pronunciation],
        }
    }

    /// Whether this tier offers the given hint kind
    #[must_use]
    pub fn allows(self, kind: HintKind) -> bool {
        self.allowed_kinds().contains(&kind)
    }

    /// Canonical name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
