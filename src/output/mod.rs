//! Terminal output formatting
//!
//! Presentation layer: renders controller results and hints; never touches
//! game state.

pub mod display;
pub mod formatters;

pub use formatters::{evaluation_to_emoji, evaluation_to_tiles, masked_word};
