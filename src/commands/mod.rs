//! Command implementations

pub mod play;
pub mod score;

pub use play::{SessionStats, run_play};
pub use score::{ScoreError, ScoreResult, score_guess};
