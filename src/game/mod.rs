//! Game state: the round controller, hints and difficulty tiers

mod difficulty;
mod hints;
mod round;

pub use difficulty::Difficulty;
pub use hints::{HintKind, HintLedger, HintPayload};
pub use round::{
    DEFAULT_MAX_ATTEMPTS, Guess, GuessError, GuessOutcome, HintError, RoundController, RoundEnd,
    RoundInfo, RoundPhase, StartError,
};
