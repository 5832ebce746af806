//! Round controller state machine
//!
//! Owns the lifecycle of one guessing round: picking a target lexeme from
//! the candidates the word source supplied, accepting guesses, tracking
//! remaining attempts and deciding win/loss. Scoring is delegated to
//! [`crate::core::evaluate`] and hint bookkeeping to [`HintLedger`].
//!
//! The controller never performs I/O and never exposes the target lemma
//! while a round is in play. All operations are synchronous `&mut self`
//! calls, so exclusive ownership rules out interleaved mutation.

use super::hints::{HintKind, HintLedger, HintPayload};
use crate::core::{Evaluation, Lexeme, evaluate};
use rand::prelude::IndexedRandom;
use serde::Serialize;
use thiserror::Error;

/// Default number of guesses per round
pub const DEFAULT_MAX_ATTEMPTS: usize = 6;

/// Lifecycle phase of a round
///
/// `Won`, `Lost` and `Error` are terminal until the next
/// [`RoundController::start_round`] call; a finished round is never
/// resurrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundPhase {
    /// No round has been started yet
    Idle,
    /// The host is fetching candidates; guesses are rejected
    Loading,
    /// A round is in progress
    Playing,
    /// The target was guessed
    Won,
    /// Attempts ran out
    Lost,
    /// The last start attempt failed
    Error,
}

/// A scored guess, immutable once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Guess {
    text: String,
    evaluation: Evaluation,
}

impl Guess {
    /// The guessed text after lowercasing
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The per-letter feedback
    #[inline]
    #[must_use]
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}

/// End-of-round information, present once a round is decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundEnd {
    pub won: bool,
    pub revealed_word: String,
}

/// Result of a successful guess submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessOutcome {
    pub evaluation: Evaluation,
    pub attempts_remaining: usize,
    pub terminal: Option<RoundEnd>,
}

/// Read-only snapshot of a round
///
/// The target lemma appears only once the round is won or lost.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundInfo {
    pub phase: RoundPhase,
    pub word_length: Option<usize>,
    pub attempts_made: usize,
    pub max_attempts: usize,
    pub attempts_remaining: usize,
    pub revealed_word: Option<String>,
}

/// Errors from starting a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StartError {
    #[error("no usable candidate words were supplied")]
    EmptyCandidateSet,
}

/// Errors from submitting a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no round is currently being played")]
    NotPlaying,
    #[error("guess must be {expected} letters, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
}

/// Errors from requesting a hint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HintError {
    #[error("no round is currently being played")]
    NotPlaying,
}

/// State machine for one guessing round
///
/// Exclusively owns the mutable round state; a fresh `start_round` discards
/// everything from the previous round unconditionally.
#[derive(Debug, Clone)]
pub struct RoundController {
    phase: RoundPhase,
    target: Option<Lexeme>,
    attempts: Vec<Guess>,
    max_attempts: usize,
    hints: HintLedger,
}

impl Default for RoundController {
    fn default() -> Self {
        Self::new()
    }
}

impl RoundController {
    /// Create an idle controller with no round in progress
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: RoundPhase::Idle,
            target: None,
            attempts: Vec::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            hints: HintLedger::new(),
        }
    }

    /// Mark that the host is fetching candidates
    ///
    /// Guesses and hints are rejected with `NotPlaying` until the fetch
    /// completes and `start_round` is called.
    pub fn mark_loading(&mut self) {
        self.phase = RoundPhase::Loading;
    }

    /// Start a new round from the supplied candidates
    ///
    /// Picks one candidate uniformly at random, clears all prior round
    /// state (guesses and revealed hints) and enters `Playing`. The
    /// returned snapshot carries the target's length, never the target.
    /// Values of `max_attempts` below 1 are clamped to 1.
    ///
    /// # Errors
    /// Returns `StartError::EmptyCandidateSet` if `candidates` is empty;
    /// the round enters the `Error` phase and no guesses are possible until
    /// a retry.
    pub fn start_round(
        &mut self,
        candidates: &[Lexeme],
        max_attempts: usize,
    ) -> Result<RoundInfo, StartError> {
        self.attempts.clear();
        self.hints.reset();
        self.max_attempts = max_attempts.max(1);

        let Some(target) = candidates.choose(&mut rand::rng()) else {
            self.target = None;
            self.phase = RoundPhase::Error;
            return Err(StartError::EmptyCandidateSet);
        };

        self.target = Some(target.clone());
        self.phase = RoundPhase::Playing;
        Ok(self.info())
    }

    /// Submit a guess for the current round
    ///
    /// The input is trimmed and lowercased before length validation,
    /// scoring and comparison. A guess that fails validation consumes no
    /// attempt. An exact match wins regardless of remaining attempts;
    /// otherwise the round is lost once `max_attempts` guesses are spent.
    ///
    /// # Errors
    /// - `GuessError::NotPlaying` if no round is in the `Playing` phase
    /// - `GuessError::LengthMismatch` if the guess length differs from the
    ///   target length
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome, GuessError> {
        if self.phase != RoundPhase::Playing {
            return Err(GuessError::NotPlaying);
        }
        let Some(target) = &self.target else {
            return Err(GuessError::NotPlaying);
        };

        let guess_text = text.trim().to_lowercase();
        let guess_chars: Vec<char> = guess_text.chars().collect();

        if guess_chars.len() != target.len() {
            return Err(GuessError::LengthMismatch {
                expected: target.len(),
                actual: guess_chars.len(),
            });
        }

        let evaluation = evaluate(&guess_chars, target.chars());
        let won = guess_text == target.lemma();
        let revealed_word = target.lemma().to_string();

        self.attempts.push(Guess {
            text: guess_text,
            evaluation: evaluation.clone(),
        });

        if won {
            self.phase = RoundPhase::Won;
        } else if self.attempts.len() == self.max_attempts {
            self.phase = RoundPhase::Lost;
        }

        let terminal = matches!(self.phase, RoundPhase::Won | RoundPhase::Lost)
            .then_some(RoundEnd { won, revealed_word });

        Ok(GuessOutcome {
            evaluation,
            attempts_remaining: self.max_attempts - self.attempts.len(),
            terminal,
        })
    }

    /// Request a hint about the current target
    ///
    /// Delegates to the round's [`HintLedger`]: `Ok(None)` means the kind
    /// was already revealed this round, or carries no data on the target.
    ///
    /// # Errors
    /// Returns `HintError::NotPlaying` if no round is in the `Playing`
    /// phase.
    pub fn request_hint(&mut self, kind: HintKind) -> Result<Option<HintPayload>, HintError> {
        if self.phase != RoundPhase::Playing {
            return Err(HintError::NotPlaying);
        }
        match &self.target {
            Some(target) => Ok(self.hints.request(kind, target)),
            None => Err(HintError::NotPlaying),
        }
    }

    /// Read-only snapshot of the round
    #[must_use]
    pub fn info(&self) -> RoundInfo {
        let revealed_word = match self.phase {
            RoundPhase::Won | RoundPhase::Lost => {
                self.target.as_ref().map(|t| t.lemma().to_string())
            }
            _ => None,
        };

        let word_length = match self.phase {
            RoundPhase::Playing | RoundPhase::Won | RoundPhase::Lost => {
                self.target.as_ref().map(Lexeme::len)
            }
            _ => None,
        };

        RoundInfo {
            phase: self.phase,
            word_length,
            attempts_made: self.attempts.len(),
            max_attempts: self.max_attempts,
            attempts_remaining: self.max_attempts.saturating_sub(self.attempts.len()),
            revealed_word,
        }
    }

    /// Current lifecycle phase
    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// The scored guesses made this round, in order
    #[inline]
    #[must_use]
    pub fn guesses(&self) -> &[Guess] {
        &self.attempts
    }

    /// The hint ledger for the current round
    ///
    /// Lets the presentation layer distinguish "already revealed" from
    /// "no data on this lexeme".
    #[inline]
    #[must_use]
    pub const fn hint_ledger(&self) -> &HintLedger {
        &self.hints
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LetterStatus;

    fn crane() -> Vec<Lexeme> {
        vec![
            Lexeme::new("crane")
                .unwrap()
                .with_definition("a large wading bird")
                .with_grammatical_features("noun"),
        ]
    }

    fn playing_controller() -> RoundController {
        let mut controller = RoundController::new();
        controller
            .start_round(&crane(), DEFAULT_MAX_ATTEMPTS)
            .unwrap();
        controller
    }

    #[test]
    fn new_controller_is_idle() {
        let controller = RoundController::new();
        let info = controller.info();
        assert_eq!(info.phase, RoundPhase::Idle);
        assert_eq!(info.word_length, None);
        assert_eq!(info.attempts_made, 0);
    }

    #[test]
    fn start_round_with_empty_candidates_fails() {
        let mut controller = RoundController::new();
        let result = controller.start_round(&[], DEFAULT_MAX_ATTEMPTS);

        assert_eq!(result, Err(StartError::EmptyCandidateSet));
        assert_eq!(controller.phase(), RoundPhase::Error);

        // No guesses possible until a successful retry
        assert_eq!(controller.submit_guess("crane"), Err(GuessError::NotPlaying));
    }

    #[test]
    fn start_round_recovers_from_error() {
        let mut controller = RoundController::new();
        let _ = controller.start_round(&[], DEFAULT_MAX_ATTEMPTS);

        let info = controller.start_round(&crane(), DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(info.phase, RoundPhase::Playing);
    }

    #[test]
    fn start_round_exposes_length_never_target() {
        let mut controller = RoundController::new();
        let info = controller.start_round(&crane(), DEFAULT_MAX_ATTEMPTS).unwrap();

        assert_eq!(info.phase, RoundPhase::Playing);
        assert_eq!(info.word_length, Some(5));
        assert_eq!(info.revealed_word, None);
        assert_eq!(info.attempts_remaining, DEFAULT_MAX_ATTEMPTS);
    }

    #[test]
    fn start_round_picks_from_candidates() {
        let candidates = vec![
            Lexeme::new("crane").unwrap(),
            Lexeme::new("slate").unwrap(),
            Lexeme::new("robot").unwrap(),
        ];
        let mut controller = RoundController::new();
        controller.start_round(&candidates, DEFAULT_MAX_ATTEMPTS).unwrap();

        // The selected target is one of the candidates: exactly one guess
        // out of the three must win
        let mut wins = 0;
        for candidate in &candidates {
            let mut probe = controller.clone();
            let outcome = probe.submit_guess(candidate.lemma()).unwrap();
            if outcome.terminal.is_some_and(|end| end.won) {
                wins += 1;
            }
        }
        assert_eq!(wins, 1);
    }

    #[test]
    fn submit_guess_correct_wins_immediately() {
        let mut controller = playing_controller();
        let outcome = controller.submit_guess("crane").unwrap();

        assert!(outcome.evaluation.is_all_correct());
        assert_eq!(
            outcome.terminal,
            Some(RoundEnd {
                won: true,
                revealed_word: "crane".to_string(),
            })
        );
        assert_eq!(controller.phase(), RoundPhase::Won);
    }

    #[test]
    fn submit_guess_uppercase_input_normalized() {
        let mut controller = playing_controller();
        let outcome = controller.submit_guess("CRANE").unwrap();
        assert!(outcome.terminal.is_some_and(|end| end.won));
    }

    #[test]
    fn submit_guess_wrong_word_stays_playing() {
        let mut controller = playing_controller();
        let outcome = controller.submit_guess("slate").unwrap();

        assert_eq!(outcome.terminal, None);
        assert_eq!(outcome.attempts_remaining, DEFAULT_MAX_ATTEMPTS - 1);
        assert_eq!(controller.phase(), RoundPhase::Playing);
        assert_eq!(controller.guesses().len(), 1);
        assert_eq!(controller.guesses()[0].text(), "slate");
    }

    #[test]
    fn submit_guess_length_mismatch_consumes_no_attempt() {
        let mut controller = playing_controller();
        let result = controller.submit_guess("cat");

        assert_eq!(
            result,
            Err(GuessError::LengthMismatch {
                expected: 5,
                actual: 3,
            })
        );
        assert_eq!(controller.guesses().len(), 0);
        assert_eq!(controller.info().attempts_remaining, DEFAULT_MAX_ATTEMPTS);
        assert_eq!(controller.phase(), RoundPhase::Playing);
    }

    #[test]
    fn submit_guess_length_counts_chars_not_bytes() {
        let mut controller = RoundController::new();
        controller
            .start_round(&[Lexeme::new("yɛlɛ").unwrap()], DEFAULT_MAX_ATTEMPTS)
            .unwrap();

        // Four chars, more than four bytes
        let outcome = controller.submit_guess("yɛlɛ").unwrap();
        assert!(outcome.terminal.is_some_and(|end| end.won));
    }

    #[test]
    fn round_lost_after_max_attempts() {
        let mut controller = RoundController::new();
        controller.start_round(&crane(), 3).unwrap();

        assert!(controller.submit_guess("slate").unwrap().terminal.is_none());
        assert!(controller.submit_guess("grate").unwrap().terminal.is_none());

        let outcome = controller.submit_guess("plate").unwrap();
        assert_eq!(outcome.attempts_remaining, 0);
        assert_eq!(
            outcome.terminal,
            Some(RoundEnd {
                won: false,
                revealed_word: "crane".to_string(),
            })
        );
        assert_eq!(controller.phase(), RoundPhase::Lost);

        // One guess past exhaustion is rejected
        assert_eq!(controller.submit_guess("crane"), Err(GuessError::NotPlaying));
    }

    #[test]
    fn winning_on_last_attempt_wins_not_loses() {
        let mut controller = RoundController::new();
        controller.start_round(&crane(), 2).unwrap();

        controller.submit_guess("slate").unwrap();
        let outcome = controller.submit_guess("crane").unwrap();

        assert!(outcome.terminal.is_some_and(|end| end.won));
        assert_eq!(controller.phase(), RoundPhase::Won);
    }

    #[test]
    fn finished_round_is_terminal() {
        let mut controller = playing_controller();
        controller.submit_guess("crane").unwrap();

        assert_eq!(controller.submit_guess("crane"), Err(GuessError::NotPlaying));
        assert_eq!(
            controller.request_hint(HintKind::Definition),
            Err(HintError::NotPlaying)
        );
    }

    #[test]
    fn info_reveals_word_only_after_round_ends() {
        let mut controller = playing_controller();
        assert_eq!(controller.info().revealed_word, None);

        controller.submit_guess("crane").unwrap();
        assert_eq!(controller.info().revealed_word, Some("crane".to_string()));
    }

    #[test]
    fn start_round_resets_previous_state() {
        let mut controller = RoundController::new();
        controller.start_round(&crane(), 2).unwrap();
        controller.submit_guess("slate").unwrap();
        controller
            .request_hint(HintKind::Definition)
            .unwrap()
            .unwrap();
        controller.submit_guess("grate").unwrap();
        assert_eq!(controller.phase(), RoundPhase::Lost);

        let info = controller.start_round(&crane(), DEFAULT_MAX_ATTEMPTS).unwrap();
        assert_eq!(info.phase, RoundPhase::Playing);
        assert_eq!(info.attempts_made, 0);
        assert!(controller.guesses().is_empty());

        // Hint ledger was reset along with the round
        assert!(controller
            .request_hint(HintKind::Definition)
            .unwrap()
            .is_some());
    }

    #[test]
    fn request_hint_at_most_once_per_round() {
        let mut controller = playing_controller();

        let first = controller.request_hint(HintKind::Definition).unwrap();
        assert_eq!(
            first,
            Some(HintPayload::Definition("a large wading bird".to_string()))
        );

        let second = controller.request_hint(HintKind::Definition).unwrap();
        assert_eq!(second, None);
        assert!(controller.hint_ledger().is_revealed(HintKind::Definition));
    }

    #[test]
    fn hints_rejected_while_idle_or_loading() {
        let mut controller = RoundController::new();
        assert_eq!(
            controller.request_hint(HintKind::Image),
            Err(HintError::NotPlaying)
        );

        controller.mark_loading();
        assert_eq!(controller.phase(), RoundPhase::Loading);
        assert_eq!(
            controller.request_hint(HintKind::Image),
            Err(HintError::NotPlaying)
        );
        assert_eq!(controller.submit_guess("crane"), Err(GuessError::NotPlaying));
    }

    #[test]
    fn zero_max_attempts_clamped() {
        let mut controller = RoundController::new();
        let info = controller.start_round(&crane(), 0).unwrap();
        assert_eq!(info.max_attempts, 1);

        let outcome = controller.submit_guess("slate").unwrap();
        assert!(outcome.terminal.is_some_and(|end| !end.won));
    }

    #[test]
    fn guess_evaluation_recorded_in_history() {
        let mut controller = playing_controller();
        controller.submit_guess("trace").unwrap();

        let guess = &controller.guesses()[0];
        let statuses: Vec<LetterStatus> = guess.evaluation().iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![
                LetterStatus::Absent,
                LetterStatus::Correct,
                LetterStatus::Correct,
                LetterStatus::Present,
                LetterStatus::Correct,
            ]
        );
    }

    #[test]
    fn guess_outcome_wire_shape() {
        let mut controller = playing_controller();
        let outcome = controller.submit_guess("crane").unwrap();

        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("evaluation").is_some());
        assert_eq!(json["attempts_remaining"], 5);
        assert_eq!(json["terminal"]["won"], true);
        assert_eq!(json["terminal"]["revealed_word"], "crane");
    }
}
