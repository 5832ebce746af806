//! Guess evaluation against a target word
//!
//! Scores a guess position-by-position using the classic two-pass scheme:
//! exact matches are resolved first and consume letters from a working
//! multiset of the target, then misplaced matches are drawn from whatever
//! remains. This ordering is what makes duplicate letters come out right: a
//! letter appearing twice in the target but guessed three times yields at
//! most two non-Absent marks, and an exact match never steals a misplaced
//! slot from another position.

use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterStatus {
    /// Right letter in the right position
    Correct,
    /// Letter occurs in the target, but elsewhere
    Present,
    /// Letter does not occur in the target (or all its occurrences are spoken for)
    Absent,
}

/// One letter of a guess together with its verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterResult {
    pub letter: char,
    pub status: LetterStatus,
}

/// The scored feedback for a whole guess
///
/// Always the same length as the target word. Immutable once computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Evaluation {
    results: Vec<LetterResult>,
}

impl Evaluation {
    /// The per-letter results in guess order
    #[inline]
    #[must_use]
    pub fn results(&self) -> &[LetterResult] {
        &self.results
    }

    /// Number of letters scored
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// True for a zero-length evaluation (cannot occur for a valid round)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// True when every letter is marked Correct
    #[must_use]
    pub fn is_all_correct(&self) -> bool {
        self.results
            .iter()
            .all(|r| r.status == LetterStatus::Correct)
    }

    /// Iterate over the per-letter results
    pub fn iter(&self) -> std::slice::Iter<'_, LetterResult> {
        self.results.iter()
    }
}

impl<'a> IntoIterator for &'a Evaluation {
    type Item = &'a LetterResult;
    type IntoIter = std::slice::Iter<'a, LetterResult>;

    fn into_iter(self) -> Self::IntoIter {
        self.results.iter()
    }
}

impl fmt::Display for Evaluation {
    /// Compact textual form: `C` correct, `p` present, `.` absent
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for result in &self.results {
            let symbol = match result.status {
                LetterStatus::Correct => 'C',
                LetterStatus::Present => 'p',
                LetterStatus::Absent => '.',
            };
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

/// Score `guess` against `target`, position by position
///
/// Both slices must have the same length; the round controller validates
/// guess length before calling.
///
/// # Algorithm
/// 1. First pass: mark exact matches (Correct) and remove each matched
///    letter from a working multiset of the target's letters
/// 2. Second pass: for every position not yet Correct, mark Present if the
///    letter remains in the multiset (consuming one occurrence), else Absent
///
/// Pure function: deterministic, no shared state, safe to call concurrently.
///
/// # Examples
/// ```
/// use lexiguess::core::{evaluate, LetterStatus};
///
/// let guess: Vec<char> = "trace".chars().collect();
/// let target: Vec<char> = "crane".chars().collect();
/// let evaluation = evaluate(&guess, &target);
///
/// // T(absent) R(correct) A(correct) C(present) E(correct)
/// assert_eq!(evaluation.results()[0].status, LetterStatus::Absent);
/// assert_eq!(evaluation.results()[3].status, LetterStatus::Present);
/// ```
#[must_use]
pub fn evaluate(guess: &[char], target: &[char]) -> Evaluation {
    debug_assert_eq!(
        guess.len(),
        target.len(),
        "guess and target must have equal length"
    );

    let mut statuses = vec![LetterStatus::Absent; guess.len()];
    let mut available = char_counts(target);

    // First pass: exact position matches
    for (i, (&g, &t)) in guess.iter().zip(target.iter()).enumerate() {
        if g == t {
            statuses[i] = LetterStatus::Correct;
            if let Some(count) = available.get_mut(&g) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: misplaced letters from the remaining pool
    for (i, &g) in guess.iter().enumerate() {
        if statuses[i] == LetterStatus::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&g) {
            if *count > 0 {
                statuses[i] = LetterStatus::Present;
                *count -= 1;
            }
        }
    }

    let results = guess
        .iter()
        .zip(statuses)
        .map(|(&letter, status)| LetterResult { letter, status })
        .collect();

    Evaluation { results }
}

/// Count occurrences of each letter
fn char_counts(chars: &[char]) -> FxHashMap<char, u8> {
    let mut counts = FxHashMap::default();
    for &ch in chars {
        *counts.entry(ch).or_insert(0u8) += 1;
    }
    counts
}
