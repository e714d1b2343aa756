//! Letter-by-letter guess feedback
//!
//! Each guessed letter is classified as one of:
//! - `ExactMatch` (green): same letter at the same position in the answer
//! - `PresentElsewhere` (yellow): letter occurs in the answer at a position
//!   that has not been claimed by an exact match
//! - `Absent` (gray): letter does not occur, or its occurrences are used up
//!
//! Scoring walks the guess once, left to right. Exact matches consume the
//! answer position they land on. A letter that is present but misplaced stays
//! yellow only until a later occurrence of the same letter (exact or present)
//! takes its place, at which point the earlier yellow is demoted to gray.
//! At most one yellow per letter is pending at any time, so the backward scan
//! reduces to a single remembered index per letter.

use super::{WORD_LEN, Word};
use rustc_hash::FxHashMap;
use std::fmt;

/// Classification of a single guessed letter
///
/// Ordered by display priority: `Absent < PresentElsewhere < ExactMatch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LetterResult {
    Absent,
    PresentElsewhere,
    ExactMatch,
}

impl LetterResult {
    /// Emoji square used in share strings
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::ExactMatch => '🟩',
            Self::PresentElsewhere => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Score `guess` against `answer`, one result per guess position
///
/// # Panics
/// Panics if the two inputs differ in length. Every word that reaches the
/// scorer through [`Word`] is exactly 5 letters, so a mismatch is a bug in
/// the caller.
///
/// # Examples
/// ```
/// use wordle_game::core::{score, LetterResult::*};
///
/// assert_eq!(
///     score(b"llama", b"alloy"),
///     vec![Absent, ExactMatch, Absent, Absent, PresentElsewhere]
/// );
/// ```
#[must_use]
pub fn score(guess: &[u8], answer: &[u8]) -> Vec<LetterResult> {
    assert_eq!(
        guess.len(),
        answer.len(),
        "guess and answer length mismatch"
    );

    let mut positions: FxHashMap<u8, Vec<usize>> = FxHashMap::default();
    for (i, &letter) in answer.iter().enumerate() {
        positions.entry(letter).or_default().push(i);
    }

    score_with_positions(guess, positions)
}

/// Core scoring pass over a letter -> remaining answer positions table
fn score_with_positions(
    guess: &[u8],
    mut remaining: FxHashMap<u8, Vec<usize>>,
) -> Vec<LetterResult> {
    let mut results = vec![LetterResult::Absent; guess.len()];
    // Index of the single yellow currently held by each letter
    let mut pending_present: FxHashMap<u8, usize> = FxHashMap::default();

    for (i, &letter) in guess.iter().enumerate() {
        let Some(slots) = remaining.get_mut(&letter) else {
            continue;
        };

        if let Some(slot) = slots.iter().position(|&p| p == i) {
            slots.remove(slot);
            if let Some(earlier) = pending_present.remove(&letter) {
                results[earlier] = LetterResult::Absent;
            }
            results[i] = LetterResult::ExactMatch;
        } else if !slots.is_empty() {
            if let Some(earlier) = pending_present.insert(letter, i) {
                results[earlier] = LetterResult::Absent;
            }
            results[i] = LetterResult::PresentElsewhere;
        }
    }

    results
}

/// Feedback row for one guess: each guessed letter paired with its result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([(u8, LetterResult); WORD_LEN]);

impl Feedback {
    /// Calculate the feedback when `guess` is played against `answer`
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &answer).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, answer: &Word) -> Self {
        let results = score_with_positions(guess.chars(), answer.position_table().clone());

        let mut cells = [(0u8, LetterResult::Absent); WORD_LEN];
        for (cell, (&letter, result)) in cells
            .iter_mut()
            .zip(guess.chars().iter().zip(results))
        {
            *cell = (letter, result);
        }

        Self(cells)
    }

    /// The (letter, result) pairs in guess order
    #[inline]
    #[must_use]
    pub const fn cells(&self) -> &[(u8, LetterResult); WORD_LEN] {
        &self.0
    }

    /// Iterate over the results only, in guess order
    pub fn results(&self) -> impl Iterator<Item = LetterResult> + '_ {
        self.0.iter().map(|&(_, result)| result)
    }

    /// Check if every letter is an exact match
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.results().all(|r| r == LetterResult::ExactMatch)
    }

    /// Count cells with the given result
    #[must_use]
    pub fn count(&self, kind: LetterResult) -> usize {
        self.results().filter(|&r| r == kind).count()
    }

    /// Convert to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.results().map(LetterResult::emoji).collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
