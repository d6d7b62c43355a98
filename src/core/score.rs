//! Guess scoring
//!
//! A score is the feedback for one submitted guess against the hidden goal:
//! how many pegs match in both color and position (`exact`), and how many of
//! the remaining pegs have the right color in the wrong position (`color`).
//! Each goal slot and each guess slot is consumed at most once, so repeated
//! colors are never double-counted.

use super::Color;
use rustc_hash::FxHashMap;
use std::fmt;

/// Feedback for one guess
///
/// Scores produced by [`Score::calculate`] satisfy `exact + color <= len`,
/// since every slot is consumed at most once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Score {
    exact: usize,
    color: usize,
}

/// Error type for scoring failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    /// Goal and guess lengths differ
    LengthMismatch { goal: usize, guess: usize },
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthMismatch { goal, guess } => {
                write!(f, "guess length {guess} does not match goal length {goal}")
            }
        }
    }
}

impl std::error::Error for ScoreError {}

impl Score {
    /// The score of an uncommitted row
    pub const ZERO: Self = Self { exact: 0, color: 0 };

    /// Create a score from raw counts
    ///
    /// Unchecked: the counts are taken as given, with no code length to
    /// validate them against. [`Score::calculate`] is the only constructor
    /// that guarantees `exact + color <= len`.
    #[inline]
    #[must_use]
    pub const fn new(exact: usize, color: usize) -> Self {
        Self { exact, color }
    }

    /// Number of pegs with the right color in the right position
    #[inline]
    #[must_use]
    pub const fn exact(self) -> usize {
        self.exact
    }

    /// Number of additional pegs with the right color in the wrong position
    #[inline]
    #[must_use]
    pub const fn color(self) -> usize {
        self.color
    }

    /// Check whether this score means the code was fully broken
    #[inline]
    #[must_use]
    pub const fn is_win(self, code_length: usize) -> bool {
        self.exact == code_length
    }

    /// Score `guess` against `goal`
    ///
    /// # Algorithm
    /// 1. First pass: count exact position matches; slots that match are
    ///    consumed on both sides.
    /// 2. Build a frequency count of the colors left in the goal, then walk
    ///    the remaining guess slots in order: each slot whose color still has
    ///    a positive count scores a color match and decrements that count.
    ///
    /// The frequency count guarantees every goal slot is consumed at most
    /// once, which is what makes repeated colors score correctly.
    ///
    /// # Errors
    /// Returns `ScoreError::LengthMismatch` if the lengths differ.
    ///
    /// # Examples
    /// ```
    /// use mastermind::core::{Color::*, Score};
    ///
    /// let score = Score::calculate(&[Green, Blue, Red, Blue], &[Blue, Blue, Green, Blue]).unwrap();
    /// assert_eq!(score, Score::new(1, 2));
    /// ```
    pub fn calculate(goal: &[Color], guess: &[Color]) -> Result<Self, ScoreError> {
        if goal.len() != guess.len() {
            return Err(ScoreError::LengthMismatch {
                goal: goal.len(),
                guess: guess.len(),
            });
        }

        let mut exact: usize = 0;
        let mut remaining: FxHashMap<Color, usize> = FxHashMap::default();

        // First pass: exact matches; everything else feeds the leftover pool
        for (&target, &candidate) in goal.iter().zip(guess) {
            if target == candidate {
                exact += 1;
            } else {
                *remaining.entry(target).or_insert(0) += 1;
            }
        }

        // Second pass: color-only matches from the leftover pool
        let mut color: usize = 0;
        for (&target, &candidate) in goal.iter().zip(guess) {
            if target == candidate {
                continue;
            }
            if let Some(count) = remaining.get_mut(&candidate)
                && *count > 0
            {
                color += 1;
                *count -= 1;
            }
        }

        Ok(Self { exact, color })
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} exact, {} color", self.exact, self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Color::{Blue, Green, Orange, Red, Yellow};

    #[test]
    fn score_perfect_match() {
        let goal = [Yellow, Yellow, Yellow, Yellow];
        let score = Score::calculate(&goal, &goal).unwrap();
        assert_eq!(score, Score::new(4, 0));
        assert!(score.is_win(4));
    }

    #[test]
    fn score_no_match() {
        let score = Score::calculate(&[Blue, Blue, Blue, Blue], &[Red, Red, Red, Red]).unwrap();
        assert_eq!(score, Score::ZERO);
        assert!(!score.is_win(4));
    }

    #[test]
    fn score_repeated_colors_no_double_counting() {
        // Regression for the classic duplicate bug: the goal has two B's, the
        // guess has three. Index 1 is exact; exactly one more B plus the G
        // score as color matches.
        let score = Score::calculate(&[Green, Blue, Red, Blue], &[Blue, Blue, Green, Blue]).unwrap();
        assert_eq!(score, Score::new(1, 2));
    }

    #[test]
    fn score_duplicate_guess_against_single_goal_slot() {
        // Goal has Y twice but the guess's lone Y at index 2 can only consume
        // one of them.
        let score =
            Score::calculate(&[Yellow, Yellow, Green, Green], &[Orange, Orange, Yellow, Orange])
                .unwrap();
        assert_eq!(score, Score::new(0, 1));
    }

    #[test]
    fn score_exact_match_consumes_goal_slot() {
        // The exact Y at index 1 must not also count as a color match.
        let score =
            Score::calculate(&[Yellow, Yellow, Blue, Blue], &[Orange, Yellow, Orange, Orange])
                .unwrap();
        assert_eq!(score, Score::new(1, 0));
    }

    #[test]
    fn score_all_misplaced() {
        let score = Score::calculate(&[Blue, Green, Red, Yellow], &[Yellow, Red, Green, Blue]).unwrap();
        assert_eq!(score, Score::new(0, 4));
    }

    #[test]
    fn score_symmetric_in_goal_and_guess() {
        let cases: [(&[Color], &[Color]); 4] = [
            (&[Green, Blue, Red, Blue], &[Blue, Blue, Green, Blue]),
            (&[Yellow, Yellow, Green, Green], &[Orange, Orange, Yellow, Orange]),
            (&[Blue, Green, Red, Yellow], &[Yellow, Red, Green, Blue]),
            (&[Orange, Orange, Orange], &[Orange, Blue, Green]),
        ];
        for (a, b) in cases {
            assert_eq!(Score::calculate(a, b), Score::calculate(b, a));
        }
    }

    #[test]
    fn score_sum_bounded_by_length() {
        let goals = [
            [Blue, Blue, Green, Red],
            [Yellow, Orange, Yellow, Orange],
            [Red, Red, Red, Red],
        ];
        let guesses = [
            [Blue, Green, Blue, Blue],
            [Orange, Yellow, Orange, Yellow],
            [Red, Blue, Red, Green],
        ];
        for goal in &goals {
            for guess in &guesses {
                let score = Score::calculate(goal, guess).unwrap();
                assert!(score.exact() + score.color() <= goal.len());
            }
        }
    }

    #[test]
    fn score_handles_codes_longer_than_a_byte() {
        // Counts must not be capped at 255: a perfect 300-peg guess scores
        // 300 exact and still registers as a win.
        let goal = vec![Blue; 300];
        let score = Score::calculate(&goal, &goal).unwrap();
        assert_eq!(score, Score::new(300, 0));
        assert!(score.is_win(300));

        // Color-only matches can exceed a byte too.
        let goal: Vec<Color> = (0..300).map(|i| if i % 2 == 0 { Blue } else { Green }).collect();
        let guess: Vec<Color> = (0..300).map(|i| if i % 2 == 0 { Green } else { Blue }).collect();
        let score = Score::calculate(&goal, &guess).unwrap();
        assert_eq!(score, Score::new(0, 300));
    }

    #[test]
    fn score_full_exact_iff_equal() {
        let goal = [Blue, Green, Red, Yellow];
        assert_eq!(Score::calculate(&goal, &goal).unwrap().exact(), 4);

        let near = [Blue, Green, Yellow, Red];
        assert_ne!(Score::calculate(&goal, &near).unwrap().exact(), 4);
    }

    #[test]
    fn score_length_mismatch() {
        assert_eq!(
            Score::calculate(&[Blue, Green], &[Blue]),
            Err(ScoreError::LengthMismatch { goal: 2, guess: 1 })
        );
        assert_eq!(
            Score::calculate(&[], &[Red]),
            Err(ScoreError::LengthMismatch { goal: 0, guess: 1 })
        );
    }

    #[test]
    fn score_empty_sequences() {
        assert_eq!(Score::calculate(&[], &[]), Ok(Score::ZERO));
    }

    #[test]
    fn score_display() {
        assert_eq!(format!("{}", Score::new(2, 1)), "2 exact, 1 color");
    }
}
