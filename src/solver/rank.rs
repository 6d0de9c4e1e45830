//! Minimax ranking of a single guess
//!
//! A guess splits the candidate solutions by the feedback each would produce.
//! Its rank is the size of the largest part, with more parts breaking ties.

use crate::candidates::SolutionCandidates;
use crate::core::{Feedback, Word, feedback_for};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Worst-case remaining solutions, tie-broken by the number of partitions
///
/// Lower is better. Equal worst cases compare by partition count, more first.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Rank {
    worst: usize,
    partitions: usize,
}

impl Rank {
    #[must_use]
    pub const fn new(worst: usize, partitions: usize) -> Self {
        Self { worst, partitions }
    }

    /// Solutions left in the worst case
    #[must_use]
    pub const fn worst(self) -> usize {
        self.worst
    }

    #[must_use]
    pub const fn partitions(self) -> usize {
        self.partitions
    }

    /// Single number form, `worst + 1 / (partitions + 1)`
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::solver::Rank;
    ///
    /// assert_eq!(Rank::new(1, 3).score(), 1.25);
    /// ```
    #[must_use]
    pub fn score(self) -> f64 {
        self.worst as f64 + 1.0 / (self.partitions as f64 + 1.0)
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.worst
            .cmp(&other.worst)
            .then_with(|| other.partitions.cmp(&self.partitions))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}", self.score())
    }
}

impl fmt::Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rank(worst: {}, partitions: {})",
            self.worst, self.partitions
        )
    }
}

/// A stored score that does not decode to a rank
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{0} is not a valid rank score")]
pub struct InvalidScore(pub f64);

impl TryFrom<f64> for Rank {
    type Error = InvalidScore;

    fn try_from(score: f64) -> Result<Self, Self::Error> {
        if !score.is_finite() || score < 1.0 {
            return Err(InvalidScore(score));
        }
        let worst = score.floor();
        let fraction = score - worst;
        if fraction <= 0.0 || fraction > 0.5 + f64::EPSILON {
            return Err(InvalidScore(score));
        }

        let rank = Self::new(worst as usize, (1.0 / fraction).round() as usize - 1);
        if (rank.score() - score).abs() > 1e-9 * score.max(1.0) {
            return Err(InvalidScore(score));
        }
        Ok(rank)
    }
}

impl From<Rank> for f64 {
    fn from(rank: Rank) -> Self {
        rank.score()
    }
}

/// The rank of one guess and the feedback realising its worst case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessRank {
    pub guess: Word,
    pub rank: Rank,
    /// Feedback of the largest partition, earliest in partition order on ties
    pub foil: Feedback,
}

impl GuessRank {
    /// Rank derived from an explicit partition, see [`SolutionCandidates::partition`]
    ///
    /// # Panics
    /// Panics if `parts` is empty
    #[must_use]
    pub fn from_partitions(guess: Word, parts: &[(Feedback, SolutionCandidates)]) -> Self {
        let mut worst: Option<(Feedback, usize)> = None;
        for (feedback, part) in parts {
            if worst.is_none_or(|(_, size)| part.len() > size) {
                worst = Some((*feedback, part.len()));
            }
        }
        let (foil, size) = worst.expect("partition of a non-empty set has parts");
        Self {
            guess,
            rank: Rank::new(size, parts.len()),
            foil,
        }
    }
}

/// Rank `guess` against the candidate solutions
///
/// Equivalent to [`GuessRank::from_partitions`] over
/// [`SolutionCandidates::partition`], counting parts instead of building them.
///
/// # Panics
/// Panics if there are no solutions
#[must_use]
pub fn rank_guess(solutions: &SolutionCandidates, guess: &Word) -> GuessRank {
    let mut counts: FxHashMap<Feedback, usize> = FxHashMap::default();
    for solution in solutions.iter() {
        *counts.entry(feedback_for(guess, &solution)).or_insert(0) += 1;
    }

    let total: usize = counts.values().sum();
    assert_eq!(total, solutions.len(), "feedback groups lost solutions");

    let (foil, worst) = counts
        .iter()
        .map(|(&feedback, &count)| (feedback, count))
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(&a.0)))
        .expect("rank needs at least one solution");
    assert!(worst > 0, "rank of {guess} is zero");

    GuessRank {
        guess: *guess,
        rank: Rank::new(worst, counts.len()),
        foil,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn solutions(list: &[&str]) -> SolutionCandidates {
        SolutionCandidates::new(Variant::new("test", 5), list.iter().map(|w| word(w))).unwrap()
    }

    #[test]
    fn rank_orders_by_worst_then_partitions() {
        assert!(Rank::new(1, 3) < Rank::new(2, 10));
        assert!(Rank::new(2, 10) < Rank::new(2, 3));
        assert_eq!(Rank::new(4, 2), Rank::new(4, 2));
    }

    #[test]
    fn score_matches_order() {
        let ranks = [Rank::new(1, 3), Rank::new(2, 10), Rank::new(2, 3), Rank::new(7, 1)];
        for pair in ranks.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].score() < pair[1].score());
        }
    }

    #[test]
    fn score_decodes() {
        for rank in [Rank::new(1, 3), Rank::new(168, 132), Rank::new(2, 1), Rank::new(1, 2315)] {
            assert_eq!(Rank::try_from(rank.score()).unwrap(), rank);
        }
        assert!(Rank::try_from(3.0).is_err());
        assert!(Rank::try_from(0.5).is_err());
        assert!(Rank::try_from(2.7).is_err());
        assert!(Rank::try_from(f64::NAN).is_err());
    }

    #[test]
    fn rank_serializes_as_number() {
        let json = serde_json::to_string(&Rank::new(1, 3)).unwrap();
        assert_eq!(json, "1.25");
        let back: Rank = serde_json::from_str("1.25").unwrap();
        assert_eq!(back, Rank::new(1, 3));
    }

    #[test]
    fn ghost_ranks_one() {
        let candidates = solutions(&["close", "pound", "ghost"]);
        let ranked = rank_guess(&candidates, &word("ghost"));
        assert_eq!(ranked.rank, Rank::new(1, 3));
        // All parts have one word, the first in partition order is the foil
        assert_eq!(ranked.foil.to_string(), "bbybb");
    }

    #[test]
    fn uninformative_guess_keeps_everything() {
        let candidates = solutions(&["crane", "crate", "grate"]);
        let ranked = rank_guess(&candidates, &word("zzzzz"));
        assert_eq!(ranked.rank, Rank::new(3, 1));
        assert_eq!(ranked.foil.to_string(), "bbbbb");
    }

    #[test]
    fn counting_matches_partition() {
        let list = [
            "crane", "crate", "grate", "irate", "slate", "speed", "abide", "erase", "steed",
            "eerie", "geese", "close", "pound", "ghost",
        ];
        let candidates = solutions(&list);
        for guess in list.iter().chain(&["zzzzz", "eerie", "aeros"]) {
            let guess = word(guess);
            let counted = rank_guess(&candidates, &guess);
            let parts = candidates.partition(&guess);
            assert_eq!(counted, GuessRank::from_partitions(guess, &parts), "{guess}");
        }
    }
}
