//! Guess analysis command
//!
//! Ranks one guess against the remaining solutions and lists its partitions.

use crate::candidates::SolutionCandidates;
use crate::core::{Feedback, Word};
use crate::error::{Error, Result};
use crate::solver::GuessRank;

/// Result of analyzing a guess
#[derive(Debug, Clone)]
pub struct Analysis {
    pub ranked: GuessRank,
    pub total_solutions: usize,
    /// Every partition in feedback order
    pub partitions: Vec<(Feedback, Vec<Word>)>,
}

/// Analyze `guess` against `solutions`
///
/// # Errors
/// Returns `Error::NoSolutions` for an empty solution set and
/// `Error::InvalidWord` if the guess has the wrong length.
pub fn analyze_guess(solutions: &SolutionCandidates, guess: &Word) -> Result<Analysis> {
    if solutions.is_empty() {
        return Err(Error::NoSolutions);
    }
    let guess = Word::with_length(guess.as_str(), solutions.variant().word_length)?;

    let parts = solutions.partition(&guess);
    let ranked = GuessRank::from_partitions(guess, &parts);
    let partitions = parts
        .into_iter()
        .map(|(feedback, part)| (feedback, part.to_vec()))
        .collect();

    Ok(Analysis {
        ranked,
        total_solutions: solutions.len(),
        partitions,
    })
}
