//! Benchmark command
//!
//! Plays out every solution of a context and reports how many turns it took.

use super::solve::play_out;
use crate::core::Word;
use crate::error::Result;
use crate::solver::Solver;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Which solutions to play and in what order
#[derive(Debug, Clone, Copy, Default)]
pub struct BenchmarkConfig {
    /// Shuffle seed, random when `None`
    pub seed: Option<u64>,
    /// Play at most this many solutions
    pub limit: Option<usize>,
}

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub seed: u64,
    pub total_words: usize,
    pub total_turns: usize,
    pub average_turns: f64,
    pub min_turns: usize,
    pub max_turns: usize,
    /// Turns taken to number of solutions
    pub distribution: BTreeMap<usize, usize>,
    /// Solutions that took `max_turns`
    pub hardest: Vec<Word>,
    pub duration: Duration,
}

/// Play out the solver's solutions in shuffled order
///
/// The solver is reset before each game.
///
/// # Errors
/// Returns the first play-out error.
pub fn run_benchmark(solver: &mut Solver, config: BenchmarkConfig) -> Result<BenchmarkResult> {
    solver.reset();
    let seed = config.seed.unwrap_or_else(rand::random);
    let mut words = solver.solutions().to_vec();
    words.shuffle(&mut StdRng::seed_from_u64(seed));
    if let Some(limit) = config.limit {
        words.truncate(limit);
    }
    info!("benchmark of {} solutions with seed {seed}", words.len());

    let start = Instant::now();
    let mut distribution = BTreeMap::new();
    let mut hardest = Vec::new();
    let mut total_turns = 0;
    let mut max_turns = 0;

    for word in &words {
        solver.reset();
        let turns = play_out(solver, Some(word))?.turns();

        total_turns += turns;
        *distribution.entry(turns).or_insert(0) += 1;
        if turns > max_turns {
            max_turns = turns;
            hardest.clear();
        }
        if turns == max_turns {
            hardest.push(*word);
        }
    }
    solver.reset();
    hardest.sort_unstable();

    let total_words = words.len();
    Ok(BenchmarkResult {
        seed,
        total_words,
        total_turns,
        average_turns: if total_words == 0 {
            0.0
        } else {
            total_turns as f64 / total_words as f64
        },
        min_turns: distribution.keys().next().copied().unwrap_or(0),
        max_turns,
        distribution,
        hardest,
        duration: start.elapsed(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{GuessCandidates, SolutionCandidates};
    use crate::core::{Context, Mode};
    use crate::solver::{Parallelism, SearchOptions};

    const GUESSES: &[&str] = &[
        "crane", "crate", "grate", "irate", "slate", "plate", "skate", "state", "spate", "close",
        "pound", "ghost", "fight", "might", "night", "right", "sight", "tight", "light", "magic",
    ];
    const SOLUTIONS: &[&str] = &[
        "crate", "grate", "irate", "slate", "plate", "skate", "state", "spate", "fight", "might",
        "night", "right",
    ];

    fn solver() -> Solver {
        let context = Context::new("new_york_times", Mode::Smart, None).unwrap();
        let words = |list: &[&str]| -> Vec<Word> {
            list.iter().map(|w| Word::new(w).unwrap()).collect()
        };
        let guesses = GuessCandidates::explicit(context.variant.clone(), words(GUESSES)).unwrap();
        let solutions = SolutionCandidates::new(context.variant.clone(), words(SOLUTIONS)).unwrap();
        let options = SearchOptions {
            parallelism: Parallelism::Off,
            progress: false,
        };
        Solver::new(context, guesses, solutions, None, options)
    }

    #[test]
    fn benchmark_plays_every_solution() {
        let mut solver = solver();
        let result = run_benchmark(&mut solver, BenchmarkConfig::default()).unwrap();

        assert_eq!(result.total_words, SOLUTIONS.len());
        assert_eq!(result.distribution.values().sum::<usize>(), SOLUTIONS.len());
        assert!(result.min_turns >= 1);
        assert!(result.average_turns >= result.min_turns as f64);
        assert!(result.average_turns <= result.max_turns as f64);
        assert_eq!(result.hardest.len(), result.distribution[&result.max_turns]);
        // The solver is left at the start of a game
        assert_eq!(solver.solutions().len(), SOLUTIONS.len());
    }

    #[test]
    fn benchmark_is_deterministic_for_seed() {
        let mut solver = solver();
        let config = BenchmarkConfig {
            seed: Some(7),
            limit: Some(5),
        };
        let first = run_benchmark(&mut solver, config).unwrap();
        let second = run_benchmark(&mut solver, config).unwrap();

        assert_eq!(first.seed, 7);
        assert_eq!(first.total_words, 5);
        assert_eq!(first.distribution, second.distribution);
        assert_eq!(first.hardest, second.hardest);
    }

    #[test]
    fn benchmark_with_zero_limit() {
        let mut solver = solver();
        let config = BenchmarkConfig {
            seed: Some(1),
            limit: Some(0),
        };
        let result = run_benchmark(&mut solver, config).unwrap();
        assert_eq!(result.total_words, 0);
        assert_eq!(result.min_turns, 0);
        assert!(result.hardest.is_empty());
    }
}
