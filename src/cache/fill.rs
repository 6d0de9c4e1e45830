//! Pre-computing the cache for a game context

use super::ResultCache;
use crate::candidates::{GuessCandidates, SolutionCandidates};
use crate::core::{Feedback, Word};
use crate::error::Result;
use crate::solver::{CacheSlot, SearchOptions, best_guesses};
use log::{debug, info};
use std::collections::BTreeSet;

/// Second-turn results computed between writes of the document
pub const FLUSH_EVERY: usize = 10;

/// Counts from a fill run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FillReport {
    /// Best first guesses filled below
    pub first_guesses: usize,
    /// Second-turn results computed and stored
    pub added: usize,
    /// Second-turn results already present
    pub cached: usize,
    /// Partitions of one or two solutions, never stored
    pub trivial: usize,
}

/// Fill the cache with the best first guesses and every second-turn result
///
/// After each first guess the stored feedbacks are checked against the
/// partitions that were computed.
///
/// # Errors
/// Returns search and cache errors, and `Error::CacheIncoherent` if the
/// document disagrees with the computed partitions.
pub fn fill_cache(
    guesses: &GuessCandidates,
    solutions: &SolutionCandidates,
    cache: &mut ResultCache,
    options: &SearchOptions,
) -> Result<FillReport> {
    let first = best_guesses(
        &mut guesses.clone(),
        solutions,
        options,
        Some(CacheSlot {
            cache: &mut *cache,
            turns: &[],
        }),
    )?;

    let mut report = FillReport {
        first_guesses: first.len(),
        ..FillReport::default()
    };

    for guess in &first.guesses {
        let mut computed = BTreeSet::new();
        let mut unsaved = 0;

        let filled = fill_guess(
            guess,
            guesses,
            solutions,
            cache,
            options,
            &mut report,
            &mut computed,
            &mut unsaved,
        );
        if unsaved > 0 {
            cache.flush()?;
        }
        filled?;

        cache.verify_coherent(guess, &computed)?;
        info!("cache for {guess}: {} results", computed.len());
    }

    Ok(report)
}

#[allow(clippy::too_many_arguments)]
fn fill_guess(
    guess: &Word,
    guesses: &GuessCandidates,
    solutions: &SolutionCandidates,
    cache: &mut ResultCache,
    options: &SearchOptions,
    report: &mut FillReport,
    computed: &mut BTreeSet<Feedback>,
    unsaved: &mut usize,
) -> Result<()> {
    for (feedback, part) in solutions.partition(guess) {
        if part.len() <= 2 {
            debug!("cache for {guess} ({feedback}): {} solutions, not cached", part.len());
            report.trivial += 1;
            continue;
        }
        computed.insert(feedback);

        let turns = [(*guess, feedback)];
        if cache.load(&turns)?.is_some() {
            debug!("cache for {guess} ({feedback}): cached");
            report.cached += 1;
            continue;
        }

        let best = best_guesses(&mut guesses.clone(), &part, options, None)?;
        cache.insert(&turns, &best)?;
        info!("cache for {guess} ({feedback}): added {}", best.rank);
        report.added += 1;

        *unsaved += 1;
        if *unsaved >= FLUSH_EVERY {
            cache.flush()?;
            *unsaved = 0;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Context, Mode};
    use std::path::PathBuf;
    use std::time::Duration;

    const WORDS: &[&str] = &[
        "crane", "crate", "grate", "irate", "slate", "plate", "skate", "state", "spate", "close",
        "pound", "ghost", "fight", "might", "night", "right", "sight", "tight", "light",
    ];

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "wordle_minimax_fill_{}_{name}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    fn sets() -> (Context, GuessCandidates, SolutionCandidates) {
        let context = Context::new("new_york_times", Mode::Naive, None).unwrap();
        let words: Vec<Word> = WORDS.iter().map(|w| Word::new(w).unwrap()).collect();
        (
            context.clone(),
            GuessCandidates::explicit(context.variant.clone(), words.clone()).unwrap(),
            SolutionCandidates::new(context.variant, words).unwrap(),
        )
    }

    #[test]
    fn fill_is_coherent_and_idempotent() {
        let (context, guesses, solutions) = sets();
        let dir = temp_dir("idempotent");
        let options = SearchOptions::default();

        let mut cache = ResultCache::open(&dir, &context, Duration::from_secs(1)).unwrap();
        let report = fill_cache(&guesses, &solutions, &mut cache, &options).unwrap();
        assert!(report.first_guesses > 0);
        assert_eq!(report.cached, 0);

        let mut reopened = ResultCache::open(&dir, &context, Duration::from_secs(1)).unwrap();
        let again = fill_cache(&guesses, &solutions, &mut reopened, &options).unwrap();
        assert_eq!(again.added, 0);
        assert_eq!(again.cached, report.added);
        assert_eq!(again.trivial, report.trivial);

        let first = reopened.load(&[]).unwrap().unwrap();
        for guess in &first.guesses {
            let expected: BTreeSet<Feedback> = solutions
                .partition(guess)
                .into_iter()
                .filter(|(_, part)| part.len() > 2)
                .map(|(feedback, _)| feedback)
                .collect();
            assert_eq!(reopened.next_feedbacks(guess).unwrap(), expected);
        }
    }
}
