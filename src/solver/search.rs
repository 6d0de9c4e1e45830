//! Best-guess search
//!
//! Every candidate guess is ranked against the candidate solutions and the
//! guesses sharing the lowest rank are kept. Guesses that could themselves be
//! the answer are ranked first. If one of them already leaves a single
//! solution in the worst case, nothing else can beat it and the search stops.

use super::progress::{Progress, run_with_progress};
use super::rank::{GuessRank, Rank, rank_guess};
use crate::cache::ResultCache;
use crate::candidates::{GuessCandidates, SolutionCandidates};
use crate::core::{Feedback, Turn, Word};
use crate::error::{Error, Result};
use log::debug;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Instant;

/// Guesses per rayon work item
const MIN_CHUNK: usize = 64;

/// How guess ranking is spread across threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Parallelism {
    /// Rank on the calling thread
    Off,
    /// Use the global rayon pool
    #[default]
    Auto,
    /// Use a dedicated pool of this many threads
    Threads(NonZeroUsize),
}

impl FromStr for Parallelism {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            n => n
                .parse::<NonZeroUsize>()
                .map(Self::Threads)
                .map_err(|_| format!("expected off, auto or a thread count, got {s:?}")),
        }
    }
}

impl fmt::Display for Parallelism {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => f.write_str("off"),
            Self::Auto => f.write_str("auto"),
            Self::Threads(n) => write!(f, "{n}"),
        }
    }
}

/// Knobs for [`best_guesses`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub parallelism: Parallelism,
    /// Draw a progress bar on a terminal
    pub progress: bool,
}

/// The best guesses for a position, each with the feedback of its worst case
#[derive(Debug, Clone, PartialEq)]
pub struct BestGuesses {
    pub rank: Rank,
    /// Alphabetical
    pub guesses: Vec<Word>,
    /// `foils[i]` belongs to `guesses[i]`
    pub foils: Vec<Feedback>,
}

impl BestGuesses {
    /// Build from guesses and foils, sorting by guess
    ///
    /// # Panics
    /// Panics if the lists differ in length or are empty
    #[must_use]
    pub fn new(rank: Rank, pairs: impl IntoIterator<Item = (Word, Feedback)>) -> Self {
        let sorted: BTreeMap<Word, Feedback> = pairs.into_iter().collect();
        assert!(!sorted.is_empty(), "best guesses need at least one guess");
        let (guesses, foils) = sorted.into_iter().unzip();
        Self {
            rank,
            guesses,
            foils,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guesses.is_empty()
    }

    /// The alphabetically first guess and its foil
    #[must_use]
    pub fn first(&self) -> (Word, Feedback) {
        (self.guesses[0], self.foils[0])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Word, Feedback)> + '_ {
        self.guesses.iter().copied().zip(self.foils.iter().copied())
    }
}

/// Access to the cache for one search
pub struct CacheSlot<'a> {
    pub cache: &'a mut ResultCache,
    /// Turns played so far, the cache key
    pub turns: &'a [Turn],
}

/// Find the guesses with the lowest minimax rank
///
/// Dominated guesses are removed from `guesses` first, using the letters no
/// remaining solution contains. With a cache slot the result is looked up by
/// the turns played and saved after a miss.
///
/// # Errors
/// Returns `Error::MismatchedContext` when the sets belong to different
/// variants, `Error::NoSolutions` or `Error::NoGuesses` when either set is
/// empty, and cache or thread-pool errors.
pub fn best_guesses(
    guesses: &mut GuessCandidates,
    solutions: &SolutionCandidates,
    options: &SearchOptions,
    mut cache: Option<CacheSlot<'_>>,
) -> Result<BestGuesses> {
    if guesses.variant() != solutions.variant() {
        return Err(Error::MismatchedContext {
            guesses: guesses.variant().clone(),
            solutions: solutions.variant().clone(),
        });
    }
    if solutions.is_empty() {
        return Err(Error::NoSolutions);
    }

    let start = Instant::now();
    let before = guesses.len();
    let removed = guesses.eliminate_dominated(solutions.excluded_letters());
    debug!(
        "eliminated {removed} of {before} guesses in {:.3?}",
        start.elapsed()
    );

    if guesses.is_empty() {
        return Err(Error::NoGuesses);
    }

    if let Some(slot) = cache.as_mut() {
        if let Some(hit) = slot.cache.load(slot.turns)? {
            debug!("cache hit after {} turns", slot.turns.len());
            return Ok(hit);
        }
        debug!("cache miss after {} turns", slot.turns.len());
    }

    let start = Instant::now();
    let best = search(guesses, solutions, options)?;
    debug!(
        "ranked {} guesses against {} solutions in {:.3?}, best {:?}",
        guesses.len(),
        solutions.len(),
        start.elapsed(),
        best.rank
    );

    if let Some(slot) = cache {
        if solutions.len() >= 3 {
            slot.cache.save(slot.turns, &best)?;
        }
    }

    Ok(best)
}

fn search(
    guesses: &GuessCandidates,
    solutions: &SolutionCandidates,
    options: &SearchOptions,
) -> Result<BestGuesses> {
    let pool = guesses.pool();
    let likely: Vec<Word> = solutions.iter().filter(|w| guesses.contains(w)).collect();

    let work = |progress: &Progress| -> Result<Best> {
        let mut best = rank_all(
            likely.len(),
            |i| Some(likely[i]),
            solutions,
            options.parallelism,
            progress,
        )?;

        if best.rank.is_none_or(|rank| rank.worst() > 1) {
            let rest = rank_all(
                pool.len(),
                |i| Some(pool.get(i)).filter(|word| !solutions.contains(word)),
                solutions,
                options.parallelism,
                progress,
            )?;
            best = best.merge(rest);
        }
        Ok(best)
    };

    let best = run_with_progress(pool.len(), options.progress, work)?;
    best.finish(solutions).ok_or(Error::NoGuesses)
}

fn rank_all<F>(
    len: usize,
    guess_at: F,
    solutions: &SolutionCandidates,
    parallelism: Parallelism,
    progress: &Progress,
) -> Result<Best>
where
    F: Fn(usize) -> Option<Word> + Sync,
{
    let rank = |guess: Word| {
        progress.tick();
        rank_guess(solutions, &guess)
    };

    let parallel = || {
        (0..len)
            .into_par_iter()
            .with_min_len(MIN_CHUNK)
            .filter_map(&guess_at)
            .map(rank)
            .fold(Best::default, Best::offer)
            .reduce(Best::default, Best::merge)
    };

    match parallelism {
        Parallelism::Off => Ok((0..len)
            .filter_map(&guess_at)
            .map(rank)
            .fold(Best::default(), Best::offer)),
        Parallelism::Auto => Ok(parallel()),
        Parallelism::Threads(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads.get())
                .build()?;
            Ok(pool.install(parallel))
        }
    }
}

/// Running minimum over ranked guesses
///
/// Guesses are kept in a map so merging partial results is order independent.
#[derive(Debug, Default)]
struct Best {
    rank: Option<Rank>,
    guesses: BTreeMap<Word, Feedback>,
}

impl Best {
    fn offer(mut self, ranked: GuessRank) -> Self {
        match self.rank.map(|rank| ranked.rank.cmp(&rank)) {
            Some(std::cmp::Ordering::Greater) => {}
            Some(std::cmp::Ordering::Equal) => {
                self.guesses.insert(ranked.guess, ranked.foil);
            }
            Some(std::cmp::Ordering::Less) | None => {
                self.rank = Some(ranked.rank);
                self.guesses.clear();
                self.guesses.insert(ranked.guess, ranked.foil);
            }
        }
        self
    }

    fn merge(mut self, mut other: Self) -> Self {
        match (self.rank, other.rank) {
            (_, None) => self,
            (None, Some(_)) => other,
            (Some(mine), Some(theirs)) => match mine.cmp(&theirs) {
                std::cmp::Ordering::Less => self,
                std::cmp::Ordering::Greater => other,
                std::cmp::Ordering::Equal => {
                    self.guesses.append(&mut other.guesses);
                    self
                }
            },
        }
    }

    /// Prefer guesses that could be the answer, when any tie for best
    fn finish(self, solutions: &SolutionCandidates) -> Option<BestGuesses> {
        let rank = self.rank?;
        let mut guesses = self.guesses;
        if guesses.keys().any(|guess| solutions.contains(guess)) {
            guesses.retain(|guess, _| solutions.contains(guess));
        }
        Some(BestGuesses::new(rank, guesses))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Variant;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| word(w)).collect()
    }

    fn sets(guesses: &[&str], solutions: &[&str]) -> (GuessCandidates, SolutionCandidates) {
        let variant = Variant::new("test", 5);
        (
            GuessCandidates::explicit(variant.clone(), words(guesses)).unwrap(),
            SolutionCandidates::new(variant, words(solutions)).unwrap(),
        )
    }

    fn run(guesses: &[&str], solutions: &[&str], parallelism: Parallelism) -> BestGuesses {
        let (mut guesses, solutions) = sets(guesses, solutions);
        let options = SearchOptions {
            parallelism,
            progress: false,
        };
        best_guesses(&mut guesses, &solutions, &options, None).unwrap()
    }

    #[test]
    fn parallelism_parses() {
        assert_eq!("off".parse(), Ok(Parallelism::Off));
        assert_eq!("AUTO".parse(), Ok(Parallelism::Auto));
        assert_eq!(
            "4".parse(),
            Ok(Parallelism::Threads(NonZeroUsize::new(4).unwrap()))
        );
        assert!("0".parse::<Parallelism>().is_err());
        assert!("many".parse::<Parallelism>().is_err());
    }

    #[test]
    fn solution_priority_override() {
        // "bongo" separates blade and glade as well as either of them does
        let best = run(
            &["blade", "glade", "bongo", "zzzzz"],
            &["blade", "glade"],
            Parallelism::Off,
        );
        assert_eq!(best.rank, Rank::new(1, 2));
        assert_eq!(best.guesses, words(&["blade", "glade"]));
        assert_eq!(best.foils.len(), best.guesses.len());
    }

    #[test]
    fn tie_prefers_possible_answers() {
        let (_, solutions) = sets(&[], &["blade", "glade"]);
        let ranked = |guess: &str| rank_guess(&solutions, &word(guess));

        let best = Best::default()
            .offer(ranked("bongo"))
            .merge(Best::default().offer(ranked("glade")))
            .offer(ranked("blade"));
        assert_eq!(best.guesses.len(), 3);

        let finished = best.finish(&solutions).unwrap();
        assert_eq!(finished.guesses, words(&["blade", "glade"]));
        assert_eq!(finished.foils[0].to_string(), "bgggg");
    }

    #[test]
    fn ghost_scenario() {
        let best = run(
            &["close", "pound", "ghost"],
            &["close", "pound", "ghost"],
            Parallelism::Off,
        );
        assert_eq!(best.rank, Rank::new(1, 3));
        assert!(best.guesses.contains(&word("ghost")));
    }

    #[test]
    fn non_solution_guess_kept_when_it_alone_is_best() {
        // Against three words sharing "_ight", only "fmnxx" tells all of them apart
        let best = run(
            &["fight", "might", "night", "fmnxx"],
            &["fight", "might", "night"],
            Parallelism::Off,
        );
        assert_eq!(best.rank, Rank::new(1, 3));
        assert_eq!(best.guesses, words(&["fmnxx"]));
    }

    #[test]
    fn sequential_and_parallel_agree() {
        let guesses = [
            "crane", "crate", "grate", "irate", "slate", "speed", "abide", "erase", "steed",
            "eerie", "geese", "close", "pound", "ghost", "fight", "might", "night", "right",
            "sight", "tight", "light", "wight", "bight",
        ];
        let solutions = &guesses[..18];
        let off = run(&guesses, solutions, Parallelism::Off);
        let auto = run(&guesses, solutions, Parallelism::Auto);
        let two = run(
            &guesses,
            solutions,
            Parallelism::Threads(NonZeroUsize::new(2).unwrap()),
        );
        assert_eq!(off, auto);
        assert_eq!(off, two);
    }

    #[test]
    fn mismatched_context_is_rejected() {
        let mut guesses = GuessCandidates::explicit(Variant::new("one", 5), words(&["crane"])).unwrap();
        let solutions = SolutionCandidates::new(Variant::new("two", 5), words(&["crane"])).unwrap();
        let result = best_guesses(&mut guesses, &solutions, &SearchOptions::default(), None);
        assert!(matches!(result, Err(Error::MismatchedContext { .. })));
    }

    #[test]
    fn empty_sets_are_rejected() {
        let (mut guesses, solutions) = sets(&["crane"], &[]);
        let result = best_guesses(&mut guesses, &solutions, &SearchOptions::default(), None);
        assert!(matches!(result, Err(Error::NoSolutions)));

        let (mut guesses, solutions) = sets(&[], &["crane"]);
        let result = best_guesses(&mut guesses, &solutions, &SearchOptions::default(), None);
        assert!(matches!(result, Err(Error::NoGuesses)));
    }

    #[test]
    fn best_guesses_sorted_and_deduplicated() {
        let best = BestGuesses::new(
            Rank::new(1, 2),
            [
                (word("slate"), "bbbbb".parse().unwrap()),
                (word("crane"), "bbbbb".parse().unwrap()),
                (word("slate"), "bbbbb".parse().unwrap()),
            ],
        );
        assert_eq!(best.guesses, words(&["crane", "slate"]));
        assert_eq!(best.first().0, word("crane"));
    }

    #[test]
    fn unconstrained_guesses() {
        let variant = Variant::new("test", 3);
        let mut guesses = GuessCandidates::unconstrained(variant.clone());
        let solutions = SolutionCandidates::new(variant, words(&["abc", "abd", "abe"])).unwrap();
        let best = best_guesses(&mut guesses, &solutions, &SearchOptions::default(), None).unwrap();
        assert_eq!(best.rank.worst(), 1);
        // Letters no solution uses were eliminated from the guesses
        assert!(
            best.guesses
                .iter()
                .all(|g| g.letters().iter().all(|l| b"abcde".contains(l)))
        );
    }
}
