//! Game session driving the search turn by turn

use super::search::{BestGuesses, CacheSlot, SearchOptions, best_guesses};
use crate::cache::ResultCache;
use crate::candidates::{GuessCandidates, SolutionCandidates};
use crate::core::{Context, Feedback, Turn, Word};
use crate::error::Result;

/// One game in a fixed context
///
/// The guess candidates stay fixed for the whole game, each search works on
/// its own copy. The solution candidates shrink as turns are played.
pub struct Solver {
    context: Context,
    guesses: GuessCandidates,
    initial_solutions: SolutionCandidates,
    solutions: SolutionCandidates,
    turns: Vec<Turn>,
    cache: Option<ResultCache>,
    options: SearchOptions,
}

impl Solver {
    #[must_use]
    pub fn new(
        context: Context,
        guesses: GuessCandidates,
        solutions: SolutionCandidates,
        cache: Option<ResultCache>,
        options: SearchOptions,
    ) -> Self {
        Self {
            context,
            guesses,
            initial_solutions: solutions.clone(),
            solutions,
            turns: Vec::new(),
            cache,
            options,
        }
    }

    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    #[must_use]
    pub const fn guesses(&self) -> &GuessCandidates {
        &self.guesses
    }

    /// Solutions still consistent with every turn played
    #[must_use]
    pub const fn solutions(&self) -> &SolutionCandidates {
        &self.solutions
    }

    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Best guesses for the current position
    ///
    /// # Errors
    /// See [`best_guesses`].
    pub fn best_guesses(&mut self) -> Result<BestGuesses> {
        let mut guesses = self.guesses.clone();
        let cache = self.cache.as_mut().map(|cache| CacheSlot {
            cache,
            turns: &self.turns,
        });
        best_guesses(&mut guesses, &self.solutions, &self.options, cache)
    }

    /// Record a turn and drop solutions it rules out
    pub fn play(&mut self, guess: Word, feedback: Feedback) {
        self.solutions.restrict(&guess, feedback);
        self.turns.push((guess, feedback));
    }

    /// Back to the start of the game
    pub fn reset(&mut self) {
        self.solutions = self.initial_solutions.clone();
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Mode, feedback_for};
    use crate::solver::Parallelism;

    fn setup() -> Solver {
        let context = Context::new("new_york_times", Mode::Smart, None).unwrap();
        let words = |list: &[&str]| -> Vec<Word> { list.iter().map(|w| Word::new(w).unwrap()).collect() };
        let guesses = GuessCandidates::explicit(
            context.variant.clone(),
            words(&["crane", "slate", "irate", "crate", "grate", "magic"]),
        )
        .unwrap();
        let solutions =
            SolutionCandidates::new(context.variant.clone(), words(&["irate", "crate", "grate"]))
                .unwrap();
        let options = SearchOptions {
            parallelism: Parallelism::Off,
            progress: false,
        };
        Solver::new(context, guesses, solutions, None, options)
    }

    #[test]
    fn best_guesses_from_start() {
        let mut solver = setup();
        let best = solver.best_guesses().unwrap();
        assert_eq!(best.rank.worst(), 1);
        assert_eq!(best.guesses, [Word::new("magic").unwrap()]);
        // The guess list is untouched by elimination inside the search
        assert_eq!(solver.guesses().len(), 6);
    }

    #[test]
    fn play_restricts_and_records() {
        let mut solver = setup();
        let guess = Word::new("crane").unwrap();
        let answer = Word::new("irate").unwrap();
        solver.play(guess, feedback_for(&guess, &answer));

        assert_eq!(solver.turns().len(), 1);
        assert_eq!(solver.solutions().to_vec(), [Word::new("grate").unwrap(), answer]);
    }

    #[test]
    fn reset_restores_start() {
        let mut solver = setup();
        let guess = Word::new("crate").unwrap();
        solver.play(guess, Feedback::perfect(5));
        assert_eq!(solver.solutions().len(), 1);

        solver.reset();
        assert_eq!(solver.solutions().len(), 3);
        assert!(solver.turns().is_empty());
    }
}
