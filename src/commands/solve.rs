//! Automatic play-out of a game
//!
//! Plays against a known solution or, without one, against the foil: the
//! feedback that leaves the most solutions each turn.

use crate::core::{Feedback, Word, feedback_for};
use crate::error::{Error, Result};
use crate::solver::{Rank, Solver, rank_guess};
use log::debug;

/// A single turn of a played-out game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayStep {
    pub guess: Word,
    pub feedback: Feedback,
    pub rank: Rank,
    pub solutions_before: usize,
    pub solutions_after: usize,
}

/// Result of playing out a game
#[derive(Debug, Clone)]
pub struct PlayResult {
    /// `None` when played against the foil
    pub solution: Option<Word>,
    pub steps: Vec<PlayStep>,
}

impl PlayResult {
    #[must_use]
    pub fn turns(&self) -> usize {
        self.steps.len()
    }

    /// The word that was finally guessed
    #[must_use]
    pub fn answer(&self) -> Option<Word> {
        self.steps
            .last()
            .filter(|step| step.feedback.is_perfect())
            .map(|step| step.guess)
    }
}

/// Pick the next guess with its rank and worst-case feedback
///
/// With one or two solutions left the first of them is guessed. Otherwise
/// the first of the best guesses.
///
/// # Errors
/// Returns search errors, `Error::NoSolutions` when nothing is left.
pub fn next_guess(solver: &mut Solver) -> Result<(Word, Rank, Feedback)> {
    let solutions = solver.solutions();
    if solutions.len() <= 2 {
        let guess = solutions.iter().next().ok_or(Error::NoSolutions)?;
        let ranked = rank_guess(solutions, &guess);
        return Ok((guess, ranked.rank, ranked.foil));
    }

    let best = solver.best_guesses()?;
    let (guess, foil) = best.first();
    Ok((guess, best.rank, foil))
}

/// Play the game from the solver's current position until it is won
///
/// # Errors
/// Returns `Error::InvalidWordList` if `solution` is not a remaining
/// candidate, `Error::NoProgress` if a guess removes no solution, and any
/// search error.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::commands::{GameSetup, build_solver, play_out};
/// use wordle_minimax::core::{Context, Mode, Word};
///
/// let context = Context::new("new_york_times", Mode::Smart, None).unwrap();
/// let mut solver = build_solver(context, &GameSetup::default()).unwrap();
/// let result = play_out(&mut solver, Some(&Word::new("crane").unwrap())).unwrap();
/// println!("Solved in {} turns", result.turns());
/// ```
pub fn play_out(solver: &mut Solver, solution: Option<&Word>) -> Result<PlayResult> {
    if let Some(solution) = solution
        && !solver.solutions().contains(solution)
    {
        return Err(Error::InvalidWordList(format!(
            "{solution} is not a remaining solution"
        )));
    }

    let mut steps = Vec::new();
    loop {
        let solutions_before = solver.solutions().len();
        let (guess, rank, foil) = next_guess(solver)?;
        let feedback = solution.map_or(foil, |solution| feedback_for(&guess, solution));

        solver.play(guess, feedback);
        let solutions_after = solver.solutions().len();
        debug!("play {guess} ({feedback}): {solutions_before} -> {solutions_after}");

        steps.push(PlayStep {
            guess,
            feedback,
            rank,
            solutions_before,
            solutions_after,
        });

        if feedback.is_perfect() {
            return Ok(PlayResult {
                solution: solution.copied(),
                steps,
            });
        }
        if solutions_after >= solutions_before {
            return Err(Error::NoProgress { guess });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::{GuessCandidates, SolutionCandidates};
    use crate::core::{Context, Mode};
    use crate::solver::{Parallelism, SearchOptions};

    const WORDS: &[&str] = &[
        "crane", "crate", "grate", "irate", "slate", "plate", "skate", "state", "spate", "close",
        "pound", "ghost", "fight", "might", "night", "right", "sight", "tight", "light",
    ];

    fn solver() -> Solver {
        let context = Context::new("new_york_times", Mode::Naive, None).unwrap();
        let words: Vec<Word> = WORDS.iter().map(|w| Word::new(w).unwrap()).collect();
        let guesses = GuessCandidates::explicit(context.variant.clone(), words.clone()).unwrap();
        let solutions = SolutionCandidates::new(context.variant.clone(), words).unwrap();
        let options = SearchOptions {
            parallelism: Parallelism::Off,
            progress: false,
        };
        Solver::new(context, guesses, solutions, None, options)
    }

    #[test]
    fn play_out_solves_every_solution() {
        let mut solver = solver();
        for text in WORDS {
            let solution = Word::new(text).unwrap();
            solver.reset();
            let result = play_out(&mut solver, Some(&solution)).unwrap();

            assert_eq!(result.answer(), Some(solution));
            for step in &result.steps {
                assert!(step.solutions_after <= step.solutions_before);
                assert!(step.solutions_after >= 1);
            }
        }
    }

    #[test]
    fn play_out_against_foil() {
        let mut solver = solver();
        let result = play_out(&mut solver, None).unwrap();

        assert!(result.solution.is_none());
        let answer = result.answer().unwrap();
        assert!(WORDS.contains(&answer.as_str()));

        // The first turn leaves exactly the worst case of the best guess
        let first = &result.steps[0];
        assert_eq!(first.solutions_after, first.rank.worst());
    }

    #[test]
    fn play_out_rejects_unknown_solution() {
        let mut solver = solver();
        let result = play_out(&mut solver, Some(&Word::new("zebra").unwrap()));
        assert!(matches!(result, Err(Error::InvalidWordList(_))));
    }

    #[test]
    fn two_solutions_guess_the_first() {
        let mut solver = solver();
        let guess = Word::new("pound").unwrap();
        solver.play(guess, Feedback::from_marks(&[crate::core::Mark::Absent; 5]));
        while solver.solutions().len() > 2 {
            let (guess, _, foil) = next_guess(&mut solver).unwrap();
            solver.play(guess, foil);
        }

        let first = solver.solutions().iter().next().unwrap();
        let (guess, rank, _) = next_guess(&mut solver).unwrap();
        assert_eq!(guess, first);
        assert_eq!(rank.worst(), 1);
    }
}
