//! Interactive assistant mode
//!
//! The player types each guess and the feedback the game showed. The solver
//! answers with the remaining solutions and the next best guess.

use crate::core::{Feedback, Word, is_consistent};
use crate::error::Result;
use crate::output::PREVIEW_COUNT;
use crate::output::formatters::{feedback_tiles, guess_with_foil, preview};
use crate::solver::{BestGuesses, Solver, rank_guess};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run the assistant until the game is won, decided, or input ends
///
/// # Errors
///
/// Returns an error on I/O failure or if the search fails.
pub fn run_interactive<R: BufRead, W: Write>(
    solver: &mut Solver,
    input: &mut R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "There are {} possible guesses.", solver.guesses().len())?;
    writeln!(output, "There are {} possible solutions.", solver.solutions().len())?;

    let mut best = solver.best_guesses()?;
    write_best(output, &best)?;
    writeln!(output, "Best starting word: {}", best.first().0.as_str().bright_green().bold())?;
    writeln!(output, "Words remaining: {}", solver.solutions().len())?;
    writeln!(output, "Rank: {} Worst case: {}\n", best.rank, best.first().1)?;

    loop {
        let Some(guess) = ask_word(solver, input, output)? else {
            return Ok(());
        };
        let Some(feedback) = ask_feedback(&guess, input, output)? else {
            return Ok(());
        };
        writeln!(output, "{}", feedback_tiles(&guess, feedback))?;

        if feedback.is_perfect() {
            writeln!(output, "{}", "Success!".green().bold())?;
            return Ok(());
        }

        let before = solver.solutions().len();
        solver.play(guess, feedback);
        let solutions = solver.solutions();

        writeln!(output, "Words remaining: {}", solutions.len())?;
        writeln!(output, "{}\n", preview(solutions.iter(), PREVIEW_COUNT))?;

        match solutions.len() {
            0 => {
                writeln!(output, "{}", "There are no possible remaining solutions.".red())?;
                return Ok(());
            }
            1 | 2 => {
                let mut remaining = solutions.iter();
                if let Some(next) = remaining.next() {
                    let ranked = rank_guess(solutions, &next);
                    writeln!(output, "Best next guess: {}", guess_with_foil(&next, ranked.foil))?;
                }
                if let Some(failing) = remaining.next() {
                    let ranked = rank_guess(solutions, &failing);
                    writeln!(output, "Failing guess: {}", guess_with_foil(&failing, ranked.foil))?;
                    continue;
                }
                return Ok(());
            }
            _ => {}
        }

        // An unchanged set keeps the previous best guesses
        if solutions.len() != before {
            best = solver.best_guesses()?;
            write_best(output, &best)?;
        }
        let (next, foil) = best.first();
        writeln!(output, "Best next guess: {}", next.as_str().bright_green().bold())?;
        writeln!(output, "Rank: {} Worst case: {foil}\n", best.rank)?;
    }
}

fn write_best<W: Write>(output: &mut W, best: &BestGuesses) -> Result<()> {
    let lines = best.iter().map(|(guess, foil)| guess_with_foil(&guess, foil));
    writeln!(output, "{}\n", preview(lines, PREVIEW_COUNT))?;
    Ok(())
}

/// Read a trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(prompt: &str, input: &mut R, output: &mut W) -> Result<Option<String>> {
    write!(output, "{prompt}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn ask_word<R: BufRead, W: Write>(
    solver: &Solver,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Word>> {
    let length = solver.context().word_length();
    loop {
        let Some(text) = read_line("Word", input, output)? else {
            return Ok(None);
        };

        let word = match Word::with_length(&text, length) {
            Ok(word) => word,
            Err(e) => {
                writeln!(output, "{text:?} is not a {length} letter word ({e}). Please enter word again.")?;
                continue;
            }
        };

        if solver.guesses().contains(&word) {
            return Ok(Some(word));
        }

        let prompt = format!("{text:?} is not in the word list. Use this word anyway? (y/n)");
        match read_line(&prompt, input, output)? {
            None => return Ok(None),
            Some(answer) if answer.eq_ignore_ascii_case("y") => return Ok(Some(word)),
            Some(_) => {}
        }
    }
}

fn ask_feedback<R: BufRead, W: Write>(
    guess: &Word,
    input: &mut R,
    output: &mut W,
) -> Result<Option<Feedback>> {
    loop {
        let Some(text) = read_line("Result", input, output)? else {
            return Ok(None);
        };

        match text.parse::<Feedback>() {
            Ok(feedback) if feedback.len() != guess.len() => {
                writeln!(output, "{text:?} is not a valid result. Please enter result again.")?;
            }
            Ok(feedback) if !is_consistent(guess, feedback) || !feedback.is_realizable_shape() => {
                writeln!(output, "{text:?} is not possible for {guess}. Please enter result again.")?;
            }
            Ok(feedback) => return Ok(Some(feedback)),
            Err(_) => {
                writeln!(output, "{text:?} is not a valid result. Please enter result again.")?;
            }
        }
    }
}
