//! Word lists for each game variant
//!
//! Lists live as flat files in the data directory:
//! `word_list_{variant}.txt` holds the accepted guesses and
//! `solutions_{variant}.txt` the possible answers. A guess list consisting of
//! the single line [`ALL_WORDS_TOKEN`] accepts any string of the right length.

pub mod loader;

use crate::candidates::{GuessCandidates, SolutionCandidates};
use crate::core::{Context, MAX_WORD_LEN, Mode, Word, WordError};
use crate::error::{Error, Result};
use log::debug;
use rustc_hash::FxHashSet;
use std::path::{Path, PathBuf};

/// Guess list sentinel meaning every word is accepted
pub const ALL_WORDS_TOKEN: &str = "ALL_WORDS_ARE_VALID_GUESSES";

/// Accepted guesses of a variant
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessList {
    /// Any string over the alphabet
    AllWords,
    Explicit(Vec<Word>),
}

/// Validated word lists of one variant, across all its lengths
#[derive(Debug, Clone)]
pub struct WordLists {
    pub guesses: GuessList,
    pub solutions: Vec<Word>,
}

#[must_use]
pub fn word_list_path(dir: &Path, variant_id: &str) -> PathBuf {
    dir.join(format!("word_list_{variant_id}.txt"))
}

#[must_use]
pub fn solutions_path(dir: &Path, variant_id: &str) -> PathBuf {
    dir.join(format!("solutions_{variant_id}.txt"))
}

impl WordLists {
    /// Load the lists of `variant_id` from `dir`
    ///
    /// # Errors
    /// Returns I/O errors for missing files and the errors of [`WordLists::parse`].
    pub fn load(dir: &Path, variant_id: &str) -> Result<Self> {
        let guesses = loader::read_lines(word_list_path(dir, variant_id))?;
        let solutions = loader::read_lines(solutions_path(dir, variant_id))?;
        Self::parse(&guesses, &solutions)
    }

    /// Validate raw lines
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` for words outside the alphabet and
    /// `Error::InvalidWordList` for duplicates or solutions that are not
    /// accepted guesses.
    pub fn parse(guess_lines: &[String], solution_lines: &[String]) -> Result<Self> {
        let solutions = parse_words(solution_lines, "solutions")?;

        if guess_lines.len() == 1 && guess_lines[0] == ALL_WORDS_TOKEN {
            return Ok(Self {
                guesses: GuessList::AllWords,
                solutions,
            });
        }

        let guesses = parse_words(guess_lines, "word list")?;
        let accepted: FxHashSet<&Word> = guesses.iter().collect();
        if let Some(missing) = solutions.iter().find(|word| !accepted.contains(word)) {
            return Err(Error::InvalidWordList(format!(
                "solution {missing} is not in the word list"
            )));
        }

        Ok(Self {
            guesses: GuessList::Explicit(guesses),
            solutions,
        })
    }

    /// Candidate sets for `context`, keeping only words of its length
    ///
    /// In naive mode every accepted guess is a candidate solution.
    ///
    /// # Errors
    /// Returns `Error::InvalidVariant` for naive mode without an explicit
    /// guess list.
    pub fn candidates(&self, context: &Context) -> Result<(GuessCandidates, SolutionCandidates)> {
        let length = context.word_length();
        let of_length = |words: &[Word]| -> Vec<Word> {
            words.iter().copied().filter(|w| w.len() == length).collect()
        };

        let guesses = match &self.guesses {
            GuessList::AllWords => GuessCandidates::unconstrained(context.variant.clone()),
            GuessList::Explicit(words) => {
                GuessCandidates::explicit(context.variant.clone(), of_length(words))?
            }
        };

        let solutions = match (context.mode, &self.guesses) {
            (Mode::Smart, _) => of_length(&self.solutions),
            (Mode::Naive, GuessList::Explicit(words)) => of_length(words),
            (Mode::Naive, GuessList::AllWords) => {
                return Err(Error::InvalidVariant(format!(
                    "naive mode needs a word list for {}",
                    context.variant.id
                )));
            }
        };

        Ok((
            guesses,
            SolutionCandidates::new(context.variant.clone(), solutions)?,
        ))
    }

    /// Whether `word` is an accepted guess of the given length
    #[must_use]
    pub fn is_valid_guess(&self, word: &Word, length: usize) -> bool {
        word.len() == length
            && match &self.guesses {
                GuessList::AllWords => true,
                GuessList::Explicit(words) => words.binary_search(word).is_ok(),
            }
    }
}

/// Words longer than any variant plays are skipped, their letters still checked
fn parse_words(lines: &[String], what: &str) -> Result<Vec<Word>> {
    let mut words = Vec::with_capacity(lines.len());
    let mut skipped = 0;
    for line in lines {
        if line.len() <= MAX_WORD_LEN {
            words.push(Word::new(line)?);
            continue;
        }
        if let Some(letter) = line.chars().find(|c| !c.is_ascii_alphabetic()) {
            return Err(WordError::IllegalLetter {
                word: line.clone(),
                letter,
            }
            .into());
        }
        skipped += 1;
    }
    if skipped > 0 {
        debug!("{what}: skipped {skipped} words longer than {MAX_WORD_LEN} letters");
    }

    let count = words.len();
    words.sort_unstable();
    words.dedup();
    if words.len() != count {
        return Err(Error::InvalidWordList(format!("{what} contain duplicate words")));
    }
    Ok(words)
}
