//! Candidate guesses
//!
//! A variant either ships an explicit list of accepted guesses, or accepts
//! any string of the right length. Both shapes support dominated-guess
//! elimination and enumeration in alphabetical order.

use super::set::CandidateSet;
use super::word_set::WordSet;
use crate::core::{LetterSet, Variant, Word};
use crate::error::Result;
use std::sync::Arc;

/// Words that may be played as the next guess
#[derive(Debug, Clone)]
pub enum GuessCandidates {
    /// An explicit accepted-guess list
    Explicit(CandidateSet),
    /// Every string of the variant's length, minus words using `excluded` letters
    Unconstrained {
        variant: Arc<Variant>,
        excluded: LetterSet,
    },
}

impl GuessCandidates {
    /// # Errors
    /// Returns `Error::InvalidWord` if a word does not have the variant's length.
    pub fn explicit(variant: Variant, words: impl IntoIterator<Item = Word>) -> Result<Self> {
        CandidateSet::new(variant, words).map(Self::Explicit)
    }

    #[must_use]
    pub fn unconstrained(variant: Variant) -> Self {
        Self::Unconstrained {
            variant: Arc::new(variant),
            excluded: LetterSet::new(),
        }
    }

    #[must_use]
    pub fn variant(&self) -> &Variant {
        match self {
            Self::Explicit(set) => set.variant(),
            Self::Unconstrained { variant, .. } => variant,
        }
    }

    /// Number of candidate guesses, saturating for huge unconstrained sets
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Explicit(set) => set.len(),
            Self::Unconstrained { variant, excluded } => excluded
                .complement()
                .len()
                .saturating_pow(variant.word_length as u32),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        match self {
            Self::Explicit(set) => set.contains(word),
            Self::Unconstrained { variant, excluded } => {
                word.len() == variant.word_length
                    && word.letter_set().iter().all(|letter| !excluded.contains(letter))
            }
        }
    }

    /// Remove guesses that can never beat a retained twin
    ///
    /// A guess using `k` excluded letters is dropped when another candidate
    /// matches it on every position holding a non-excluded letter and uses
    /// fewer than `k` excluded letters. Guesses made only of excluded letters
    /// are always dropped. Returns the number of guesses removed.
    pub fn eliminate_dominated(&mut self, excluded: LetterSet) -> usize {
        match self {
            Self::Explicit(set) => eliminate_in_set(set, excluded),
            Self::Unconstrained {
                variant,
                excluded: current,
            } => {
                let merged = current.union(excluded);
                if merged == *current || merged == LetterSet::all() {
                    return 0;
                }
                let before = included_count(*current).saturating_pow(variant.word_length as u32);
                *current = merged;
                before - included_count(merged).saturating_pow(variant.word_length as u32)
            }
        }
    }

    /// Random-access view of the guesses in alphabetical order
    #[must_use]
    pub fn pool(&self) -> GuessPool {
        match self {
            Self::Explicit(set) => GuessPool::Listed(set.to_vec()),
            Self::Unconstrained { variant, excluded } => GuessPool::Enumerated {
                letters: excluded.complement().iter().collect(),
                word_length: variant.word_length,
            },
        }
    }
}

fn included_count(excluded: LetterSet) -> usize {
    excluded.complement().len()
}

fn eliminate_in_set(set: &mut CandidateSet, excluded: LetterSet) -> usize {
    if excluded.is_empty() {
        return 0;
    }
    set.refresh();

    let length = set.variant().word_length;
    let index = set.index();
    let capacity = index.len();

    let mut suspects = WordSet::empty(capacity);
    for letter in excluded.iter() {
        suspects.union_with(index.containing(letter));
    }
    suspects.intersect_with(set.members());

    // by_count[k] holds members using exactly k excluded letters
    let mut by_count = vec![WordSet::empty(capacity); length + 1];
    for i in &suspects {
        let word = set.word(i);
        let count = (0..length)
            .filter(|&position| excluded.contains(word.index_at(position)))
            .count();
        by_count[count].insert(i);
    }

    let mut removed = by_count[length].clone();
    let mut at_least = by_count[length].clone();

    for count in (1..length).rev() {
        at_least.union_with(&by_count[count]);

        for i in &by_count[count] {
            let word = set.word(i);
            let mut superior = set.members().clone();
            for position in 0..length {
                let letter = word.index_at(position);
                if !excluded.contains(letter) {
                    superior.intersect_with(index.with_letter_at(position, letter));
                }
            }
            superior.difference_with(&at_least);

            if !superior.is_empty() {
                removed.insert(i);
            }
        }
    }

    let count = removed.len();
    set.remove_all(&removed);
    count
}

/// Guesses addressable by position, in alphabetical order
#[derive(Debug, Clone)]
pub enum GuessPool {
    Listed(Vec<Word>),
    /// Every word over `letters`, decoded from its position
    Enumerated {
        letters: Vec<usize>,
        word_length: usize,
    },
}

impl GuessPool {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Listed(words) => words.len(),
            Self::Enumerated {
                letters,
                word_length,
            } => letters.len().saturating_pow(*word_length as u32),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The guess at position `i`
    ///
    /// # Panics
    /// Panics if `i` is out of range
    #[must_use]
    pub fn get(&self, i: usize) -> Word {
        match self {
            Self::Listed(words) => words[i],
            Self::Enumerated {
                letters,
                word_length,
            } => {
                assert!(i < self.len(), "guess position out of range");
                let base = letters.len();
                let mut digits = [0usize; crate::core::MAX_WORD_LEN];
                let mut rest = i;
                for slot in digits[..*word_length].iter_mut().rev() {
                    *slot = letters[rest % base];
                    rest /= base;
                }
                Word::from_indices(digits[..*word_length].iter().copied())
            }
        }
    }
}
