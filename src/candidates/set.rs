//! Word collection with a lazily rebuilt index
//!
//! A `CandidateSet` is a sorted universe of words, a membership bitset over it
//! and a [`WordIndex`] built for that universe. Restrictions only clear bits.
//! Once the members have shrunk the set is marked stale and the next
//! restriction first compacts the universe and rebuilds the index.
//!
//! Cloning is cheap: the universe and index are shared, only the membership
//! bits are copied. Callers that need to undo a restriction clone first.

use super::index::WordIndex;
use super::word_set::WordSet;
use crate::core::{ALPHABET_SIZE, Feedback, LetterSet, Mark, Variant, Word, WordError};
use crate::error::Result;
use std::sync::Arc;

/// A set of same-length words bound to a game variant
#[derive(Debug, Clone)]
pub struct CandidateSet {
    variant: Arc<Variant>,
    words: Arc<[Word]>,
    members: WordSet,
    index: Arc<WordIndex>,
    stale: bool,
}

impl CandidateSet {
    /// Create a set from a word list
    ///
    /// Words are sorted and duplicates dropped.
    ///
    /// # Errors
    /// Returns `Error::InvalidWord` if a word does not have the variant's length.
    pub fn new(variant: Variant, words: impl IntoIterator<Item = Word>) -> Result<Self> {
        let mut words: Vec<Word> = words.into_iter().collect();
        if let Some(word) = words.iter().find(|w| w.len() != variant.word_length) {
            return Err(WordError::WrongLength {
                word: word.to_string(),
                expected: variant.word_length,
            }
            .into());
        }
        words.sort_unstable();
        words.dedup();

        let index = WordIndex::build(&words, variant.word_length);
        Ok(Self {
            variant: Arc::new(variant),
            members: WordSet::full(words.len()),
            words: words.into(),
            index: Arc::new(index),
            stale: false,
        })
    }

    #[must_use]
    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub(crate) fn shared_variant(&self) -> Arc<Variant> {
        Arc::clone(&self.variant)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words
            .binary_search(word)
            .is_ok_and(|i| self.members.contains(i))
    }

    /// Member words in alphabetical order
    pub fn iter(&self) -> impl Iterator<Item = Word> + '_ {
        self.members.iter().map(|i| self.words[i])
    }

    #[must_use]
    pub fn to_vec(&self) -> Vec<Word> {
        self.iter().collect()
    }

    /// Whether the index still covers words that are no longer members
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        self.stale
    }

    /// Compact the universe to the current members and rebuild the index
    pub fn refresh(&mut self) {
        if !self.stale {
            return;
        }
        let words: Arc<[Word]> = self.iter().collect();
        self.index = Arc::new(WordIndex::build(&words, self.variant.word_length));
        self.members = WordSet::full(words.len());
        self.words = words;
        self.stale = false;
    }

    pub(crate) fn index(&self) -> &WordIndex {
        &self.index
    }

    pub(crate) const fn members(&self) -> &WordSet {
        &self.members
    }

    pub(crate) fn word(&self, i: usize) -> Word {
        self.words[i]
    }

    /// Replace the members, keeping the universe and index
    pub(crate) fn set_members(&mut self, members: WordSet) {
        debug_assert_eq!(members.capacity(), self.words.len());
        self.members = members;
        self.stale = true;
    }

    /// Drop the members in `removed`
    pub(crate) fn remove_all(&mut self, removed: &WordSet) {
        if removed.is_disjoint(&self.members) {
            return;
        }
        self.members.difference_with(removed);
        self.stale = true;
    }

    /// Keep only words consistent with `guess` having received `feedback`
    ///
    /// The index is rebuilt first if earlier restrictions shrank the set.
    ///
    /// # Panics
    /// Panics if the guess or feedback length differs from the variant's
    pub fn restrict(&mut self, guess: &Word, feedback: Feedback) {
        self.refresh();
        self.apply(guess, feedback);
    }

    /// Restriction against the current index, without refreshing
    ///
    /// An index built over a superset of the members gives the same result.
    pub(crate) fn apply(&mut self, guess: &Word, feedback: Feedback) {
        let length = self.variant.word_length;
        assert_eq!(guess.len(), length, "guess length differs from variant");
        assert_eq!(feedback.len(), length, "feedback length differs from variant");

        let before = self.members.len();
        let index = Arc::clone(&self.index);
        let members = &mut self.members;
        let counts = guess.letter_counts();

        let mut hits = [0usize; ALPHABET_SIZE];
        let mut misses = [0usize; ALPHABET_SIZE];

        for (position, mark) in feedback.marks().enumerate() {
            let letter = guess.index_at(position);
            let at_position = index.with_letter_at(position, letter);

            match mark {
                Mark::Correct => {
                    members.intersect_with(at_position);
                    hits[letter] += 1;
                }
                Mark::Present => {
                    members.difference_with(at_position);
                    members.intersect_with(index.containing(letter));
                    hits[letter] += 1;
                }
                Mark::Absent => {
                    members.difference_with(at_position);
                    if counts[letter] == 1 {
                        members.difference_with(index.containing(letter));
                    }
                    misses[letter] += 1;
                }
            }
        }

        for letter in (0..ALPHABET_SIZE).filter(|&letter| counts[letter] > 1) {
            match (hits[letter], misses[letter]) {
                (0, _) => members.difference_with(index.containing(letter)),
                (found, 0) => {
                    for count in 0..found {
                        members.difference_with(index.with_count(letter, count));
                    }
                }
                (found, _) => members.intersect_with(index.with_count(letter, found)),
            }
        }

        if members.len() < before {
            self.stale = true;
        }
    }

    /// Remove every word containing one of `letters`
    pub fn exclude_letters(&mut self, letters: LetterSet) {
        self.refresh();
        let before = self.members.len();
        for letter in letters.iter() {
            self.members.difference_with(self.index.containing(letter));
        }
        if self.members.len() < before {
            self.stale = true;
        }
    }

    /// Letters that occur in at least one member
    #[must_use]
    pub fn letters_present(&self) -> LetterSet {
        (0..ALPHABET_SIZE)
            .filter(|&letter| !self.members.is_disjoint(self.index.containing(letter)))
            .collect()
    }
}
