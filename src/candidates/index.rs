//! Statistical index over a word list
//!
//! Three families of buckets, each a [`WordSet`] over positions in the list:
//! words with a given letter at a given position, words containing a letter,
//! and words containing a letter exactly `n` times.

use super::word_set::WordSet;
use crate::core::{ALPHABET_SIZE, Word};

/// Buckets of word indices used by restriction and guess elimination
#[derive(Debug, Clone)]
pub struct WordIndex {
    word_length: usize,
    len: usize,
    /// `position * ALPHABET_SIZE + letter`
    by_position: Vec<WordSet>,
    contains: Vec<WordSet>,
    /// `letter * (word_length + 1) + count`, count 0 included
    letter_count: Vec<WordSet>,
}

impl WordIndex {
    /// Build the index for `words`, all of which are `word_length` long
    #[must_use]
    pub fn build(words: &[Word], word_length: usize) -> Self {
        let len = words.len();
        let empty = WordSet::empty(len);

        let mut by_position = vec![empty.clone(); word_length * ALPHABET_SIZE];
        let mut contains = vec![empty.clone(); ALPHABET_SIZE];
        let mut letter_count = vec![empty; ALPHABET_SIZE * (word_length + 1)];

        for (i, word) in words.iter().enumerate() {
            debug_assert_eq!(word.len(), word_length);

            for position in 0..word_length {
                by_position[position * ALPHABET_SIZE + word.index_at(position)].insert(i);
            }

            let counts = word.letter_counts();
            for (letter, &count) in counts.iter().enumerate() {
                if count > 0 {
                    contains[letter].insert(i);
                }
                letter_count[letter * (word_length + 1) + usize::from(count)].insert(i);
            }
        }

        Self {
            word_length,
            len,
            by_position,
            contains,
            letter_count,
        }
    }

    /// Number of words the index was built over
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Words with `letter` at `position`
    #[inline]
    #[must_use]
    pub fn with_letter_at(&self, position: usize, letter: usize) -> &WordSet {
        &self.by_position[position * ALPHABET_SIZE + letter]
    }

    /// Words containing `letter` anywhere
    #[inline]
    #[must_use]
    pub fn containing(&self, letter: usize) -> &WordSet {
        &self.contains[letter]
    }

    /// Words containing `letter` exactly `count` times
    ///
    /// # Panics
    /// Panics if `count` exceeds the word length
    #[inline]
    #[must_use]
    pub fn with_count(&self, letter: usize, count: usize) -> &WordSet {
        assert!(count <= self.word_length, "letter count above word length");
        &self.letter_count[letter * (self.word_length + 1) + count]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::letter_index;

    fn words(list: &[&str]) -> Vec<Word> {
        list.iter().map(|w| Word::new(w).unwrap()).collect()
    }

    fn indices(set: &WordSet) -> Vec<usize> {
        set.iter().collect()
    }

    #[test]
    fn buckets_by_position() {
        let list = words(&["crane", "crate", "slate", "speed"]);
        let index = WordIndex::build(&list, 5);

        assert_eq!(index.len(), 4);
        assert_eq!(indices(index.with_letter_at(0, letter_index(b'c'))), [0, 1]);
        assert_eq!(indices(index.with_letter_at(4, letter_index(b'e'))), [0, 1, 2]);
        assert!(index.with_letter_at(2, letter_index(b'z')).is_empty());
    }

    #[test]
    fn buckets_by_letter() {
        let list = words(&["crane", "crate", "slate", "speed"]);
        let index = WordIndex::build(&list, 5);

        assert_eq!(indices(index.containing(letter_index(b's'))), [2, 3]);
        assert_eq!(indices(index.with_count(letter_index(b'e'), 2)), [3]);
        assert_eq!(indices(index.with_count(letter_index(b'e'), 1)), [0, 1, 2]);
        assert_eq!(indices(index.with_count(letter_index(b's'), 0)), [0, 1]);
    }

    #[test]
    fn every_word_in_exactly_one_bucket_per_dimension() {
        let list = words(&["aabbc", "abcab", "ccccc", "speed", "erase"]);
        let index = WordIndex::build(&list, 5);

        for i in 0..list.len() {
            for position in 0..5 {
                let hits = (0..ALPHABET_SIZE)
                    .filter(|&letter| index.with_letter_at(position, letter).contains(i))
                    .count();
                assert_eq!(hits, 1);
            }
            for letter in 0..ALPHABET_SIZE {
                let hits = (0..=5)
                    .filter(|&count| index.with_count(letter, count).contains(i))
                    .count();
                assert_eq!(hits, 1);
            }
        }
    }
}
