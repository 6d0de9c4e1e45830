//! Word representation
//!
//! A `Word` is a short, fixed-capacity string of lowercase ASCII letters.
//! It is `Copy` so candidate sets, guess lists and cache keys can hold it by value.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of letters in the alphabet
pub const ALPHABET_SIZE: usize = 26;

/// The alphabet every variant plays with
pub const LETTERS: &str = "abcdefghijklmnopqrstuvwxyz";

/// Longest word length any variant supports
pub const MAX_WORD_LEN: usize = 11;

/// Error type for invalid words
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WordError {
    #[error("word must have between 1 and {MAX_WORD_LEN} letters, got {0}")]
    InvalidLength(usize),
    #[error("{word:?} has illegal letter {letter:?}")]
    IllegalLetter { word: String, letter: char },
    #[error("{word:?} is not {expected} letters long")]
    WrongLength { word: String, expected: usize },
}

/// A word of lowercase ASCII letters
///
/// Ordering is alphabetical, which is also the order guesses are reported in.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word {
    letters: [u8; MAX_WORD_LEN],
    len: u8,
}

impl Word {
    /// Create a new word, normalising to lowercase
    ///
    /// # Errors
    /// Returns `WordError` if the word is empty, longer than [`MAX_WORD_LEN`],
    /// or contains anything other than ASCII letters.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Word;
    ///
    /// let word = Word::new("Crane").unwrap();
    /// assert_eq!(word.as_str(), "crane");
    ///
    /// assert!(Word::new("sh0rt").is_err());
    /// ```
    pub fn new(text: &str) -> Result<Self, WordError> {
        let text = text.to_ascii_lowercase();

        if text.is_empty() || text.len() > MAX_WORD_LEN {
            return Err(WordError::InvalidLength(text.chars().count()));
        }

        if let Some(letter) = text.chars().find(|c| !c.is_ascii_lowercase()) {
            return Err(WordError::IllegalLetter { word: text, letter });
        }

        let mut letters = [0u8; MAX_WORD_LEN];
        letters[..text.len()].copy_from_slice(text.as_bytes());

        Ok(Self {
            letters,
            len: text.len() as u8,
        })
    }

    /// Create a word and check it has the expected length
    ///
    /// # Errors
    /// Returns `WordError::WrongLength` when the length differs, or any error of [`Word::new`].
    pub fn with_length(text: &str, expected: usize) -> Result<Self, WordError> {
        let word = Self::new(text)?;
        if word.len() == expected {
            Ok(word)
        } else {
            Err(WordError::WrongLength {
                word: word.to_string(),
                expected,
            })
        }
    }

    /// Build a word from letter indices (0 = 'a')
    pub(crate) fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut letters = [0u8; MAX_WORD_LEN];
        let mut len = 0;
        for (slot, index) in letters.iter_mut().zip(indices) {
            debug_assert!(index < ALPHABET_SIZE);
            *slot = b'a' + index as u8;
            len += 1;
        }
        Self { letters, len }
    }

    /// Get the word as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(self.letters()).expect("words only hold ASCII letters")
    }

    /// Get the letters as bytes
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[u8] {
        &self.letters[..self.len as usize]
    }

    /// Number of letters in the word
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len as usize
    }

    /// Always false, a word has at least one letter
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Alphabet index (0-25) of the letter at `position`
    ///
    /// # Panics
    /// Panics if position is out of range
    #[inline]
    #[must_use]
    pub fn index_at(&self, position: usize) -> usize {
        letter_index(self.letters()[position])
    }

    /// Count occurrences of each letter, indexed by alphabet position
    #[must_use]
    pub fn letter_counts(&self) -> [u8; ALPHABET_SIZE] {
        let mut counts = [0u8; ALPHABET_SIZE];
        for &letter in self.letters() {
            counts[letter_index(letter)] += 1;
        }
        counts
    }

    /// Number of times `letter` (a byte) appears in the word
    #[must_use]
    pub fn count_of(&self, letter: u8) -> usize {
        self.letters().iter().filter(|&&l| l == letter).count()
    }

    /// Set of distinct letters in the word
    #[must_use]
    pub fn letter_set(&self) -> LetterSet {
        self.letters()
            .iter()
            .fold(LetterSet::new(), |set, &l| set.with(letter_index(l)))
    }
}

/// Alphabet index of an ASCII lowercase letter
#[inline]
#[must_use]
pub const fn letter_index(letter: u8) -> usize {
    (letter - b'a') as usize
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word({:?})", self.as_str())
    }
}

impl std::str::FromStr for Word {
    type Err = WordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.as_str().to_owned()
    }
}

/// A set of alphabet letters, one bit per letter
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LetterSet(u32);

impl LetterSet {
    /// Create an empty set
    #[must_use]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Every letter of the alphabet
    #[must_use]
    pub const fn all() -> Self {
        Self((1 << ALPHABET_SIZE) - 1)
    }

    /// Test if the letter index is in the set
    #[must_use]
    pub const fn contains(self, index: usize) -> bool {
        (self.0 >> index) & 1 == 1
    }

    /// Add a letter index to the set
    #[must_use]
    pub const fn with(self, index: usize) -> Self {
        Self(self.0 | (1 << index))
    }

    /// Letters in either set
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Letters of the alphabet not in this set
    #[must_use]
    pub const fn complement(self) -> Self {
        Self(!self.0 & Self::all().0)
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Letter indices in ascending order
    pub fn iter(self) -> impl Iterator<Item = usize> {
        (0..ALPHABET_SIZE).filter(move |&index| self.contains(index))
    }
}

impl fmt::Debug for LetterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letters: String = self.iter().map(|i| char::from(b'a' + i as u8)).collect();
        write!(f, "LetterSet({letters:?})")
    }
}

impl FromIterator<usize> for LetterSet {
    fn from_iter<T: IntoIterator<Item = usize>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), Self::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_creation_valid() {
        let word = Word::new("crane").unwrap();
        assert_eq!(word.as_str(), "crane");
        assert_eq!(word.letters(), b"crane");
        assert_eq!(word.len(), 5);
    }

    #[test]
    fn word_creation_uppercase_normalized() {
        assert_eq!(Word::new("CRANE").unwrap().as_str(), "crane");
        assert_eq!(Word::new("CrAnE").unwrap(), Word::new("crane").unwrap());
    }

    #[test]
    fn word_creation_invalid_length() {
        assert_eq!(Word::new(""), Err(WordError::InvalidLength(0)));
        assert_eq!(
            Word::new("abcdefghijkl"),
            Err(WordError::InvalidLength(12))
        );
    }

    #[test]
    fn word_creation_invalid_characters() {
        assert!(Word::new("cran3").is_err());
        assert!(Word::new("cran ").is_err());
        assert!(matches!(
            Word::new("cran!"),
            Err(WordError::IllegalLetter { letter: '!', .. })
        ));
    }

    #[test]
    fn word_with_length() {
        assert!(Word::with_length("crane", 5).is_ok());
        assert!(matches!(
            Word::with_length("cranes", 5),
            Err(WordError::WrongLength { expected: 5, .. })
        ));
    }

    #[test]
    fn word_letter_counts() {
        let word = Word::new("speed").unwrap();
        let counts = word.letter_counts();
        assert_eq!(counts[letter_index(b'e')], 2);
        assert_eq!(counts[letter_index(b's')], 1);
        assert_eq!(counts[letter_index(b'z')], 0);
        assert_eq!(word.count_of(b'e'), 2);
    }

    #[test]
    fn word_ordering_is_alphabetical() {
        let mut words: Vec<Word> = ["slate", "crane", "crab", "aback"]
            .iter()
            .map(|w| Word::new(w).unwrap())
            .collect();
        words.sort();
        let text: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(text, ["aback", "crab", "crane", "slate"]);
    }

    #[test]
    fn word_from_indices() {
        let word = Word::from_indices([2, 0, 1]);
        assert_eq!(word.as_str(), "cab");
    }

    #[test]
    fn word_serde_as_string() {
        let word = Word::new("ghost").unwrap();
        let json = serde_json::to_string(&word).unwrap();
        assert_eq!(json, "\"ghost\"");
        let back: Word = serde_json::from_str(&json).unwrap();
        assert_eq!(back, word);
        assert!(serde_json::from_str::<Word>("\"gh0st\"").is_err());
    }

    #[test]
    fn letter_set_operations() {
        let word = Word::new("speed").unwrap();
        let set = word.letter_set();
        assert_eq!(set.len(), 4);
        assert!(set.contains(letter_index(b'e')));
        assert!(!set.contains(letter_index(b'a')));
        assert_eq!(set.complement().len(), 22);
        assert_eq!(LetterSet::all().complement(), LetterSet::new());
        assert_eq!(
            set.iter().collect::<Vec<_>>(),
            vec![
                letter_index(b'd'),
                letter_index(b'e'),
                letter_index(b'p'),
                letter_index(b's')
            ]
        );
    }
}
