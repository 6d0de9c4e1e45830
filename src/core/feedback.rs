//! Feedback calculation and representation
//!
//! Feedback encodes the coloured tiles of a guess as a base-3 number:
//! - 0 = Absent (black, `b`)
//! - 1 = Present (yellow, `y`)
//! - 2 = Correct (green, `g`)
//!
//! Position 0 is the most significant digit, so for equal lengths the numeric
//! code orders feedbacks lexicographically with `b < y < g`.

use super::word::{ALPHABET_SIZE, LetterSet, MAX_WORD_LEN, Word};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

const POW3: [u32; MAX_WORD_LEN + 1] = {
    let mut table = [1u32; MAX_WORD_LEN + 1];
    let mut i = 1;
    while i <= MAX_WORD_LEN {
        table[i] = table[i - 1] * 3;
        i += 1;
    }
    table
};

/// The mark a single tile receives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Absent,
    Present,
    Correct,
}

impl Mark {
    const fn digit(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Correct => 2,
        }
    }

    const fn from_digit(digit: u32) -> Self {
        match digit {
            0 => Self::Absent,
            1 => Self::Present,
            _ => Self::Correct,
        }
    }

    /// Weight used to order feedbacks, fewer hits sort first
    const fn weight(self) -> u32 {
        match self {
            Self::Absent => 0,
            Self::Present => 2,
            Self::Correct => 4,
        }
    }

    /// Symbol used in feedback strings
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Absent => 'b',
            Self::Present => 'y',
            Self::Correct => 'g',
        }
    }

    /// Parse a tile symbol
    ///
    /// Accepts `g`/`G`/🟩, `y`/`Y`/🟨, and `b`/`B`/`-`/`_`/⬛/⬜.
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            'g' | 'G' | '🟩' => Some(Self::Correct),
            'y' | 'Y' | '🟨' => Some(Self::Present),
            'b' | 'B' | '-' | '_' | '⬛' | '⬜' => Some(Self::Absent),
            _ => None,
        }
    }
}

/// Error type for unparseable feedback strings
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeedbackError {
    #[error("feedback must have between 1 and {MAX_WORD_LEN} tiles, got {0}")]
    InvalidLength(usize),
    #[error("feedback {text:?} has invalid tile {symbol:?}")]
    InvalidSymbol { text: String, symbol: char },
}

/// Feedback for a guess, one mark per letter
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Feedback {
    code: u32,
    len: u8,
}

impl Feedback {
    /// All tiles correct
    #[must_use]
    pub const fn perfect(len: usize) -> Self {
        Self {
            code: POW3[len] - 1,
            len: len as u8,
        }
    }

    /// Build feedback from marks
    ///
    /// # Panics
    /// Panics if there are more marks than [`MAX_WORD_LEN`]
    #[must_use]
    pub fn from_marks(marks: &[Mark]) -> Self {
        assert!(marks.len() <= MAX_WORD_LEN, "too many marks");
        let code = marks.iter().fold(0, |code, mark| code * 3 + mark.digit());
        Self {
            code,
            len: marks.len() as u8,
        }
    }

    /// Calculate the feedback when `guess` is played and `solution` is the answer
    ///
    /// Correct letters are matched first. The remaining, unmatched letters of the
    /// solution are then handed out left to right, so with duplicated letters the
    /// leftmost unmatched occurrences in the guess are the ones marked Present.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Feedback, Word};
    ///
    /// let guess = Word::new("speed").unwrap();
    /// let solution = Word::new("abide").unwrap();
    /// assert_eq!(Feedback::calculate(&guess, &solution).to_string(), "bbyby");
    /// ```
    #[must_use]
    pub fn calculate(guess: &Word, solution: &Word) -> Self {
        debug_assert_eq!(guess.len(), solution.len());

        let mut marks = [Mark::Absent; MAX_WORD_LEN];
        let mut unmatched = [0u8; ALPHABET_SIZE];

        for (position, (g, s)) in guess.letters().iter().zip(solution.letters()).enumerate() {
            if g == s {
                marks[position] = Mark::Correct;
            } else {
                unmatched[usize::from(s - b'a')] += 1;
            }
        }

        for (position, &g) in guess.letters().iter().enumerate() {
            if marks[position] == Mark::Correct {
                continue;
            }
            let count = &mut unmatched[usize::from(g - b'a')];
            if *count > 0 {
                marks[position] = Mark::Present;
                *count -= 1;
            }
        }

        Self::from_marks(&marks[..guess.len()])
    }

    /// Number of tiles
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        self.len as usize
    }

    /// Always false for valid feedback
    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.len == 0
    }

    /// Raw base-3 code
    #[inline]
    #[must_use]
    pub const fn code(self) -> u32 {
        self.code
    }

    /// Mark at a position
    ///
    /// # Panics
    /// Panics if the position is out of range
    #[must_use]
    pub fn mark_at(self, position: usize) -> Mark {
        assert!(position < self.len(), "position out of range");
        Mark::from_digit(self.code / POW3[self.len() - 1 - position] % 3)
    }

    /// Marks from the first position to the last
    pub fn marks(self) -> impl Iterator<Item = Mark> {
        (0..self.len()).map(move |position| self.mark_at(position))
    }

    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.code == POW3[self.len as usize] - 1
    }

    #[must_use]
    pub fn count(self, mark: Mark) -> usize {
        self.marks().filter(|&m| m == mark).count()
    }

    fn weight(self) -> u32 {
        self.marks().map(Mark::weight).sum()
    }

    /// Whether this feedback can be realised for `guess`
    ///
    /// Once a letter is marked Absent every unmatched copy of it in the solution
    /// has been handed out, so a later occurrence of that letter cannot be
    /// marked Present.
    #[must_use]
    pub fn is_consistent_with(self, guess: &Word) -> bool {
        if guess.len() != self.len() {
            return false;
        }

        let mut absent = LetterSet::new();
        for (position, mark) in self.marks().enumerate() {
            let letter = guess.index_at(position);
            match mark {
                Mark::Absent => absent = absent.with(letter),
                Mark::Present if absent.contains(letter) => return false,
                _ => {}
            }
        }
        true
    }

    /// Whether any guess/solution pair can produce this shape of feedback
    ///
    /// With every other tile Correct, the only unmatched solution letter sits at
    /// the remaining position. A Present there would need the guess letter to
    /// equal that solution letter, which would have made the tile Correct.
    /// So exactly one Present and no Absent can never occur.
    #[must_use]
    pub fn is_realizable_shape(self) -> bool {
        !(self.count(Mark::Present) == 1 && self.count(Mark::Absent) == 0)
    }

    /// Convert feedback to an emoji string like "🟩🟨⬛🟩🟨"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .map(|mark| match mark {
                Mark::Correct => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬛',
            })
            .collect()
    }
}

/// Feedback for `guess` against `solution`, see [`Feedback::calculate`]
#[must_use]
pub fn feedback_for(guess: &Word, solution: &Word) -> Feedback {
    Feedback::calculate(guess, solution)
}

/// Whether `feedback` can be realised for `guess`, see [`Feedback::is_consistent_with`]
#[must_use]
pub fn is_consistent(guess: &Word, feedback: Feedback) -> bool {
    feedback.is_consistent_with(guess)
}

/// Every realisable feedback shape of the given length, in partition order
///
/// The table is built once per length and shared afterwards.
///
/// # Panics
/// Panics if the length is zero or above [`MAX_WORD_LEN`]
#[must_use]
pub fn all_feedbacks(len: usize) -> &'static [Feedback] {
    static TABLES: [OnceLock<Box<[Feedback]>>; MAX_WORD_LEN + 1] =
        [const { OnceLock::new() }; MAX_WORD_LEN + 1];

    assert!((1..=MAX_WORD_LEN).contains(&len), "unsupported word length");

    TABLES[len].get_or_init(|| {
        let mut feedbacks: Vec<Feedback> = (0..POW3[len])
            .map(|code| Feedback {
                code,
                len: len as u8,
            })
            .filter(|feedback| feedback.is_realizable_shape())
            .collect();
        feedbacks.sort_unstable();
        feedbacks.into_boxed_slice()
    })
}

impl Ord for Feedback {
    /// Fewer hits first (weighted Absent 0, Present 2, Correct 4), then
    /// lexicographic with `b < y < g`
    ///
    /// This is not the plain `b < y < g` lexicographic order: `ybbbb` sorts
    /// before `bbbbg` here and after it there. Foils chosen on ties follow
    /// this order, so cached foils need not match those of a tool ranking
    /// partitions lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        self.len
            .cmp(&other.len)
            .then_with(|| self.weight().cmp(&other.weight()))
            .then_with(|| self.code.cmp(&other.code))
    }
}

impl PartialOrd for Feedback {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.marks()
            .try_for_each(|mark| fmt::Write::write_char(f, mark.symbol()))
    }
}

impl fmt::Debug for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Feedback({self})")
    }
}

impl std::str::FromStr for Feedback {
    type Err = FeedbackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let marks = s
            .trim()
            .chars()
            .map(|symbol| {
                Mark::from_symbol(symbol).ok_or_else(|| FeedbackError::InvalidSymbol {
                    text: s.to_owned(),
                    symbol,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        if marks.is_empty() || marks.len() > MAX_WORD_LEN {
            return Err(FeedbackError::InvalidLength(marks.len()));
        }

        Ok(Self::from_marks(&marks))
    }
}

impl TryFrom<String> for Feedback {
    type Error = FeedbackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Feedback> for String {
    fn from(feedback: Feedback) -> Self {
        feedback.to_string()
    }
}
