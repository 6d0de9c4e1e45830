//! Core domain types for Wordle
//!
//! Words, feedback and the game context. Everything here is pure and
//! independent of the candidate-set machinery built on top.

mod feedback;
mod variant;
mod word;

pub use feedback::{Feedback, FeedbackError, Mark, all_feedbacks, feedback_for, is_consistent};
pub use variant::{Context, Mode, VARIANTS, Variant, VariantInfo, variant_info};
pub use word::{
    ALPHABET_SIZE, LETTERS, LetterSet, MAX_WORD_LEN, Word, WordError, letter_index,
};

/// A played turn: the guess and the feedback it received
pub type Turn = (Word, Feedback);
