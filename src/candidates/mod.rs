//! Candidate word sets
//!
//! Guess and solution sets share one representation: a sorted word universe
//! with a bitset of members and an index of letter buckets.

mod guesses;
mod index;
mod set;
mod solutions;
mod word_set;

pub use guesses::{GuessCandidates, GuessPool};
pub use index::WordIndex;
pub use set::CandidateSet;
pub use solutions::SolutionCandidates;
pub use word_set::WordSet;
