//! Minimax guess search
//!
//! Ranking of single guesses, the search for the best guesses and a game
//! session built on top of them.

mod engine;
pub mod progress;
mod rank;
mod search;

pub use engine::Solver;
pub use rank::{GuessRank, InvalidScore, Rank, rank_guess};
pub use search::{BestGuesses, CacheSlot, Parallelism, SearchOptions, best_guesses};
