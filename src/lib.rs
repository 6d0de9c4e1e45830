//! Wordle Minimax
//!
//! A Wordle solver that ranks guesses by the worst case: the largest number
//! of solutions any feedback could leave. Ties go to the guess splitting the
//! solutions into more groups, then to guesses that could win outright.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::candidates::{GuessCandidates, SolutionCandidates};
//! use wordle_minimax::core::{Variant, Word};
//! use wordle_minimax::solver::{SearchOptions, best_guesses};
//!
//! let variant = Variant::new("new_york_times", 5);
//! let words = |list: &[&str]| -> Vec<Word> {
//!     list.iter().map(|w| Word::new(w).unwrap()).collect()
//! };
//!
//! let mut guesses =
//!     GuessCandidates::explicit(variant.clone(), words(&["crate", "grate", "irate", "magic"])).unwrap();
//! let solutions = SolutionCandidates::new(variant, words(&["crate", "grate", "irate"])).unwrap();
//!
//! let best = best_guesses(&mut guesses, &solutions, &SearchOptions::default(), None).unwrap();
//! assert_eq!(best.rank.worst(), 1);
//! assert_eq!(best.guesses, words(&["magic"]));
//! ```

// Core domain types
pub mod core;

// Candidate sets and their indexes
pub mod candidates;

// Minimax search
pub mod solver;

// On-disk result cache
pub mod cache;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

pub mod error;

pub use error::{Error, Result};
