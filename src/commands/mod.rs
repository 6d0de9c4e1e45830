//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod fill;
pub mod interactive;
pub mod solve;

pub use analyze::{Analysis, analyze_guess};
pub use benchmark::{BenchmarkConfig, BenchmarkResult, run_benchmark};
pub use fill::fill_context;
pub use interactive::run_interactive;
pub use solve::{PlayResult, PlayStep, next_guess, play_out};

use crate::cache::{DEFAULT_LOCK_TIMEOUT, ResultCache};
use crate::core::Context;
use crate::error::Result;
use crate::solver::{SearchOptions, Solver};
use crate::wordlists::WordLists;
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Where the word lists and cache live, and how to search
#[derive(Debug, Clone)]
pub struct GameSetup {
    pub data_dir: PathBuf,
    pub use_cache: bool,
    pub lock_timeout: Duration,
    pub options: SearchOptions,
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("cache"),
            use_cache: true,
            lock_timeout: DEFAULT_LOCK_TIMEOUT,
            options: SearchOptions::default(),
        }
    }
}

/// Load the word lists of `context` and start a game
///
/// # Errors
/// Returns word list errors and I/O errors opening the cache.
pub fn build_solver(context: Context, setup: &GameSetup) -> Result<Solver> {
    let lists = WordLists::load(&setup.data_dir, context.info.id)?;
    let (guesses, solutions) = lists.candidates(&context)?;
    info!(
        "{context}: {} guesses, {} solutions",
        guesses.len(),
        solutions.len()
    );

    let cache = if setup.use_cache {
        Some(ResultCache::open(&setup.data_dir, &context, setup.lock_timeout)?)
    } else {
        None
    };
    Ok(Solver::new(context, guesses, solutions, cache, setup.options))
}
