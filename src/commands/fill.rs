//! Cache fill command

use super::GameSetup;
use crate::cache::{FillReport, ResultCache, fill_cache};
use crate::core::Context;
use crate::error::Result;
use crate::wordlists::WordLists;
use log::info;

/// Fill the cache of one context from the word lists in the data directory
///
/// The cache is used even when `setup.use_cache` is off.
///
/// # Errors
/// Returns word list, search and cache errors.
pub fn fill_context(context: &Context, setup: &GameSetup) -> Result<FillReport> {
    info!("filling cache for {context}");
    let lists = WordLists::load(&setup.data_dir, context.info.id)?;
    let (guesses, solutions) = lists.candidates(context)?;
    let mut cache = ResultCache::open(&setup.data_dir, context, setup.lock_timeout)?;
    fill_cache(&guesses, &solutions, &mut cache, &setup.options)
}
