//! Persistent best-guess cache
//!
//! One JSON document per variant, mode and word length holds the best first
//! guesses and, below each of them, the best second guesses per feedback.
//! Deeper positions are cheap enough to recompute and are never stored.
//!
//! Every read and write of the document happens under a lock file next to it.
//! Writes go to a `.tmp` sibling which is then renamed over the document, so a
//! leftover `.tmp` file means an interrupted write and refuses to load.

mod fill;
mod lock;
mod tree;

pub use fill::{FLUSH_EVERY, FillReport, fill_cache};
pub use lock::LockFile;
pub use tree::{CacheNode, GuessTable};

use crate::core::{Context, Feedback, Turn, Word};
use crate::error::{Error, Result};
use crate::solver::BestGuesses;
use log::info;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::collections::BTreeSet;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// How long to wait for another process to release the cache
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(15);

/// Deepest turn count whose result is stored
pub const MAX_CACHED_TURNS: usize = 1;

/// Cache document for one game context
#[derive(Debug)]
pub struct ResultCache {
    path: PathBuf,
    lock_timeout: Duration,
    data: Option<GuessTable>,
}

impl ResultCache {
    /// Open the cache for `context` inside `dir`, creating the directory
    ///
    /// The document is read lazily on first use.
    ///
    /// # Errors
    /// Returns an I/O error if the directory cannot be created.
    pub fn open(dir: impl AsRef<Path>, context: &Context, lock_timeout: Duration) -> Result<Self> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        Ok(Self {
            path: dir.join(Self::file_name(context)),
            lock_timeout,
            data: None,
        })
    }

    /// `guesses_{mode}_{variant}_{length}.json`
    #[must_use]
    pub fn file_name(context: &Context) -> String {
        format!(
            "guesses_{}_{}_{}.json",
            context.mode,
            context.variant.id,
            context.word_length()
        )
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn sibling(&self, extension: &str) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(extension);
        PathBuf::from(name)
    }

    fn lock(&self) -> Result<LockFile> {
        LockFile::acquire(&self.sibling(".lck"), self.lock_timeout)
    }

    fn read(&self) -> Result<GuessTable> {
        let tmp = self.sibling(".tmp");
        if tmp.exists() {
            return Err(Error::StaleTempFile(tmp));
        }

        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(serde_json::from_str(&text)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(GuessTable::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, table: &GuessTable) -> Result<()> {
        let mut bytes = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut bytes, PrettyFormatter::with_indent(b"\t"));
        table.serialize(&mut serializer)?;
        bytes.push(b'\n');

        let tmp = self.sibling(".tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        drop(file);
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    fn loaded(&mut self) -> Result<&mut GuessTable> {
        if self.data.is_none() {
            let _lock = self.lock()?;
            self.data = Some(self.read()?);
        }
        Ok(self.data.get_or_insert_with(GuessTable::default))
    }

    /// Cached best guesses after `turns`
    ///
    /// Always `None` past [`MAX_CACHED_TURNS`].
    ///
    /// # Errors
    /// Returns lock, I/O and parse errors, `Error::StaleTempFile` after an
    /// interrupted write and `Error::CacheCorrupt` for inconsistent entries.
    pub fn load(&mut self, turns: &[Turn]) -> Result<Option<BestGuesses>> {
        if turns.len() > MAX_CACHED_TURNS {
            return Ok(None);
        }
        match self.loaded()?.lookup(turns) {
            Some(table) => table.best(),
            None => Ok(None),
        }
    }

    /// Store `best` for `turns` and write the document
    ///
    /// The document is re-read under the lock first, so unflushed
    /// [`insert`](Self::insert)s are dropped. A no-op past
    /// [`MAX_CACHED_TURNS`] or when the first turn's guess is not cached.
    ///
    /// # Errors
    /// Returns lock, I/O and parse errors.
    pub fn save(&mut self, turns: &[Turn], best: &BestGuesses) -> Result<()> {
        if turns.len() > MAX_CACHED_TURNS {
            return Ok(());
        }

        let _lock = self.lock()?;
        let mut table = self.read()?;
        let stored = table.store(turns, best);
        if stored {
            self.write(&table)?;
            info!(
                "cached {} guesses after {} turns in {}",
                best.len(),
                turns.len(),
                self.path.display()
            );
        }
        self.data = Some(table);
        Ok(())
    }

    /// Store `best` for `turns` in memory only, see [`flush`](Self::flush)
    ///
    /// Returns false when nothing was stored.
    ///
    /// # Errors
    /// Returns lock, I/O and parse errors from the initial read.
    pub fn insert(&mut self, turns: &[Turn], best: &BestGuesses) -> Result<bool> {
        if turns.len() > MAX_CACHED_TURNS {
            return Ok(false);
        }
        Ok(self.loaded()?.store(turns, best))
    }

    /// Write the in-memory document
    ///
    /// # Errors
    /// Returns lock and I/O errors.
    pub fn flush(&mut self) -> Result<()> {
        let Some(table) = &self.data else {
            return Ok(());
        };
        let _lock = self.lock()?;
        self.write(table)?;
        info!("flushed cache to {}", self.path.display());
        Ok(())
    }

    /// Feedbacks stored below `guess`
    ///
    /// # Errors
    /// Returns lock, I/O and parse errors from the initial read.
    pub fn next_feedbacks(&mut self, guess: &Word) -> Result<BTreeSet<Feedback>> {
        Ok(self.loaded()?.next_feedbacks(guess))
    }

    /// Check the feedbacks stored below `guess` are exactly `computed`
    ///
    /// # Errors
    /// Returns `Error::CacheIncoherent` with both sides of the difference.
    pub fn verify_coherent(&mut self, guess: &Word, computed: &BTreeSet<Feedback>) -> Result<()> {
        let stored = self.next_feedbacks(guess)?;
        if &stored == computed {
            return Ok(());
        }
        Err(Error::CacheIncoherent {
            guess: *guess,
            missing: computed.difference(&stored).copied().collect(),
            unexpected: stored.difference(computed).copied().collect(),
        })
    }
}
