//! Exclusive lock guarding one cache document
//!
//! An OS advisory lock on a `.lck` file next to the document. The operating
//! system drops the lock with the last handle, so a holder that dies leaves
//! at most an unlocked file behind.

use crate::error::{Error, Result};
use log::debug;
use std::fs::{File, OpenOptions, TryLockError};
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Held while the handle is open, released on drop
#[derive(Debug)]
pub struct LockFile {
    _file: File,
}

impl LockFile {
    /// Lock `path` exclusively, retrying until `timeout` has passed
    ///
    /// The file is created if needed and never removed.
    ///
    /// # Errors
    /// Returns `Error::CacheLockTimeout` if another holder keeps the lock for
    /// longer than `timeout`, or an I/O error if the file cannot be opened.
    pub fn acquire(path: &Path, timeout: Duration) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let start = Instant::now();
        loop {
            match file.try_lock() {
                Ok(()) => return Ok(Self { _file: file }),
                Err(TryLockError::WouldBlock) => {
                    if start.elapsed() >= timeout {
                        return Err(Error::CacheLockTimeout {
                            path: path.to_path_buf(),
                            timeout,
                        });
                    }
                    debug!("waiting for lock {}", path.display());
                    thread::sleep(POLL_INTERVAL);
                }
                Err(TryLockError::Error(err)) => return Err(err.into()),
            }
        }
    }
}
