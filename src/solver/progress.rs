//! Advisory progress reporting for long searches
//!
//! Workers bump a shared counter. The calling thread polls it and drives a
//! progress bar while the work runs on a scoped thread.

use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shared count of ranked guesses
#[derive(Debug, Default)]
pub struct Progress {
    done: AtomicUsize,
}

impl Progress {
    #[inline]
    pub fn tick(&self) {
        self.done.fetch_add(1, Ordering::Relaxed);
    }

    #[must_use]
    pub fn done(&self) -> usize {
        self.done.load(Ordering::Relaxed)
    }
}

/// Run `work`, showing a progress bar of `total` steps when `enabled`
///
/// The bar is only drawn when stderr is a terminal.
pub fn run_with_progress<T, F>(total: usize, enabled: bool, work: F) -> T
where
    T: Send,
    F: FnOnce(&Progress) -> T + Send,
{
    let progress = Progress::default();

    if !enabled || !std::io::stderr().is_terminal() {
        return work(&progress);
    }

    let bar = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {elapsed_precise}",
    ) {
        bar.set_style(style.progress_chars("█▓▒░"));
    }

    let outcome = thread::scope(|scope| {
        let worker = scope.spawn(|| work(&progress));
        while !worker.is_finished() {
            bar.set_position(progress.done() as u64);
            thread::sleep(POLL_INTERVAL);
        }
        worker.join()
    });

    bar.finish_and_clear();
    match outcome {
        Ok(value) => value,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}
