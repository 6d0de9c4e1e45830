//! Error type shared by the library

use crate::core::{Feedback, Variant, Word, WordError};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors produced by the solver, the word lists and the result cache
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    InvalidWord(#[from] WordError),

    #[error("invalid word list: {0}")]
    InvalidWordList(String),

    #[error("invalid variant: {0}")]
    InvalidVariant(String),

    #[error("guesses are for {guesses} but solutions are for {solutions}")]
    MismatchedContext { guesses: Variant, solutions: Variant },

    #[error("no candidate solutions remain")]
    NoSolutions,

    #[error("no candidate guesses remain")]
    NoGuesses,

    #[error(
        "cache is incoherent for {guess}: missing {} and unexpected {}",
        list(missing),
        list(unexpected)
    )]
    CacheIncoherent {
        guess: Word,
        missing: Vec<Feedback>,
        unexpected: Vec<Feedback>,
    },

    #[error("timed out after {timeout:?} waiting for cache lock {}", path.display())]
    CacheLockTimeout { path: PathBuf, timeout: Duration },

    #[error("temporary cache file {} exists, a previous write did not finish", .0.display())]
    StaleTempFile(PathBuf),

    #[error("corrupt cache: {0}")]
    CacheCorrupt(String),

    #[error("guessing {guess} eliminated no candidates")]
    NoProgress { guess: Word },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result alias used across the library
pub type Result<T, E = Error> = std::result::Result<T, E>;

fn list(feedbacks: &[Feedback]) -> String {
    if feedbacks.is_empty() {
        return "none".to_owned();
    }
    feedbacks
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incoherent_message_lists_difference() {
        let err = Error::CacheIncoherent {
            guess: Word::new("ghost").unwrap(),
            missing: vec!["ybbbb".parse().unwrap()],
            unexpected: vec!["gbbbb".parse().unwrap()],
        };
        assert_eq!(
            err.to_string(),
            "cache is incoherent for ghost: missing ybbbb and unexpected gbbbb"
        );
    }

    #[test]
    fn word_errors_convert() {
        let err: Error = Word::new("").unwrap_err().into();
        assert!(matches!(err, Error::InvalidWord(_)));
    }
}
