//! Reading word list files
//!
//! One word per line. Surrounding whitespace and blank lines are ignored.

use crate::error::Result;
use std::fs;
use std::path::Path;

/// Read the non-blank lines of a word list file
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use wordle_minimax::wordlists::loader::read_lines;
///
/// let lines = read_lines("cache/solutions_new_york_times.txt").unwrap();
/// println!("Loaded {} words", lines.len());
/// ```
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(parse_lines(&content))
}

/// Split text into trimmed, non-blank lines
#[must_use]
pub fn parse_lines(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
