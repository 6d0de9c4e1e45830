//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::{ColoredString, Colorize};
use std::fmt::Display;

/// Render a guess as coloured tiles, one upper-case letter per tile
#[must_use]
pub fn feedback_tiles(word: &Word, feedback: Feedback) -> String {
    word.as_str()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| tile(letter, mark).to_string())
        .collect()
}

fn tile(letter: char, mark: Mark) -> ColoredString {
    let text = format!(" {} ", letter.to_ascii_uppercase()).black().bold();
    match mark {
        Mark::Correct => text.on_green(),
        Mark::Present => text.on_yellow(),
        Mark::Absent => text.on_bright_black(),
    }
}

/// Create a bar `width` characters wide, filled to `value / max`
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// The first `count` items, one per line, with "..." when some were left out
#[must_use]
pub fn preview<T: Display>(items: impl IntoIterator<Item = T>, count: usize) -> String {
    let mut items = items.into_iter();
    let mut lines: Vec<String> = items.by_ref().take(count).map(|item| item.to_string()).collect();
    if items.next().is_some() {
        lines.push("...".to_owned());
    }
    lines.join("\n")
}

/// `guess (foil)`
#[must_use]
pub fn guess_with_foil(guess: &Word, foil: Feedback) -> String {
    format!("{guess} ({foil})")
}
