//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    PREVIEW_COUNT, print_analysis, print_benchmark_result, print_best_guesses, print_fill_report,
    print_play_result,
};
