//! Display functions for command results

use super::formatters::{create_progress_bar, feedback_tiles, guess_with_foil, preview};
use crate::cache::FillReport;
use crate::commands::{Analysis, BenchmarkResult, PlayResult};
use crate::core::Context;
use crate::solver::BestGuesses;
use colored::Colorize;

/// Rows shown by default for guess and solution lists
pub const PREVIEW_COUNT: usize = 10;

/// Print the best guesses with their foils
pub fn print_best_guesses(best: &BestGuesses) {
    println!(
        "{}",
        preview(
            best.iter().map(|(guess, foil)| guess_with_foil(&guess, foil)),
            PREVIEW_COUNT
        )
    );
    println!(
        "Rank: {} Worst case: {}",
        best.rank.to_string().bright_yellow(),
        best.rank.worst()
    );
}

/// Print a played-out game
pub fn print_play_result(result: &PlayResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    match result.solution {
        Some(solution) => println!(
            "Solving: {}",
            solution.as_str().to_uppercase().bright_yellow().bold()
        ),
        None => println!("Solving: {}", "against the foil".bright_yellow().bold()),
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.steps.iter().enumerate() {
        println!(
            "\nTurn {}: {} {}",
            i + 1,
            feedback_tiles(&step.guess, step.feedback),
            step.feedback
        );

        if verbose {
            println!(
                "  Solutions: {} → {}",
                step.solutions_before, step.solutions_after
            );
            println!("  Rank:      {}", step.rank);
        }
    }

    println!();
    let turns = result.turns();
    println!(
        "{}",
        format!(
            "✅ Solved in {turns} {}!",
            if turns == 1 { "guess" } else { "guesses" }
        )
        .green()
        .bold()
    );
}

/// Print the partitions of an analyzed guess
pub fn print_analysis(analysis: &Analysis) {
    let ranked = &analysis.ranked;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "MINIMAX ANALYSIS:".bright_cyan().bold(),
        ranked.guess.as_str().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nAgainst {} possible solutions:", analysis.total_solutions);
    println!("   Rank:        {}", ranked.rank.to_string().bright_yellow());
    println!("   Worst case:  {} ({})", ranked.rank.worst(), ranked.foil);
    println!("   Partitions:  {}\n", ranked.rank.partitions());

    let largest = ranked.rank.worst() as f64;
    for (feedback, words) in &analysis.partitions {
        let bar = create_progress_bar(words.len() as f64, largest, 20);
        println!(
            "   {} {} {:5}  {}",
            feedback_tiles(&ranked.guess, *feedback),
            bar.green(),
            words.len(),
            preview(words, 3).replace('\n', " ").bright_black()
        );
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!("   Seed:             {}", result.seed);
    println!(
        "   Average turns:    {}",
        format!("{:.4}", result.average_turns).bright_yellow().bold()
    );
    println!(
        "   Best case:        {}",
        result.min_turns.to_string().green()
    );
    println!(
        "   Worst case:       {}",
        result.max_turns.to_string().yellow()
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.total_words == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&turns, &count) in &result.distribution {
        let pct = (count as f64 / result.total_words as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {turns}: {} {count:5} ({pct:5.1}%)", bar.green());
    }

    println!("\n🐢 {}", "Hardest solutions:".bright_cyan().bold());
    println!("{}", preview(&result.hardest, PREVIEW_COUNT));
}

/// Print the outcome of filling one context's cache
pub fn print_fill_report(context: &Context, report: &FillReport) {
    println!(
        "{} {}: {} first guesses, {} added, {} cached, {} too small to cache",
        "Cache".bright_cyan().bold(),
        context,
        report.first_guesses,
        report.added.to_string().green(),
        report.cached,
        report.trivial
    );
}
