//! Terminal output formatting
//!
//! Renders clues as colored tiles and prints the reports produced by the
//! batch commands.

use crate::commands::{PerfStats, TestReport};
use crate::core::{Clue, TileStatus};
use crate::solver::SolverStatus;
use colored::Colorize;

/// Render a clue as colored uppercase letters
///
/// Correct letters green, partial matches yellow, incorrect letters dimmed.
#[must_use]
pub fn format_clue(clue: &Clue) -> String {
    clue.iter()
        .map(|tile| {
            let letter = (tile.letter as char).to_ascii_uppercase().to_string();
            match tile.status {
                TileStatus::Correct => letter.bright_green().bold().to_string(),
                TileStatus::PartialMatch => letter.yellow().to_string(),
                TileStatus::Incorrect => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Print the per-guess trace of a batch solve
pub fn print_test_report(report: &TestReport, verbose: bool) {
    println!("\nSolving for: {}\n", report.target.to_uppercase());

    for (i, step) in report.steps.iter().enumerate() {
        let candidates = match step.pool_after {
            1 => "1 candidate remaining".to_string(),
            n => format!("{n} candidates remaining"),
        };
        println!(
            "Guess {}: {}  {}",
            i + 1,
            format_clue(&step.clue),
            candidates.bright_black()
        );

        if verbose && !step.remaining.is_empty() {
            let words: Vec<String> = step
                .remaining
                .iter()
                .map(|w| w.to_uppercase())
                .collect();
            println!("         {}", words.join(" ").bright_black());
        }
    }

    println!();
    match report.outcome {
        SolverStatus::Solved => {
            let guesses = if report.iterations == 1 {
                "guess"
            } else {
                "guesses"
            };
            println!(
                "{} Solved in {} {guesses}",
                "✓".bright_green(),
                report.iterations
            );
        }
        SolverStatus::Impossible => {
            println!(
                "{} No dictionary word is consistent with the clues",
                "✗".red()
            );
        }
        SolverStatus::Active => {}
    }
}

/// Print the aggregated guess distribution from a perf run
pub fn print_perf_stats(stats: &PerfStats) {
    println!("\n{}", "═".repeat(60));
    println!(" Performance Results ");
    println!("{}", "═".repeat(60));

    println!("\nWords tested:    {}", stats.total_words);
    println!(
        "Solved:          {} ({:.1}%)",
        stats.solved,
        stats.solved as f64 / stats.total_words as f64 * 100.0
    );
    if stats.failed > 0 {
        println!(
            "Failed:          {}",
            stats.failed.to_string().red()
        );
    }
    println!(
        "Average guesses: {}",
        format!("{:.3}", stats.average_guesses).bright_yellow().bold()
    );

    println!("\nGuess distribution:");
    let max_count = stats
        .distribution
        .iter()
        .map(|&(_, count)| count)
        .max()
        .unwrap_or(1);
    for &(guesses, count) in &stats.distribution {
        let percentage = count as f64 / stats.total_words as f64 * 100.0;
        let bar_len = (count * 40 / max_count).max(1);
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {guesses} guesses: {bar} {count:4} ({percentage:5.1}%)");
    }

    if !stats.worst_words.is_empty() && stats.max_guesses > 2 {
        println!("\nHardest words:");
        for (word, guesses) in stats.worst_words.iter().take(5) {
            println!("  {} ({} guesses)", word.to_uppercase().yellow(), guesses);
        }
    }

    println!(
        "\nTotal time:      {:.2}s ({:.1}ms per word)",
        stats.total_time.as_secs_f64(),
        stats.total_time.as_millis() as f64 / stats.total_words as f64
    );
}
