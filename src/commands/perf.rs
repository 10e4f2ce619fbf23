//! Dictionary-wide performance sweep
//!
//! Solves for every dictionary word and aggregates the guess-count
//! distribution. Sessions are independent, so they run in parallel with each
//! worker owning private solver state.

use super::test::solve_target;
use crate::core::Word;
use crate::solver::{SolveError, SolverConfig};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// How many of the hardest words to keep in the stats
const WORST_WORDS_LIMIT: usize = 10;

/// Aggregated results from solving every dictionary word
#[derive(Debug)]
pub struct PerfStats {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// (guess count, number of words) pairs in ascending guess-count order
    pub distribution: Vec<(usize, usize)>,
    pub average_guesses: f64,
    pub max_guesses: usize,
    /// Hardest words, highest guess counts first
    pub worst_words: Vec<(String, usize)>,
    pub total_time: Duration,
}

/// Solve every dictionary word (or the first `limit`) and aggregate stats
///
/// # Errors
///
/// Propagates the first session error encountered; a healthy dictionary
/// never produces one, since every target is a dictionary word.
pub fn run_perf(
    dictionary: &[Word],
    config: &SolverConfig,
    limit: Option<usize>,
) -> Result<PerfStats, SolveError> {
    let count = limit.unwrap_or(dictionary.len()).min(dictionary.len());
    let targets = &dictionary[..count];

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();

    let results: Result<Vec<(String, usize, bool)>, SolveError> = targets
        .par_iter()
        .map(|target| {
            let report = solve_target(dictionary, config, target)?;
            pb.inc(1);
            Ok((
                target.text().to_string(),
                report.iterations,
                report.solved(),
            ))
        })
        .collect();

    pb.finish_and_clear();
    let results = results?;
    let total_time = start.elapsed();

    let solved = results.iter().filter(|(_, _, ok)| *ok).count();
    let failed = results.len() - solved;

    let mut histogram: BTreeMap<usize, usize> = BTreeMap::new();
    for (_, guesses, ok) in &results {
        if *ok {
            *histogram.entry(*guesses).or_insert(0) += 1;
        }
    }
    let distribution: Vec<(usize, usize)> = histogram.into_iter().collect();

    let total_guesses: usize = results
        .iter()
        .filter(|(_, _, ok)| *ok)
        .map(|(_, guesses, _)| guesses)
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let max_guesses = distribution.last().map_or(0, |&(guesses, _)| guesses);

    let mut worst_words: Vec<(String, usize)> = results
        .iter()
        .filter(|(_, _, ok)| *ok)
        .map(|(word, guesses, _)| (word.clone(), *guesses))
        .collect();
    worst_words.sort_by_key(|&(_, guesses)| std::cmp::Reverse(guesses));
    worst_words.truncate(WORST_WORDS_LIMIT);

    Ok(PerfStats {
        total_words: results.len(),
        solved,
        failed,
        distribution,
        average_guesses,
        max_guesses,
        worst_words,
        total_time,
    })
}
