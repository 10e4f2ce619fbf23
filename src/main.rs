//! Wordlet - CLI
//!
//! Entropy-maximizing solver for Wordle-style word puzzles.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordlet::WORD_LENGTH;
use wordlet::commands::{run_perf, run_solve, run_test};
use wordlet::output::{print_perf_stats, print_test_report};
use wordlet::solver::{DEFAULT_OPENER, GuessUniverse, SolverConfig};
use wordlet::wordlists::WORDS;
use wordlet::wordlists::loader::{load_from_file, words_from_slice};

#[derive(Parser)]
#[command(
    name = "wordlet",
    about = "Entropy-maximizing solver for Wordle-style word puzzles",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// First guess, before any clue is available
    #[arg(short, long, global = true, default_value = DEFAULT_OPENER)]
    opener: String,

    /// Pick guesses from the whole dictionary, not just remaining candidates
    #[arg(long, global = true)]
    full_dict: bool,

    /// Path to a custom word list (default: embedded list)
    #[arg(short, long, global = true)]
    wordlist: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode: type in the clues from the real game
    Solve,

    /// Solve a known target word, printing the per-guess trace
    Test {
        /// The target word (must be in the dictionary)
        word: String,

        /// Show remaining candidates after each guess
        #[arg(short, long)]
        verbose: bool,
    },

    /// Solve every dictionary word and report the guess distribution
    Perf {
        /// Limit the number of words to solve
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = match &cli.wordlist {
        Some(path) => load_from_file(path, WORD_LENGTH)
            .with_context(|| format!("failed to read word list {path}"))?,
        None => words_from_slice(WORDS, WORD_LENGTH),
    };
    anyhow::ensure!(!dictionary.is_empty(), "the word list contains no usable words");

    let config = SolverConfig {
        opener: cli.opener,
        universe: if cli.full_dict {
            GuessUniverse::FullDictionary
        } else {
            GuessUniverse::Remaining
        },
    };

    match cli.command {
        Commands::Solve => run_solve(&dictionary, &config).map_err(|e| anyhow::anyhow!(e)),
        Commands::Test { word, verbose } => {
            let report = run_test(&dictionary, &config, &word)?;
            print_test_report(&report, verbose);
            Ok(())
        }
        Commands::Perf { limit } => {
            let stats = run_perf(&dictionary, &config, limit)?;
            print_perf_stats(&stats);
            Ok(())
        }
    }
}
