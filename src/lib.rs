//! Wordlet
//!
//! An entropy-maximizing solver for Wordle-style word puzzles. Each guess is
//! chosen to maximize the expected information gain of its clue over the
//! remaining candidate words.
//!
//! # Quick Start
//!
//! ```rust
//! use wordlet::core::{Clue, Word};
//! use wordlet::solver::{Solver, SolverConfig, SolverStatus};
//!
//! let dictionary = vec![
//!     Word::new("slate", 5).unwrap(),
//!     Word::new("stare", 5).unwrap(),
//!     Word::new("share", 5).unwrap(),
//! ];
//! let target = Word::new("share", 5).unwrap();
//!
//! let mut solver = Solver::new(&dictionary, &SolverConfig::default()).unwrap();
//! while solver.status() == SolverStatus::Active {
//!     let clue = Clue::derive(&target, solver.current_guess()).unwrap();
//!     solver.advance(&clue).unwrap();
//! }
//! assert_eq!(solver.status(), SolverStatus::Solved);
//! ```

// Core domain types
pub mod core;

// Solving machinery
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

/// Puzzle word length for the classic game
pub const WORD_LENGTH: usize = 5;
