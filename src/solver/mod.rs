//! Solving machinery
//!
//! Candidate-state bookkeeping, entropy scoring, and the session loop that
//! ties them together.

pub mod engine;
pub mod entropy;
pub mod state;

pub use engine::{
    DEFAULT_OPENER, GuessUniverse, SolveError, Solver, SolverConfig, SolverStatus,
};
pub use state::{CandidateState, Contradiction, LetterSet};
