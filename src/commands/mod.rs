//! Command implementations

pub mod perf;
pub mod solve;

pub use perf::{PerfStats, run_perf};
pub use solve::run_solve;
pub use test::{TestReport, TraceStep, run_test, solve_target};
