//! App - the runner and how it is assembled.
//!
//! # Components
//! - **RunnerBuilder**: wiring and fail-fast validation
//! - **Runner**: authenticate -> sample -> call -> summarize, three rounds
//! - **sampling**: shuffled-suffix endpoint selection

pub mod builder;
pub mod runner;
pub mod sampling;

pub use self::builder::{BuildError, RunnerBuilder};
pub use self::runner::Runner;
pub use self::sampling::select_endpoints;
