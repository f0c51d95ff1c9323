//! Task execution module
//!
//! This module handles the actual execution of resolved plans: spawning
//! external commands and reporting results.

pub mod command;
pub mod runner;

pub use command::{Executor, SystemExecutor};
pub use runner::TaskRunner;
