//! Command execution
//!
//! This module defines the executor capability used to spawn external
//! commands, so the runner can be exercised in tests with a stub that
//! records invocations instead of truly spawning processes.

use std::io;
use std::process::Command;

use crate::registry::CommandSpec;

/// Capability for spawning an external command and waiting for its exit code
pub trait Executor {
    /// Run the command to completion, returning its exit code
    fn run(&mut self, spec: &CommandSpec) -> io::Result<i32>;
}

/// Executor that spawns real processes, blocking until each one exits
#[derive(Debug, Default)]
pub struct SystemExecutor;

impl Executor for SystemExecutor {
    fn run(&mut self, spec: &CommandSpec) -> io::Result<i32> {
        let mut command = Command::new(&spec.program);
        command.args(&spec.args);
        for (key, value) in &spec.env {
            command.env(key, value);
        }
        let status = command.status()?;
        // A child terminated by a signal has no exit code; carry it as -1
        Ok(status.code().unwrap_or(-1))
    }
}
