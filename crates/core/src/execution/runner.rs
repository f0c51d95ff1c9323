//! High-level task runner
//!
//! This module executes a resolved plan: each task's commands in order,
//! stopping at the first fatal failure. Advisory commands (tool presence
//! checks) demote failure to a warning and let the run continue.

use colored::*;

use crate::execution::command::Executor;
use crate::registry::{CommandSpec, Registry, Task};
use crate::types::{TaskError, TaskResult};

/// Runs tasks from a registry through an executor, sequentially and in
/// resolved dependency order
pub struct TaskRunner<'a> {
    registry: &'a Registry,
}

impl<'a> TaskRunner<'a> {
    pub fn new(registry: &'a Registry) -> Self {
        Self { registry }
    }

    /// Resolve `name` and execute the plan. Resolution errors surface
    /// before any command runs; the first fatal command failure aborts
    /// the rest of the plan.
    pub fn run(&self, name: &str, executor: &mut dyn Executor) -> TaskResult<()> {
        let plan = self.registry.resolve(name)?;
        for task_name in &plan.order {
            let task = self
                .registry
                .get(task_name)
                .ok_or_else(|| TaskError::UnknownTask {
                    name: task_name.clone(),
                    known: self.registry.list().map(|(n, _)| n.to_string()).collect(),
                })?;
            self.run_task(task, executor)?;
        }
        Ok(())
    }

    fn run_task(&self, task: &Task, executor: &mut dyn Executor) -> TaskResult<()> {
        // Aggregate tasks exist only for their prerequisites
        if task.commands.is_empty() {
            return Ok(());
        }

        println!();
        println!("┌─ {}", format!("Running task '{}'", task.name).bold());
        println!("└─ {}", task.description.bright_black());

        for command in &task.commands {
            println!("   {}", command.to_string().cyan());
            match executor.run(command) {
                Ok(0) => {}
                Ok(_) if command.advisory => warn_advisory(command),
                Ok(code) => {
                    return Err(TaskError::CommandFailed {
                        task: task.name.clone(),
                        command: command.to_string(),
                        code,
                    })
                }
                Err(_) if command.advisory => warn_advisory(command),
                Err(source) => {
                    return Err(TaskError::CommandSpawn {
                        task: task.name.clone(),
                        command: command.to_string(),
                        source,
                    })
                }
            }
        }

        println!(
            "{} {}",
            "✓".green().bold(),
            format!("Completed '{}'", task.name).green()
        );
        Ok(())
    }
}

fn warn_advisory(command: &CommandSpec) {
    eprintln!(
        "{} {}",
        "⚠".yellow().bold(),
        format!("'{}' is unavailable", command).yellow()
    );
    if let Some(hint) = &command.hint {
        eprintln!("  {}", hint.bright_black());
    }
}
