use std::process::ExitCode;

use anyhow::Result;
use colored::*;
use makeshift_core::execution::{SystemExecutor, TaskRunner};
use makeshift_core::{Registry, TaskError};

pub fn execute(registry: &Registry, task: &str) -> Result<ExitCode> {
    println!("{} {}", "Running task".bold(), task.cyan());

    let runner = TaskRunner::new(registry);
    match runner.run(task, &mut SystemExecutor) {
        Ok(()) => {
            println!();
            println!(
                "{} {}",
                "✓".green().bold(),
                "All tasks completed successfully!".green().bold()
            );
            Ok(ExitCode::SUCCESS)
        }
        // Propagate the failing command's own exit code
        Err(TaskError::CommandFailed { task, command, code }) => {
            eprintln!();
            eprintln!(
                "{} {}",
                "✗".red().bold(),
                format!(
                    "Command '{}' in task '{}' failed with exit code {}",
                    command, task, code
                )
                .red()
            );
            Ok(exit_code_from(code))
        }
        Err(err) => Err(anyhow::anyhow!("Failed to run task: {}", err)),
    }
}

/// Map a child exit code to our own; codes outside 1..=255 (including the
/// -1 used for signal-terminated children) collapse to 1
fn exit_code_from(code: i32) -> ExitCode {
    match u8::try_from(code) {
        Ok(code) if code > 0 => ExitCode::from(code),
        _ => ExitCode::FAILURE,
    }
}
