use std::path::Path;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use makeshift_core::builtin::builtin_registry;
use makeshift_core::configs::tasks::{load_tasks_file, registry_from_config};
use makeshift_core::Registry;

mod commands;

const TASKS_FILE: &str = "makeshift.yml";

/// Makeshift - a declarative developer task runner
#[derive(Parser)]
#[command(name = "makeshift")]
#[command(about = "Run the project's development tasks")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Install dependencies and pre-commit hooks
    Install,
    /// Format the code
    Format,
    /// Lint the code
    Lint,
    /// Run the tests
    Test,
    /// Build the documentation
    Docs,
    /// Build and serve the documentation
    DocsServe,
    /// Format, lint, and test (the default)
    All,
    /// Build the documentation site for CI
    CiBuild,
    /// List available tasks
    List,
    /// Show the execution plan for a task without running it
    Plan {
        /// Task name
        task: String,
    },
    /// Run a task by name
    Run {
        /// Task name
        task: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match execute(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

fn execute(cli: Cli) -> Result<ExitCode> {
    let registry = load_registry()?;
    // Catch graph misconfiguration before anything runs
    registry
        .self_check()
        .map_err(|e| anyhow::anyhow!("Invalid task configuration: {}", e))?;

    match cli.command {
        None => {
            let default_task = registry.default_task().unwrap_or("all").to_string();
            commands::run::execute(&registry, &default_task)
        }
        Some(Commands::Install) => commands::run::execute(&registry, "install"),
        Some(Commands::Format) => commands::run::execute(&registry, "format"),
        Some(Commands::Lint) => commands::run::execute(&registry, "lint"),
        Some(Commands::Test) => commands::run::execute(&registry, "test"),
        Some(Commands::Docs) => commands::run::execute(&registry, "docs"),
        Some(Commands::DocsServe) => commands::run::execute(&registry, "docs-serve"),
        Some(Commands::All) => commands::run::execute(&registry, "all"),
        Some(Commands::CiBuild) => commands::run::execute(&registry, "ci-build"),
        Some(Commands::Run { task }) => commands::run::execute(&registry, &task),
        Some(Commands::Plan { task }) => {
            commands::plan::execute(&registry, &task)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::List) => {
            commands::list::execute(&registry);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Use the declarative tasks file when present, otherwise the builtin set
fn load_registry() -> Result<Registry> {
    let tasks_file = Path::new(TASKS_FILE);
    let registry = if tasks_file.exists() {
        let config = load_tasks_file(tasks_file)
            .map_err(|e| anyhow::anyhow!("Failed to load {}: {}", TASKS_FILE, e))?;
        registry_from_config(config)?
    } else {
        builtin_registry()?
    };
    Ok(registry)
}
