//! Builtin task set
//!
//! The default registry for a uv-managed Python library project: environment
//! setup, formatting, linting, tests, and documentation builds, each shelling
//! out to the project's external toolchain (uv, pre-commit, ruff, pytest,
//! mkdocs).

use crate::registry::{CommandSpec, Registry, Task};
use crate::types::TaskResult;

const UV_HINT: &str =
    "Please install uv: https://docs.astral.sh/uv/getting-started/installation/";
const PRE_COMMIT_HINT: &str = "Please install pre-commit: https://pre-commit.com/";

/// Build the builtin registry. The default task is `all`.
pub fn builtin_registry() -> TaskResult<Registry> {
    let mut registry = Registry::new();

    registry.register(
        Task::new("check-uv", "Check that uv is installed")
            .command(CommandSpec::new("uv", ["--version"]).advisory(UV_HINT)),
    )?;
    registry.register(
        Task::new("check-pre-commit", "Check that pre-commit is installed")
            .command(CommandSpec::new("pre-commit", ["--version"]).advisory(PRE_COMMIT_HINT)),
    )?;

    registry.register(
        Task::new("install", "Install dependencies and pre-commit hooks")
            .prerequisite("check-uv")
            .prerequisite("check-pre-commit")
            .command(CommandSpec::new("uv", ["python", "find"]))
            .command(CommandSpec::new("uv", ["sync", "--frozen", "--all-extras"]))
            .command(CommandSpec::new(
                "pre-commit",
                ["install", "--install-hooks"],
            )),
    )?;

    registry.register(
        Task::new("format", "Format the code")
            .command(CommandSpec::new("uv", ["run", "ruff", "format"]))
            .command(CommandSpec::new("uv", ["run", "ruff", "check", "--fix"])),
    )?;

    // lint deliberately re-invokes ruff even when format already ran in the
    // same plan; runs are never cached across sibling tasks
    registry.register(
        Task::new("lint", "Lint the code")
            .command(CommandSpec::new("uv", ["run", "ruff", "check"]))
            .command(CommandSpec::new("uv", ["run", "ruff", "format", "--check"])),
    )?;

    registry.register(
        Task::new("test", "Run the tests").command(CommandSpec::new("uv", ["run", "pytest"])),
    )?;

    registry.register(
        Task::new("docs", "Build the documentation")
            .command(CommandSpec::new("uv", ["run", "mkdocs", "build"])),
    )?;
    registry.register(
        Task::new("docs-serve", "Build and serve the documentation")
            .command(CommandSpec::new("uv", ["run", "mkdocs", "serve"])),
    )?;

    registry.register(
        Task::new("all", "Format, lint, and test")
            .prerequisite("format")
            .prerequisite("lint")
            .prerequisite("test"),
    )?;

    registry.register(
        Task::new("ci-build", "Build the documentation site for CI")
            .command(CommandSpec::new("python3", ["-V"]))
            .command(CommandSpec::new("python3", ["-m", "pip", "install", "uv"]))
            .command(CommandSpec::new("uv", ["sync", "--frozen"]).env("UV_PYTHON", "3.12"))
            .command(
                CommandSpec::new("uv", ["sync", "--frozen", "--group", "docs"])
                    .env("UV_PYTHON", "3.12"),
            )
            .command(CommandSpec::new(
                "uv",
                ["pip", "install", "mkdocs-material", "mkdocstrings-python"],
            ))
            .command(CommandSpec::new("uv", ["run", "--no-sync", "mkdocs", "build"])),
    )?;

    registry.set_default("all")?;
    registry.self_check()?;
    Ok(registry)
}
