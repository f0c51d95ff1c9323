//! Makeshift Core Library
//!
//! This is the core library for the makeshift task runner. It provides the
//! task registry, dependency resolution, and command execution used by the
//! `makeshift` binary.
//!
//! ## Architecture
//!
//! The core library is organized into several modules:
//!
//! - [`registry`] - Task model, registry, and depth-first plan resolution
//! - [`execution`] - Plan execution through an executor capability
//! - [`builtin`] - The builtin task set for a uv-managed Python project
//! - [`configs`] - Declarative task file parsing
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
//!
//! ```rust,no_run
//! use makeshift_core::builtin::builtin_registry;
//! use makeshift_core::execution::{SystemExecutor, TaskRunner};
//!
//! # fn example() -> makeshift_core::types::TaskResult<()> {
//! let registry = builtin_registry()?;
//! let runner = TaskRunner::new(&registry);
//! runner.run("lint", &mut SystemExecutor)?;
//! # Ok(())
//! # }
//! ```

pub mod builtin;
pub mod configs;
pub mod execution;
pub mod registry;
pub mod types;

// Re-export the main types for easier usage
pub use registry::{CommandSpec, ExecutionPlan, Registry, Task};
pub use types::{TaskError, TaskResult};
