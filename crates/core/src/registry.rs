//! Task registry and dependency resolution
//!
//! This module holds the declarative task model: named tasks with prerequisite
//! edges and ordered command sequences, plus the depth-first resolution that
//! turns a requested task name into a linear, deduplicated execution plan.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::types::{TaskError, TaskResult};

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Environment overrides applied on top of the inherited environment
    pub env: Vec<(String, String)>,
    /// Advisory commands warn on failure instead of aborting the run
    pub advisory: bool,
    /// Installation hint printed when an advisory command fails
    pub hint: Option<String>,
}

impl CommandSpec {
    pub fn new<S, I>(program: &str, args: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = S>,
    {
        Self {
            program: program.to_string(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
            advisory: false,
            hint: None,
        }
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }

    /// Mark this command as advisory, with a hint shown when it fails
    pub fn advisory(mut self, hint: &str) -> Self {
        self.advisory = true;
        self.hint = Some(hint.to_string());
        self
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// A named unit of work with prerequisites and a command sequence
#[derive(Debug, Clone)]
pub struct Task {
    pub name: String,
    pub description: String,
    pub prerequisites: Vec<String>,
    pub commands: Vec<CommandSpec>,
}

impl Task {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            prerequisites: Vec::new(),
            commands: Vec::new(),
        }
    }

    pub fn prerequisite(mut self, name: &str) -> Self {
        self.prerequisites.push(name.to_string());
        self
    }

    pub fn command(mut self, command: CommandSpec) -> Self {
        self.commands.push(command);
        self
    }
}

/// The linear, deduplicated, dependency-respecting order in which tasks run
/// for one invocation
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub task_name: String,
    pub order: Vec<String>,
}

/// Insertion-ordered collection of uniquely named tasks
#[derive(Debug, Default)]
pub struct Registry {
    tasks: Vec<Task>,
    index: HashMap<String, usize>,
    default_task: Option<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the registry, rejecting duplicate names
    pub fn register(&mut self, task: Task) -> TaskResult<()> {
        if self.index.contains_key(&task.name) {
            return Err(TaskError::DuplicateTask(task.name));
        }
        self.index.insert(task.name.clone(), self.tasks.len());
        self.tasks.push(task);
        Ok(())
    }

    /// Record the task run when no task name is given
    pub fn set_default(&mut self, name: &str) -> TaskResult<()> {
        if !self.index.contains_key(name) {
            return Err(self.unknown(name));
        }
        self.default_task = Some(name.to_string());
        Ok(())
    }

    pub fn default_task(&self) -> Option<&str> {
        self.default_task.as_deref()
    }

    pub fn get(&self, name: &str) -> Option<&Task> {
        self.index.get(name).map(|&i| &self.tasks[i])
    }

    /// Produce (name, description) pairs in registration order
    pub fn list(&self) -> impl Iterator<Item = (&str, &str)> {
        self.tasks
            .iter()
            .map(|task| (task.name.as_str(), task.description.as_str()))
    }

    /// Resolve the execution order for a task: prerequisites before
    /// dependents, depth-first, each task included at most once
    pub fn resolve(&self, name: &str) -> TaskResult<ExecutionPlan> {
        let mut stack = Vec::new();
        let mut done = HashSet::new();
        let mut order = Vec::new();
        self.visit(name, &mut stack, &mut done, &mut order)?;
        Ok(ExecutionPlan {
            task_name: name.to_string(),
            order,
        })
    }

    /// Resolve every registered task, surfacing configuration errors
    /// (cycles, missing prerequisites) before anything runs
    pub fn self_check(&self) -> TaskResult<()> {
        for task in &self.tasks {
            self.resolve(&task.name)?;
        }
        Ok(())
    }

    fn visit(
        &self,
        name: &str,
        stack: &mut Vec<String>,
        done: &mut HashSet<String>,
        order: &mut Vec<String>,
    ) -> TaskResult<()> {
        if done.contains(name) {
            return Ok(());
        }
        // A task already on the traversal path means the prerequisite
        // relation loops back on itself
        if let Some(pos) = stack.iter().position(|entry| entry == name) {
            let mut path: Vec<String> = stack[pos..].to_vec();
            path.push(name.to_string());
            return Err(TaskError::CyclicDependency { path });
        }
        let task = self.get(name).ok_or_else(|| self.unknown(name))?;
        stack.push(name.to_string());
        for prerequisite in &task.prerequisites {
            self.visit(prerequisite, stack, done, order)?;
        }
        stack.pop();
        done.insert(name.to_string());
        order.push(name.to_string());
        Ok(())
    }

    fn unknown(&self, name: &str) -> TaskError {
        TaskError::UnknownTask {
            name: name.to_string(),
            known: self.tasks.iter().map(|task| task.name.clone()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry(tasks: &[(&str, &[&str])]) -> Registry {
        let mut registry = Registry::new();
        for (name, prerequisites) in tasks {
            let mut task = Task::new(name, "");
            for prerequisite in *prerequisites {
                task = task.prerequisite(prerequisite);
            }
            registry.register(task).unwrap();
        }
        registry
    }

    #[test]
    fn test_resolve_orders_prerequisites_first() {
        let registry = registry(&[("a", &[]), ("b", &["a"]), ("c", &["b", "a"])]);
        let plan = registry.resolve("c").unwrap();
        assert_eq!(plan.order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_resolve_deduplicates_shared_prerequisites() {
        // Diamond: d depends on b and c, both of which depend on a
        let registry = registry(&[("a", &[]), ("b", &["a"]), ("c", &["a"]), ("d", &["b", "c"])]);
        let plan = registry.resolve("d").unwrap();
        assert_eq!(plan.order, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_resolve_unknown_task_lists_known_names() {
        let registry = registry(&[("build", &[]), ("test", &["build"])]);
        let err = registry.resolve("deploy").unwrap_err();
        match err {
            TaskError::UnknownTask { name, known } => {
                assert_eq!(name, "deploy");
                assert_eq!(known, vec!["build", "test"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_unknown_prerequisite() {
        let registry = registry(&[("test", &["build"])]);
        let err = registry.resolve("test").unwrap_err();
        assert!(matches!(err, TaskError::UnknownTask { name, .. } if name == "build"));
    }

    #[test]
    fn test_resolve_detects_cycle() {
        let registry = registry(&[("a", &["b"]), ("b", &["c"]), ("c", &["a"])]);
        let err = registry.resolve("a").unwrap_err();
        match err {
            TaskError::CyclicDependency { path } => {
                assert_eq!(path, vec!["a", "b", "c", "a"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_resolve_allows_shared_but_acyclic_reuse() {
        let registry = registry(&[("a", &[]), ("b", &["a", "a"])]);
        let plan = registry.resolve("b").unwrap();
        assert_eq!(plan.order, vec!["a", "b"]);
    }

    #[test]
    fn test_register_rejects_duplicate_names() {
        let mut registry = registry(&[("build", &[])]);
        let err = registry.register(Task::new("build", "again")).unwrap_err();
        assert!(matches!(err, TaskError::DuplicateTask(name) if name == "build"));
    }

    #[test]
    fn test_self_check_flags_cycles() {
        let registry = registry(&[("ok", &[]), ("a", &["b"]), ("b", &["a"])]);
        assert!(matches!(
            registry.self_check(),
            Err(TaskError::CyclicDependency { .. })
        ));
    }

    #[test]
    fn test_list_is_restartable_and_insertion_ordered() {
        let mut registry = Registry::new();
        registry.register(Task::new("format", "Format the code")).unwrap();
        registry.register(Task::new("lint", "Lint the code")).unwrap();
        registry.register(Task::new("test", "Run the tests")).unwrap();

        let first: Vec<_> = registry.list().collect();
        let second: Vec<_> = registry.list().collect();
        assert_eq!(
            first,
            vec![
                ("format", "Format the code"),
                ("lint", "Lint the code"),
                ("test", "Run the tests"),
            ]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_set_default_requires_known_task() {
        let mut registry = registry(&[("all", &[])]);
        assert!(registry.set_default("missing").is_err());
        registry.set_default("all").unwrap();
        assert_eq!(registry.default_task(), Some("all"));
    }
}
