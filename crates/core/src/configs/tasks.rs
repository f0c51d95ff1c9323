use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::registry::{CommandSpec, Registry, Task};
use crate::types::TaskResult;

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CommandConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub advisory: bool,
    pub hint: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TaskConfig {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub prerequisites: Vec<String>,
    #[serde(default)]
    pub commands: Vec<CommandConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TasksFileConfig {
    pub default_task: Option<String>,
    pub tasks: Vec<TaskConfig>,
}

impl From<CommandConfig> for CommandSpec {
    fn from(config: CommandConfig) -> Self {
        Self {
            program: config.program,
            args: config.args,
            env: config.env.into_iter().collect(),
            advisory: config.advisory,
            hint: config.hint,
        }
    }
}

impl From<TaskConfig> for Task {
    fn from(config: TaskConfig) -> Self {
        Self {
            name: config.name,
            description: config.description.unwrap_or_default(),
            prerequisites: config.prerequisites,
            commands: config.commands.into_iter().map(Into::into).collect(),
        }
    }
}

pub fn parse_tasks_config(yaml_str: &str) -> TaskResult<TasksFileConfig> {
    let config: TasksFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

pub fn load_tasks_file(path: &Path) -> TaskResult<TasksFileConfig> {
    let contents = std::fs::read_to_string(path)?;
    parse_tasks_config(&contents)
}

/// Build a registry from a parsed tasks file. Duplicate names and an
/// unknown default task are rejected as usual.
pub fn registry_from_config(config: TasksFileConfig) -> TaskResult<Registry> {
    let mut registry = Registry::new();
    for task in config.tasks {
        registry.register(task.into())?;
    }
    if let Some(default_task) = &config.default_task {
        registry.set_default(default_task)?;
    }
    Ok(registry)
}
