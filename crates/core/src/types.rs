use thiserror::Error;

/// The main error type for makeshift operations
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Task '{0}' is already registered")]
    DuplicateTask(String),

    #[error("Task '{name}' not found. Available tasks: {}", known.join(", "))]
    UnknownTask { name: String, known: Vec<String> },

    #[error("Cyclic task dependency: {}", path.join(" -> "))]
    CyclicDependency { path: Vec<String> },

    #[error("Failed to spawn '{command}' for task '{task}': {source}")]
    CommandSpawn {
        task: String,
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Command '{command}' in task '{task}' failed with exit code {code}")]
    CommandFailed {
        task: String,
        command: String,
        code: i32,
    },
}

/// Result type alias for makeshift operations
pub type TaskResult<T> = Result<T, TaskError>;
