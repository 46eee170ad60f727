use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a tool backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("{0} was not found on PATH")]
    NotFound(String),

    #[error("no installer configured for {0}")]
    NoInstaller(String),

    #[error("{tool} exited with code {code:?}")]
    ExitStatus { tool: String, code: Option<i32> },

    #[error("failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool}: {message}")]
    Failed { tool: String, message: String },
}

impl BackendError {
    pub fn failed<T: Into<String>, M: Into<String>>(tool: T, message: M) -> Self {
        BackendError::Failed {
            tool: tool.into(),
            message: message.into(),
        }
    }
}

/// Failures while reading the YAML config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// A menu answer outside the enumerated choices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("'{0}' is not a category or command")]
    UnknownCategory(String),

    #[error("'{tool}' is not a tool in {category}")]
    UnknownTool { category: String, tool: String },
}
