//! Error types for roster-core.

use std::path::PathBuf;

use thiserror::Error;

/// Input table does not satisfy the required-column schema.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    /// One or more required columns are absent. Lists all of them, not just
    /// the first, so the operator can fix the file in one pass.
    #[error("missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
}

/// All errors that can arise from config file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure (file not found, permission denied, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error (write/save path).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// YAML parse error on load — includes file path and line context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// `dirs::home_dir()` returned `None` — cannot locate `~/.roster/`.
    #[error("cannot determine home directory; set $HOME or equivalent")]
    HomeNotFound,
}
