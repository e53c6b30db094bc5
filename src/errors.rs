// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum HuschedError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// The edge list could not be read as integer pairs.
    #[error("Malformed input at line {line} ({content:?}): {reason}")]
    MalformedInput {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Duplicate task: {0}")]
    DuplicateTask(TaskId),

    #[error("Dangling edge {from} -> {to}: task {missing} is unknown")]
    DanglingEdge {
        from: TaskId,
        to: TaskId,
        missing: TaskId,
    },

    /// Not an in-tree, out-tree, in-forest or out-forest (or cyclic).
    #[error("Unsupported topology: {0}")]
    UnsupportedTopology(String),

    #[error("Invalid machine count: {0} (must be >= 1)")]
    InvalidMachineCount(i64),

    /// File-system failures (read through the `FileSystem` seam) and other
    /// context-carrying errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, HuschedError>;
