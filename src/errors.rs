// src/errors.rs

//! Crate-wide error type.
//!
//! Every variant here means "the input was rejected before scheduling
//! started". A stalled schedule is not an error; see
//! [`crate::dag::ScheduleOutcome`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SchedagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Resource list must contain at least one resource")]
    EmptyResources,

    #[error("Invalid resource: {0}")]
    InvalidResource(String),

    #[error("Duplicate resource: {0}")]
    DuplicateResource(String),

    #[error("Invalid task: {0}")]
    InvalidTask(String),

    #[error("Duplicate task: {0}")]
    DuplicateTask(String),

    #[error("Task '{task}' depends on unknown task '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchedagError>;
