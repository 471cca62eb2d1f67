// src/config/loader.rs

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::Result;
use crate::types::UnknownDependencyPolicy;

/// Load a task file from a given path and return the raw `RawConfigFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation. Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let config: RawConfigFile = toml::from_str(&contents)?;
    debug!(path = ?path, tasks = config.task.len(), "task file parsed");

    Ok(config)
}

/// Load a task file from path and validate it into a scheduling problem.
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Rejects empty task lists, empty or duplicate resource names, empty or
///   duplicate task ids, zero durations and (under the `reject` policy)
///   unknown dependencies.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<ConfigFile> {
    load_with_policy(path, None)
}

/// Like [`load_and_validate`], but `policy` (when given) replaces
/// `[config].unknown_dependencies` from the file.
pub fn load_with_policy(
    path: impl AsRef<Path>,
    policy: Option<UnknownDependencyPolicy>,
) -> Result<ConfigFile> {
    let mut raw_config = load_from_path(&path)?;
    if let Some(policy) = policy {
        raw_config.config.unknown_dependencies = policy;
    }
    let config = ConfigFile::try_from(raw_config)?;
    Ok(config)
}

