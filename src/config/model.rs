// src/config/model.rs

use serde::Deserialize;

use crate::dag::SchedulingProblem;
use crate::types::UnknownDependencyPolicy;

/// Task file exactly as read from TOML, before validation.
///
/// ```toml
/// resources = ["M1", "M2"]
///
/// [config]
/// unknown_dependencies = "reject"
///
/// [[task]]
/// id = "T1"
/// duration = 3
///
/// [[task]]
/// id = "T3"
/// duration = 1
/// after = ["T1"]
/// ```
///
/// Tasks are an array of tables so that their order in the file is kept;
/// that order breaks ties between tasks of equal duration.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Resource names, in priority order for tie-breaking.
    #[serde(default)]
    pub resources: Vec<String>,

    /// Behaviour options from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[[task]]`.
    #[serde(default)]
    pub task: Vec<TaskConfig>,
}

/// `[config]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigSection {
    /// `"reject"` (default) or `"ignore"`.
    #[serde(default)]
    pub unknown_dependencies: UnknownDependencyPolicy,
}

/// `[[task]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskConfig {
    pub id: String,

    /// Positive duration in time units.
    pub duration: u64,

    /// Tasks that must finish before this one starts.
    #[serde(default, alias = "dependencies")]
    pub after: Vec<String>,
}

/// A validated task file.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see `validate.rs`), so
/// holding one means the embedded problem passed every input check.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    problem: SchedulingProblem,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(problem: SchedulingProblem) -> Self {
        Self { problem }
    }

    pub fn problem(&self) -> &SchedulingProblem {
        &self.problem
    }
}
