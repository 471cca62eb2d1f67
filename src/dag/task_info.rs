// src/dag/task_info.rs

//! Task records and the identifiers used throughout scheduling.

use serde::Serialize;

use crate::errors::{Result, SchedagError};

/// Unique, non-empty task identifier.
pub type TaskId = String;

/// Unique, non-empty resource identifier.
pub type ResourceId = String;

/// Position of a task in the problem's input order.
///
/// The dependency graph uses the same numbering for its nodes, and this is
/// the secondary key when two ready tasks have equal duration.
pub type TaskIndex = usize;

/// A task definition: immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskSpec {
    id: TaskId,
    duration: u64,
    /// Dependencies in the order they were listed. May name unknown tasks;
    /// what happens to those is decided by the problem's
    /// [`UnknownDependencyPolicy`](crate::types::UnknownDependencyPolicy).
    dependencies: Vec<TaskId>,
}

impl TaskSpec {
    /// Build a task, rejecting an empty identifier or a zero duration.
    ///
    /// Surrounding whitespace is stripped from the identifier and from every
    /// dependency, so `" T1"` and `"T1"` name the same task.
    pub fn new<I, S>(id: impl Into<TaskId>, duration: u64, dependencies: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<TaskId>,
    {
        let id: TaskId = id.into();
        let id = id.trim().to_string();
        if id.is_empty() {
            return Err(SchedagError::InvalidTask(
                "task identifier must not be empty".to_string(),
            ));
        }
        if duration == 0 {
            return Err(SchedagError::InvalidTask(format!(
                "task '{}' must have a positive duration (got 0)",
                id
            )));
        }

        Ok(Self {
            id,
            duration,
            dependencies: dependencies
                .into_iter()
                .map(|dep| Into::<TaskId>::into(dep).trim().to_string())
                .collect(),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn dependencies(&self) -> &[TaskId] {
        &self.dependencies
    }
}
