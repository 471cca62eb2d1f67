// src/dag/problem.rs

//! Validated scheduling input.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::dag::task_info::{ResourceId, TaskIndex, TaskSpec};
use crate::errors::{Result, SchedagError};
use crate::types::UnknownDependencyPolicy;

/// An immutable scheduling problem: ordered tasks, ordered resources and the
/// unknown-dependency policy.
///
/// Construction performs every "malformed input" check up front, so once a
/// `SchedulingProblem` exists the scheduler can run without failing:
/// - at least one resource, each with a non-empty unique name (names are
///   stored with surrounding whitespace stripped)
/// - unique task identifiers (empty ids and zero durations are already
///   rejected by [`TaskSpec::new`])
/// - under [`UnknownDependencyPolicy::Reject`], every dependency names a
///   known task
/// - the sum of all durations fits in a `u64`; no start or finish time can
///   exceed that sum, so the scheduler's arithmetic cannot overflow
///
/// Cycles (including a task depending on itself) are *not* rejected here;
/// they surface as a stalled outcome.
#[derive(Debug, Clone, Serialize)]
pub struct SchedulingProblem {
    tasks: Vec<TaskSpec>,
    resources: Vec<ResourceId>,
    unknown_dependencies: UnknownDependencyPolicy,
}

impl SchedulingProblem {
    pub fn new(
        tasks: Vec<TaskSpec>,
        resources: Vec<ResourceId>,
        unknown_dependencies: UnknownDependencyPolicy,
    ) -> Result<Self> {
        let resources: Vec<ResourceId> = resources
            .into_iter()
            .map(|name| name.trim().to_string())
            .collect();
        validate_resources(&resources)?;
        let known = validate_task_ids(&tasks)?;
        let total = total_duration(&tasks)?;

        if unknown_dependencies == UnknownDependencyPolicy::Reject {
            for task in &tasks {
                if let Some(dep) = task
                    .dependencies()
                    .iter()
                    .find(|dep| !known.contains(dep.as_str()))
                {
                    return Err(SchedagError::UnknownDependency {
                        task: task.id().to_string(),
                        dependency: dep.clone(),
                    });
                }
            }
        }

        debug!(
            tasks = tasks.len(),
            resources = resources.len(),
            total_duration = total,
            policy = %unknown_dependencies,
            "scheduling problem validated"
        );

        Ok(Self {
            tasks,
            resources,
            unknown_dependencies,
        })
    }

    pub fn tasks(&self) -> &[TaskSpec] {
        &self.tasks
    }

    pub fn task(&self, index: TaskIndex) -> Option<&TaskSpec> {
        self.tasks.get(index)
    }

    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    pub fn resources(&self) -> &[ResourceId] {
        &self.resources
    }

    pub fn unknown_dependencies(&self) -> UnknownDependencyPolicy {
        self.unknown_dependencies
    }
}

fn validate_resources(resources: &[ResourceId]) -> Result<()> {
    if resources.is_empty() {
        return Err(SchedagError::EmptyResources);
    }

    let mut seen = HashSet::new();
    for name in resources {
        if name.is_empty() {
            return Err(SchedagError::InvalidResource(
                "resource name must not be empty".to_string(),
            ));
        }
        if !seen.insert(name.as_str()) {
            return Err(SchedagError::DuplicateResource(name.clone()));
        }
    }
    Ok(())
}

fn validate_task_ids(tasks: &[TaskSpec]) -> Result<HashSet<&str>> {
    let mut known = HashSet::new();
    for task in tasks {
        if !known.insert(task.id()) {
            return Err(SchedagError::DuplicateTask(task.id().to_string()));
        }
    }
    Ok(known)
}

fn total_duration(tasks: &[TaskSpec]) -> Result<u64> {
    tasks.iter().try_fold(0u64, |total, task| {
        total.checked_add(task.duration()).ok_or_else(|| {
            SchedagError::InvalidTask(format!(
                "total duration overflows at task '{}' (duration {})",
                task.id(),
                task.duration()
            ))
        })
    })
}
