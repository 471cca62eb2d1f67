// src/dag/timeline.rs

//! Incremental bookkeeping for a single scheduling invocation: resource
//! free-at clocks and recorded task finish times.

use tracing::warn;

use crate::dag::task_info::{ResourceId, TaskIndex};

/// One resource and the earliest time it can start new work.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceClock {
    pub id: ResourceId,
    pub free_at: u64,
}

/// Free-at clocks for every resource, kept in resource input order.
#[derive(Debug, Clone)]
pub struct ResourceTimeline {
    clocks: Vec<ResourceClock>,
}

impl ResourceTimeline {
    /// Every clock starts at 0.
    pub fn new(resources: &[ResourceId]) -> Self {
        Self {
            clocks: resources
                .iter()
                .map(|id| ResourceClock {
                    id: id.clone(),
                    free_at: 0,
                })
                .collect(),
        }
    }

    /// Position of the resource with the smallest free-at time; the earliest
    /// listed resource wins a tie. `None` only for an empty timeline.
    pub fn least_loaded(&self) -> Option<usize> {
        self.clocks
            .iter()
            .enumerate()
            .min_by_key(|(position, clock)| (clock.free_at, *position))
            .map(|(position, _)| position)
    }

    pub fn clock(&self, position: usize) -> Option<&ResourceClock> {
        self.clocks.get(position)
    }

    pub fn clocks(&self) -> &[ResourceClock] {
        &self.clocks
    }

    /// Advance a resource's clock to the finish time of the task just placed
    /// on it. Clocks only move forward.
    pub fn occupy_until(&mut self, position: usize, finish: u64) {
        if let Some(clock) = self.clocks.get_mut(position) {
            debug_assert!(finish >= clock.free_at, "resource clock moved backwards");
            clock.free_at = clock.free_at.max(finish);
        }
    }
}

/// Finish times of completed tasks, indexed by [`TaskIndex`].
///
/// Grows monotonically: once a finish time is recorded it is never changed.
#[derive(Debug, Clone)]
pub struct CompletionState {
    finish_times: Vec<Option<u64>>,
    completed: usize,
}

impl CompletionState {
    pub fn new(task_count: usize) -> Self {
        Self {
            finish_times: vec![None; task_count],
            completed: 0,
        }
    }

    pub fn is_completed(&self, index: TaskIndex) -> bool {
        self.finish_time(index).is_some()
    }

    pub fn finish_time(&self, index: TaskIndex) -> Option<u64> {
        self.finish_times.get(index).copied().flatten()
    }

    /// Mark a task completed at `finish`.
    ///
    /// Returns `false` (and records nothing) if the task was already
    /// completed or the index is out of range.
    pub fn record(&mut self, index: TaskIndex, finish: u64) -> bool {
        let Some(slot) = self.finish_times.get_mut(index) else {
            return false;
        };

        if let Some(existing) = *slot {
            warn!(
                task_index = index,
                existing,
                "ignoring second completion for an already completed task"
            );
            return false;
        }

        *slot = Some(finish);
        self.completed += 1;
        true
    }

    pub fn completed_count(&self) -> usize {
        self.completed
    }

    pub fn task_count(&self) -> usize {
        self.finish_times.len()
    }

    pub fn all_completed(&self) -> bool {
        self.completed == self.finish_times.len()
    }

    /// Tasks not yet completed, in input order.
    pub fn pending(&self) -> Vec<TaskIndex> {
        self.finish_times
            .iter()
            .enumerate()
            .filter(|(_, finish)| finish.is_none())
            .map(|(index, _)| index)
            .collect()
    }
}
