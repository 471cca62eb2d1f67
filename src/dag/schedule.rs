// src/dag/schedule.rs

//! The scheduling result: entries in assignment order, plus the outcome
//! wrapper that distinguishes a complete schedule from a stalled one.

use serde::Serialize;

use crate::dag::task_info::{ResourceId, TaskId};

/// One task placed on one resource over `[start, finish)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    pub resource: ResourceId,
    pub task: TaskId,
    pub start: u64,
    pub finish: u64,
}

impl ScheduleEntry {
    pub fn duration(&self) -> u64 {
        self.finish - self.start
    }
}

/// Schedule entries in the order they were assigned (which is not
/// necessarily start-time order).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    entries: Vec<ScheduleEntry>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, entry: ScheduleEntry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ScheduleEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Latest finish time over all entries (0 for an empty schedule).
    pub fn makespan(&self) -> u64 {
        self.entries.iter().map(|e| e.finish).max().unwrap_or(0)
    }

    /// Entries placed on `resource`, in assignment order.
    pub fn entries_for_resource<'a>(
        &'a self,
        resource: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleEntry> + 'a {
        self.entries.iter().filter(move |e| e.resource == resource)
    }

    pub fn entry_for_task(&self, task: &str) -> Option<&ScheduleEntry> {
        self.entries.iter().find(|e| e.task == task)
    }

    pub fn finish_time_of(&self, task: &str) -> Option<u64> {
        self.entry_for_task(task).map(|e| e.finish)
    }
}

/// Why a run could not place every task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StallReport {
    /// Tasks never scheduled, in task input order.
    pub unscheduled: Vec<TaskId>,
    /// Dependency cycles among the unscheduled tasks. Tasks that are only
    /// blocked because something upstream is in a cycle appear in
    /// `unscheduled` but in no cycle here.
    pub cycles: Vec<Vec<TaskId>>,
}

/// Result of running the scheduler on a valid problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleOutcome {
    /// Every task was placed.
    Complete(Schedule),
    /// Incomplete tasks remained but none were ready. `schedule` holds what
    /// was placed before the stall.
    Stalled {
        schedule: Schedule,
        report: StallReport,
    },
}

impl ScheduleOutcome {
    pub fn is_complete(&self) -> bool {
        matches!(self, ScheduleOutcome::Complete(_))
    }

    pub fn is_stalled(&self) -> bool {
        matches!(self, ScheduleOutcome::Stalled { .. })
    }

    /// The (possibly partial) schedule.
    pub fn schedule(&self) -> &Schedule {
        match self {
            ScheduleOutcome::Complete(schedule) => schedule,
            ScheduleOutcome::Stalled { schedule, .. } => schedule,
        }
    }

    pub fn stall_report(&self) -> Option<&StallReport> {
        match self {
            ScheduleOutcome::Complete(_) => None,
            ScheduleOutcome::Stalled { report, .. } => Some(report),
        }
    }

    pub fn into_schedule(self) -> Schedule {
        match self {
            ScheduleOutcome::Complete(schedule) => schedule,
            ScheduleOutcome::Stalled { schedule, .. } => schedule,
        }
    }
}

/// Load figures for a single resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceStats {
    pub resource: ResourceId,
    pub tasks: usize,
    pub busy: u64,
    pub idle: u64,
    /// `busy / makespan`, or 0.0 for an empty schedule.
    pub utilization: f64,
}

/// Summary figures for a schedule.
///
/// Idle time is measured against the makespan, so a resource that finishes
/// early counts the remainder as idle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleStats {
    pub makespan: u64,
    pub total_busy: u64,
    pub avg_utilization: f64,
    pub resources: Vec<ResourceStats>,
}

impl ScheduleStats {
    /// Computes figures for every resource in `resources`, including ones
    /// that received no work.
    pub fn calculate(schedule: &Schedule, resources: &[ResourceId]) -> Self {
        let makespan = schedule.makespan();

        let per_resource: Vec<ResourceStats> = resources
            .iter()
            .map(|resource| {
                let (tasks, busy) = schedule
                    .entries_for_resource(resource)
                    .fold((0usize, 0u64), |(n, busy), e| (n + 1, busy + e.duration()));
                let utilization = if makespan == 0 {
                    0.0
                } else {
                    busy as f64 / makespan as f64
                };
                ResourceStats {
                    resource: resource.clone(),
                    tasks,
                    busy,
                    idle: makespan.saturating_sub(busy),
                    utilization,
                }
            })
            .collect();

        let total_busy = per_resource.iter().map(|r| r.busy).sum();
        let avg_utilization = if per_resource.is_empty() {
            0.0
        } else {
            per_resource.iter().map(|r| r.utilization).sum::<f64>() / per_resource.len() as f64
        };

        Self {
            makespan,
            total_busy,
            avg_utilization,
            resources: per_resource,
        }
    }
}
