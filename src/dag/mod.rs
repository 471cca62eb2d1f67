// src/dag/mod.rs

//! Dependency graph and greedy list scheduling.
//!
//! - [`task_info`] defines task records and identifiers.
//! - [`problem`] validates the input before anything is scheduled.
//! - [`graph`] builds the dependency graph (dependency -> dependent).
//! - [`readiness`] computes which tasks can be placed next.
//! - [`timeline`] tracks resource clocks and task finish times.
//! - [`scheduler`] contains the state machine that places ready tasks.
//! - [`scheduler_step`] defines the result type for scheduler steps.
//! - [`schedule`] holds the produced entries and the run outcome.

pub mod graph;
pub mod problem;
pub mod readiness;
pub mod schedule;
pub mod scheduler;
pub mod scheduler_step;
pub mod task_info;
pub mod timeline;

pub use graph::{DependencyGraph, DroppedReference};
pub use problem::SchedulingProblem;
pub use readiness::ready_tasks;
pub use schedule::{
    ResourceStats, Schedule, ScheduleEntry, ScheduleOutcome, ScheduleStats, StallReport,
};
pub use scheduler::Scheduler;
pub use scheduler_step::{SchedulerState, SchedulerStep};
pub use task_info::{ResourceId, TaskId, TaskIndex, TaskSpec};
pub use timeline::{CompletionState, ResourceClock, ResourceTimeline};
