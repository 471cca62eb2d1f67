// src/dag/scheduler_step.rs

//! Step-by-step execution result types for the scheduler.

use crate::dag::schedule::ScheduleEntry;

/// Where the scheduler's state machine currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Some tasks are still incomplete.
    Running,
    /// Every task has been placed.
    Done,
    /// Incomplete tasks remain but none of them are ready. Terminal.
    Stalled,
}

impl SchedulerState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SchedulerState::Running)
    }
}

/// Structured result of a single scheduler "step".
///
/// This is useful for tests that want to manually step the scheduler and
/// make assertions about what changed.
#[derive(Debug, Clone)]
pub struct SchedulerStep {
    /// Entries placed during this step, in assignment order.
    pub assigned: Vec<ScheduleEntry>,
    /// State after the step.
    pub state: SchedulerState,
}
