// src/dag/scheduler.rs

use tracing::{debug, info, warn};

use crate::dag::graph::DependencyGraph;
use crate::dag::problem::SchedulingProblem;
use crate::dag::readiness::ready_tasks;
use crate::dag::schedule::{Schedule, ScheduleEntry, ScheduleOutcome, StallReport};
use crate::dag::scheduler_step::{SchedulerState, SchedulerStep};
use crate::dag::task_info::TaskIndex;
use crate::dag::timeline::{CompletionState, ResourceTimeline};

/// Greedy list scheduler.
///
/// Each step:
/// 1. recomputes the ready set (incomplete tasks whose dependencies are all
///    completed)
/// 2. orders it by ascending duration, then by task input order
/// 3. places each ready task, one at a time, on the resource with the
///    smallest free-at time (earliest listed resource on a tie), starting at
///    `max(resource free-at, latest dependency finish)`
///
/// Shared state is updated after every single placement, so a later task in
/// the same step sees the clocks moved by earlier ones.
///
/// This is a heuristic. Shortest-job-first plus least-loaded placement
/// produces a feasible schedule, not one with minimum makespan.
///
/// All working state belongs to one `Scheduler` value; nothing is shared
/// between invocations.
#[derive(Debug)]
pub struct Scheduler<'p> {
    problem: &'p SchedulingProblem,
    graph: DependencyGraph,
    timeline: ResourceTimeline,
    completion: CompletionState,
    schedule: Schedule,
    state: SchedulerState,
    steps_taken: usize,
}

impl<'p> Scheduler<'p> {
    /// Build the dependency graph and initialise every resource clock at 0.
    pub fn new(problem: &'p SchedulingProblem) -> Self {
        let graph = DependencyGraph::build(problem.tasks());
        let timeline = ResourceTimeline::new(problem.resources());
        let completion = CompletionState::new(problem.task_count());

        let state = if completion.all_completed() {
            SchedulerState::Done
        } else {
            SchedulerState::Running
        };

        debug!(
            tasks = graph.task_count(),
            edges = graph.edge_count(),
            dropped = graph.dropped_references().len(),
            resources = problem.resources().len(),
            "scheduler: dependency graph built"
        );

        Self {
            problem,
            graph,
            timeline,
            completion,
            schedule: Schedule::new(),
            state,
            steps_taken: 0,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn graph(&self) -> &DependencyGraph {
        &self.graph
    }

    pub fn timeline(&self) -> &ResourceTimeline {
        &self.timeline
    }

    /// Entries placed so far, in assignment order.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Upper bound on the number of steps a run can take.
    ///
    /// Every `Running` step either places at least one task or moves to
    /// `Stalled`, so `task_count + 1` steps always reach a terminal state.
    pub fn max_steps(&self) -> usize {
        self.problem.task_count() + 1
    }

    /// Run one readiness + assignment round.
    ///
    /// Calling this in a terminal state is a no-op that reports the current
    /// state.
    pub fn step(&mut self) -> SchedulerStep {
        if self.state.is_terminal() {
            return SchedulerStep {
                assigned: Vec::new(),
                state: self.state,
            };
        }

        self.steps_taken += 1;

        let mut ready = ready_tasks(&self.graph, &self.completion);
        if ready.is_empty() {
            self.state = SchedulerState::Stalled;
            warn!(
                step = self.steps_taken,
                completed = self.completion.completed_count(),
                total = self.completion.task_count(),
                "scheduler: no ready tasks while tasks remain; stalled"
            );
            return SchedulerStep {
                assigned: Vec::new(),
                state: self.state,
            };
        }

        ready.sort_by_key(|&index| (self.duration_of(index), index));

        let mut assigned = Vec::with_capacity(ready.len());
        for index in ready {
            if let Some(entry) = self.assign(index) {
                assigned.push(entry);
            }
        }

        if self.completion.all_completed() {
            self.state = SchedulerState::Done;
        }

        debug!(
            step = self.steps_taken,
            assigned = assigned.len(),
            state = ?self.state,
            "scheduler: step finished"
        );

        SchedulerStep {
            assigned,
            state: self.state,
        }
    }

    /// Drive the state machine to a terminal state and package the result.
    pub fn run(mut self) -> ScheduleOutcome {
        info!(
            tasks = self.problem.task_count(),
            resources = self.problem.resources().len(),
            "scheduler: starting run"
        );

        let max_steps = self.max_steps();
        while !self.state.is_terminal() && self.steps_taken < max_steps {
            self.step();
        }

        if !self.state.is_terminal() {
            // Unreachable if every step makes progress; treat as a stall
            // rather than loop on.
            warn!(
                max_steps,
                "scheduler: step limit reached before a terminal state; reporting stall"
            );
            self.state = SchedulerState::Stalled;
        }

        self.into_outcome()
    }

    /// Package the current state as an outcome without stepping further.
    ///
    /// A scheduler that is still `Running` is reported as stalled, with the
    /// remaining tasks listed as unscheduled.
    pub fn into_outcome(self) -> ScheduleOutcome {
        match self.state {
            SchedulerState::Done => {
                info!(
                    entries = self.schedule.len(),
                    makespan = self.schedule.makespan(),
                    "scheduler: all tasks scheduled"
                );
                ScheduleOutcome::Complete(self.schedule)
            }
            SchedulerState::Running | SchedulerState::Stalled => {
                let report = self.stall_report();
                warn!(
                    scheduled = self.schedule.len(),
                    unscheduled = ?report.unscheduled,
                    cycles = ?report.cycles,
                    "scheduler: returning partial schedule"
                );
                ScheduleOutcome::Stalled {
                    schedule: self.schedule,
                    report,
                }
            }
        }
    }

    fn stall_report(&self) -> StallReport {
        let unscheduled = self
            .completion
            .pending()
            .into_iter()
            .filter_map(|index| self.graph.task_id(index).map(str::to_string))
            .collect();

        let cycles = self
            .graph
            .cycles()
            .into_iter()
            .filter(|cycle| cycle.iter().all(|&i| !self.completion.is_completed(i)))
            .map(|cycle| {
                cycle
                    .into_iter()
                    .filter_map(|index| self.graph.task_id(index).map(str::to_string))
                    .collect()
            })
            .collect();

        StallReport {
            unscheduled,
            cycles,
        }
    }

    /// Place a single ready task and update resource and completion state.
    fn assign(&mut self, index: TaskIndex) -> Option<ScheduleEntry> {
        let task = self.problem.task(index)?;
        let position = self.timeline.least_loaded()?;
        let clock = self.timeline.clock(position)?;

        let deps_finish = self
            .graph
            .dependencies_of(index)
            .into_iter()
            .filter_map(|dep| self.completion.finish_time(dep))
            .max()
            .unwrap_or(0);

        let start = clock.free_at.max(deps_finish);
        // Never exceeds the problem's total duration, which fits in a u64.
        let finish = start + task.duration();

        let entry = ScheduleEntry {
            resource: clock.id.clone(),
            task: task.id().to_string(),
            start,
            finish,
        };

        debug!(
            task = %entry.task,
            resource = %entry.resource,
            start,
            finish,
            "assigned task"
        );

        self.timeline.occupy_until(position, finish);
        self.completion.record(index, finish);
        self.schedule.push(entry.clone());

        Some(entry)
    }

    fn duration_of(&self, index: TaskIndex) -> u64 {
        self.problem.task(index).map_or(0, |t| t.duration())
    }
}
