// src/report.rs

//! Rendering of scheduling results for the CLI.
//!
//! The table output is meant for people; the JSON output is a stable shape
//! for other tools to consume.

use std::fmt::Write as _;

use serde::Serialize;

use crate::dag::{
    Schedule, ScheduleEntry, ScheduleOutcome, ScheduleStats, SchedulingProblem, StallReport,
};
use crate::errors::Result;

/// Serializable view of a finished run.
#[derive(Debug, Serialize)]
pub struct ScheduleReport<'a> {
    pub status: &'static str,
    pub entries: &'a [ScheduleEntry],
    pub stats: ScheduleStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stall: Option<&'a StallReport>,
}

impl<'a> ScheduleReport<'a> {
    pub fn new(outcome: &'a ScheduleOutcome, problem: &SchedulingProblem) -> Self {
        let schedule = outcome.schedule();
        Self {
            status: if outcome.is_complete() { "complete" } else { "stalled" },
            entries: schedule.entries(),
            stats: ScheduleStats::calculate(schedule, problem.resources()),
            stall: outcome.stall_report(),
        }
    }
}

pub fn render_json(outcome: &ScheduleOutcome, problem: &SchedulingProblem) -> Result<String> {
    let report = ScheduleReport::new(outcome, problem);
    Ok(serde_json::to_string_pretty(&report)?)
}

/// Plain-text table of entries (assignment order), followed by per-resource
/// figures and, for a stalled run, the blocked tasks.
pub fn render_table(outcome: &ScheduleOutcome, problem: &SchedulingProblem) -> String {
    let schedule = outcome.schedule();
    let stats = ScheduleStats::calculate(schedule, problem.resources());
    let mut out = String::new();

    write_entries(&mut out, schedule);

    let _ = writeln!(out);
    let _ = writeln!(out, "makespan: {}", stats.makespan);
    for r in &stats.resources {
        let _ = writeln!(
            out,
            "  {}: {} task(s), busy {}, idle {}, utilization {:.1}%",
            r.resource,
            r.tasks,
            r.busy,
            r.idle,
            r.utilization * 100.0
        );
    }

    if let Some(report) = outcome.stall_report() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "STALLED: {} task(s) could not be scheduled: {}",
            report.unscheduled.len(),
            report.unscheduled.join(", ")
        );
        for cycle in &report.cycles {
            let _ = writeln!(out, "  dependency cycle: {}", cycle.join(" -> "));
        }
    }

    out
}

fn write_entries(out: &mut String, schedule: &Schedule) {
    let resource_width = schedule
        .entries()
        .iter()
        .map(|e| e.resource.len())
        .chain(std::iter::once("Resource".len()))
        .max()
        .unwrap_or(0);
    let task_width = schedule
        .entries()
        .iter()
        .map(|e| e.task.len())
        .chain(std::iter::once("Task".len()))
        .max()
        .unwrap_or(0);

    let _ = writeln!(
        out,
        "{:<rw$}  {:<tw$}  {:>6}  {:>6}",
        "Resource",
        "Task",
        "Start",
        "Finish",
        rw = resource_width,
        tw = task_width
    );
    for e in schedule.entries() {
        let _ = writeln!(
            out,
            "{:<rw$}  {:<tw$}  {:>6}  {:>6}",
            e.resource,
            e.task,
            e.start,
            e.finish,
            rw = resource_width,
            tw = task_width
        );
    }
}
