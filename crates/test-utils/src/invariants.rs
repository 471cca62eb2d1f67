//! Checks that any schedule produced for a problem must satisfy.

use std::collections::{HashMap, HashSet};

use schedag::dag::{Schedule, SchedulingProblem};

/// Collect every violated scheduling invariant as a readable message.
///
/// Checks:
/// - `finish == start + duration` for the task's declared duration
/// - no task appears twice
/// - each start is at or after the finish of every known dependency, and
///   every known dependency was scheduled *earlier* in assignment order
/// - each start is at or after the finish of the previous entry assigned to
///   the same resource (so per-resource intervals never overlap)
pub fn violations(problem: &SchedulingProblem, schedule: &Schedule) -> Vec<String> {
    let mut errors = Vec::new();

    let specs: HashMap<&str, _> = problem.tasks().iter().map(|t| (t.id(), t)).collect();
    let mut finished: HashMap<&str, u64> = HashMap::new();
    let mut resource_free_at: HashMap<&str, u64> = HashMap::new();
    let mut seen = HashSet::new();

    for entry in schedule.entries() {
        let Some(spec) = specs.get(entry.task.as_str()) else {
            errors.push(format!("entry for unknown task {}", entry.task));
            continue;
        };

        if !seen.insert(entry.task.as_str()) {
            errors.push(format!("task {} scheduled more than once", entry.task));
        }

        if entry.finish != entry.start + spec.duration() {
            errors.push(format!(
                "task {} finishes at {} but starts at {} with duration {}",
                entry.task,
                entry.finish,
                entry.start,
                spec.duration()
            ));
        }

        for dep in spec.dependencies() {
            if !specs.contains_key(dep.as_str()) {
                continue;
            }
            match finished.get(dep.as_str()) {
                Some(&dep_finish) if entry.start >= dep_finish => {}
                Some(&dep_finish) => errors.push(format!(
                    "task {} starts at {} before dependency {} finishes at {}",
                    entry.task, entry.start, dep, dep_finish
                )),
                None => errors.push(format!(
                    "task {} scheduled before its dependency {}",
                    entry.task, dep
                )),
            }
        }

        let free_at = resource_free_at.entry(entry.resource.as_str()).or_insert(0);
        if entry.start < *free_at {
            errors.push(format!(
                "task {} starts at {} on {} which is busy until {}",
                entry.task, entry.start, entry.resource, free_at
            ));
        }
        *free_at = entry.finish;

        finished.insert(entry.task.as_str(), entry.finish);
    }

    errors
}

/// Panic with every violation listed if the schedule breaks an invariant.
pub fn assert_feasible(problem: &SchedulingProblem, schedule: &Schedule) {
    let errors = violations(problem, schedule);
    assert!(
        errors.is_empty(),
        "schedule violates invariants:\n  {}",
        errors.join("\n  ")
    );
}
