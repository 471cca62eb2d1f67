use std::collections::{BTreeSet, HashMap};

use proptest::prelude::*;
use schedag::dag::{ScheduleEntry, SchedulingProblem};
use schedag::plan;
use schedag::types::UnknownDependencyPolicy;
use schedag_test_utils::builders::ProblemBuilder;
use schedag_test_utils::invariants::violations;

#[derive(Debug, Clone)]
struct RawTask {
    duration: u64,
    deps: Vec<usize>,
}

// Acyclic by construction: task N may only depend on tasks 0..N-1.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<RawTask>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        proptest::collection::vec(
            (1..=9u64, proptest::collection::vec(any::<usize>(), 0..4)),
            num_tasks,
        )
        .prop_map(|raw| {
            raw.into_iter()
                .enumerate()
                .map(|(i, (duration, potential))| {
                    let deps: BTreeSet<usize> = if i == 0 {
                        BTreeSet::new()
                    } else {
                        potential.into_iter().map(|d| d % i).collect()
                    };
                    RawTask {
                        duration,
                        deps: deps.into_iter().collect(),
                    }
                })
                .collect()
        })
    })
}

fn to_problem(tasks: &[RawTask], resources: usize) -> SchedulingProblem {
    let names: Vec<String> = (0..resources).map(|i| format!("R{i}")).collect();
    let name_refs: Vec<&str> = names.iter().map(String::as_str).collect();

    let mut builder = ProblemBuilder::new()
        .with_resources(&name_refs)
        .with_policy(UnknownDependencyPolicy::Reject);

    for (i, task) in tasks.iter().enumerate() {
        let deps: Vec<String> = task.deps.iter().map(|d| format!("task_{d}")).collect();
        let dep_refs: Vec<&str> = deps.iter().map(String::as_str).collect();
        builder = builder.with_task(&format!("task_{i}"), task.duration, &dep_refs);
    }
    builder.build()
}

fn overlapping(entries: &[ScheduleEntry]) -> Option<(String, String)> {
    let mut by_resource: HashMap<&str, Vec<&ScheduleEntry>> = HashMap::new();
    for e in entries {
        by_resource.entry(e.resource.as_str()).or_default().push(e);
    }
    for list in by_resource.values_mut() {
        list.sort_by_key(|e| (e.start, e.finish));
        for pair in list.windows(2) {
            if pair[1].start < pair[0].finish {
                return Some((pair[0].task.clone(), pair[1].task.clone()));
            }
        }
    }
    None
}

proptest! {
    #[test]
    fn acyclic_input_is_fully_and_feasibly_scheduled(
        tasks in dag_strategy(12),
        resources in 1..=4usize,
    ) {
        let problem = to_problem(&tasks, resources);
        let outcome = plan(&problem);

        prop_assert!(outcome.is_complete(), "acyclic input stalled: {:?}", outcome.stall_report());

        let schedule = outcome.schedule();
        prop_assert_eq!(schedule.len(), tasks.len());

        let errors = violations(&problem, schedule);
        prop_assert!(errors.is_empty(), "violations: {:?}", errors);

        prop_assert_eq!(overlapping(schedule.entries()), None);
    }

    #[test]
    fn identical_input_gives_identical_schedule(
        tasks in dag_strategy(12),
        resources in 1..=4usize,
    ) {
        let first = plan(&to_problem(&tasks, resources));
        let second = plan(&to_problem(&tasks, resources));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn makespan_is_within_list_scheduling_bounds(
        tasks in dag_strategy(12),
        resources in 1..=4usize,
    ) {
        let problem = to_problem(&tasks, resources);
        let makespan = plan(&problem).schedule().makespan();

        let longest = tasks.iter().map(|t| t.duration).max().unwrap_or(0);
        let total: u64 = tasks.iter().map(|t| t.duration).sum();

        prop_assert!(makespan >= longest);
        prop_assert!(makespan <= total);
        if resources == 1 {
            prop_assert_eq!(makespan, total);
        }
    }

    #[test]
    fn back_edge_always_stalls_within_bound(
        tasks in dag_strategy(10),
        resources in 1..=3usize,
        pick in any::<usize>(),
    ) {
        // Make some task depend on the last one; together with a path from
        // it to the last task (or the task itself being last) this closes a
        // cycle. Chain every task to its predecessor so the path exists.
        let mut tasks = tasks;
        let last = tasks.len() - 1;
        for (i, task) in tasks.iter_mut().enumerate().skip(1) {
            if !task.deps.contains(&(i - 1)) {
                task.deps.push(i - 1);
            }
        }
        let victim = pick % tasks.len();
        tasks[victim].deps.push(last);

        let problem = to_problem(&tasks, resources);
        let outcome = plan(&problem);

        prop_assert!(outcome.is_stalled());
        let report = outcome.stall_report().cloned().unwrap_or_default();
        prop_assert_eq!(report.unscheduled.len(), tasks.len() - victim);
        prop_assert_eq!(report.cycles.len(), 1);
        prop_assert_eq!(outcome.schedule().len(), victim);

        let errors = violations(&problem, outcome.schedule());
        prop_assert!(errors.is_empty(), "violations: {:?}", errors);
    }
}
