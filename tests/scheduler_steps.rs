mod common;
use crate::common::init_tracing;

use schedag::dag::{
    ready_tasks, CompletionState, DependencyGraph, ResourceTimeline, Scheduler, SchedulerState,
    TaskSpec,
};
use schedag_test_utils::builders::ProblemBuilder;

fn task(id: &str, duration: u64, after: &[&str]) -> TaskSpec {
    TaskSpec::new(id, duration, after.iter().copied()).unwrap()
}

#[test]
fn stepping_exposes_each_round() {
    init_tracing();

    let problem = ProblemBuilder::new()
        .with_resources(&["M1", "M2"])
        .with_task("T1", 3, &[])
        .with_task("T2", 2, &[])
        .with_task("T3", 1, &["T1"])
        .build();

    let mut scheduler = Scheduler::new(&problem);
    assert_eq!(scheduler.state(), SchedulerState::Running);

    let first = scheduler.step();
    let placed: Vec<&str> = first.assigned.iter().map(|e| e.task.as_str()).collect();
    assert_eq!(placed, vec!["T2", "T1"]);
    assert_eq!(first.state, SchedulerState::Running);

    let clocks: Vec<u64> = scheduler
        .timeline()
        .clocks()
        .iter()
        .map(|c| c.free_at)
        .collect();
    assert_eq!(clocks, vec![2, 3]);

    let second = scheduler.step();
    assert_eq!(second.assigned.len(), 1);
    assert_eq!(second.assigned[0].resource, "M1");
    assert_eq!(second.state, SchedulerState::Done);

    // Terminal: further steps do nothing.
    let third = scheduler.step();
    assert!(third.assigned.is_empty());
    assert_eq!(third.state, SchedulerState::Done);
    assert_eq!(scheduler.steps_taken(), 2);

    assert!(scheduler.into_outcome().is_complete());
}

#[test]
fn empty_problem_is_done_immediately() {
    init_tracing();

    let problem = ProblemBuilder::new().with_resources(&["M1"]).build();
    let scheduler = Scheduler::new(&problem);
    assert_eq!(scheduler.state(), SchedulerState::Done);

    let outcome = scheduler.run();
    assert!(outcome.is_complete());
    assert!(outcome.schedule().is_empty());
    assert_eq!(outcome.schedule().makespan(), 0);
}

#[test]
fn graph_keeps_known_edges_only() {
    let tasks = vec![
        task("A", 1, &[]),
        task("B", 1, &["A", "A", "missing"]),
        task("C", 1, &["A", "B"]),
    ];
    let graph = DependencyGraph::build(&tasks);

    assert_eq!(graph.task_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.dependencies_of(1), vec![0]);
    assert_eq!(graph.dependencies_of(2), vec![0, 1]);
    assert_eq!(graph.dependents_of(0), vec![1, 2]);
    assert_eq!(graph.task_id(2), Some("C"));
    assert!(graph.cycles().is_empty());

    let dropped = graph.dropped_references();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].task, "B");
    assert_eq!(dropped[0].dependency, "missing");
}

#[test]
fn readiness_follows_completion() {
    let tasks = vec![
        task("A", 1, &[]),
        task("B", 1, &["A"]),
        task("C", 1, &[]),
        task("D", 1, &["B", "C"]),
    ];
    let graph = DependencyGraph::build(&tasks);
    let mut completion = CompletionState::new(tasks.len());

    assert_eq!(ready_tasks(&graph, &completion), vec![0, 2]);

    assert!(completion.record(0, 1));
    assert_eq!(ready_tasks(&graph, &completion), vec![1, 2]);

    assert!(completion.record(2, 1));
    assert!(completion.record(1, 2));
    assert_eq!(ready_tasks(&graph, &completion), vec![3]);

    assert!(completion.record(3, 3));
    assert!(ready_tasks(&graph, &completion).is_empty());
    assert!(completion.all_completed());
}

#[test]
fn completion_times_are_never_overwritten() {
    let mut completion = CompletionState::new(2);

    assert!(completion.record(0, 5));
    assert!(!completion.record(0, 9));
    assert!(!completion.record(7, 1));

    assert_eq!(completion.finish_time(0), Some(5));
    assert_eq!(completion.completed_count(), 1);
    assert_eq!(completion.pending(), vec![1]);
}

#[test]
fn least_loaded_prefers_earlier_resource_on_tie() {
    let resources = vec!["R1".to_string(), "R2".to_string(), "R3".to_string()];
    let mut timeline = ResourceTimeline::new(&resources);

    assert_eq!(timeline.least_loaded(), Some(0));

    timeline.occupy_until(0, 4);
    timeline.occupy_until(1, 2);
    timeline.occupy_until(2, 2);
    assert_eq!(timeline.least_loaded(), Some(1));

    timeline.occupy_until(1, 6);
    assert_eq!(timeline.least_loaded(), Some(2));

    assert_eq!(ResourceTimeline::new(&[]).least_loaded(), None);
}
