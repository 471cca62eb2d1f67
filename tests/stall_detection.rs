mod common;
use crate::common::{demo_path, init_tracing};

use std::error::Error;

use schedag::config::load_and_validate;
use schedag::dag::{ScheduleOutcome, Scheduler, SchedulerState};
use schedag::plan;
use schedag::types::UnknownDependencyPolicy;
use schedag_test_utils::builders::ProblemBuilder;
use schedag_test_utils::invariants::assert_feasible;

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn two_task_cycle_stalls_with_nothing_scheduled() {
    init_tracing();

    let problem = ProblemBuilder::new()
        .with_resources(&["M1"])
        .with_task("T1", 1, &["T2"])
        .with_task("T2", 1, &["T1"])
        .build();

    match plan(&problem) {
        ScheduleOutcome::Stalled { schedule, report } => {
            assert!(schedule.is_empty());
            assert_eq!(report.unscheduled, vec!["T1", "T2"]);
            assert_eq!(report.cycles, vec![vec!["T1".to_string(), "T2".to_string()]]);
        }
        other => panic!("expected a stall, got {other:?}"),
    }
}

#[test]
fn self_dependency_stalls_instead_of_looping() {
    init_tracing();

    let problem = ProblemBuilder::new()
        .with_resources(&["M1"])
        .with_task("T1", 2, &["T1"])
        .build();

    let mut scheduler = Scheduler::new(&problem);
    assert_eq!(scheduler.max_steps(), 2);

    let step = scheduler.step();
    assert!(step.assigned.is_empty());
    assert_eq!(step.state, SchedulerState::Stalled);

    let outcome = scheduler.into_outcome();
    let report = outcome.stall_report().cloned().unwrap_or_default();
    assert_eq!(report.unscheduled, vec!["T1"]);
    assert_eq!(report.cycles, vec![vec!["T1".to_string()]]);
}

#[test]
fn partial_schedule_is_kept_on_stall() -> TestResult {
    init_tracing();

    let cfg = load_and_validate(demo_path("cycle.toml"))?;
    let problem = cfg.problem();
    let outcome = plan(problem);

    assert!(outcome.is_stalled());
    let schedule = outcome.schedule();
    assert_eq!(schedule.len(), 1);
    assert_eq!(schedule.entries()[0].task, "D");
    assert_feasible(problem, schedule);

    let report = outcome.stall_report().cloned().unwrap_or_default();
    // C is blocked by the cycle but is not part of it.
    assert_eq!(report.unscheduled, vec!["A", "B", "C"]);
    assert_eq!(report.cycles, vec![vec!["A".to_string(), "B".to_string()]]);

    Ok(())
}

#[test]
fn downstream_of_scheduled_work_can_still_stall() {
    init_tracing();

    let problem = ProblemBuilder::new()
        .with_resources(&["M1", "M2"])
        .with_task("root", 2, &[])
        .with_task("x", 1, &["root", "y"])
        .with_task("y", 1, &["x"])
        .with_task("leaf", 3, &["root"])
        .build();

    let outcome = plan(&problem);
    let scheduled: Vec<&str> = outcome
        .schedule()
        .entries()
        .iter()
        .map(|e| e.task.as_str())
        .collect();
    assert_eq!(scheduled, vec!["root", "leaf"]);

    let report = outcome.stall_report().cloned().unwrap_or_default();
    assert_eq!(report.unscheduled, vec!["x", "y"]);
    assert_eq!(report.cycles, vec![vec!["x".to_string(), "y".to_string()]]);
}

#[test]
fn ignored_reference_does_not_block_the_task() {
    init_tracing();

    let problem = ProblemBuilder::new()
        .with_resources(&["M1"])
        .with_task("T1", 2, &["ghost"])
        .with_task("T2", 1, &["T1", "ghost"])
        .with_policy(UnknownDependencyPolicy::Ignore)
        .build();

    let scheduler = Scheduler::new(&problem);
    assert_eq!(scheduler.graph().dropped_references().len(), 2);

    let outcome = scheduler.run();
    assert!(outcome.is_complete());
    assert_eq!(outcome.schedule().finish_time_of("T2"), Some(3));
}

#[test]
fn stalled_run_never_exceeds_step_bound() {
    init_tracing();

    // A chain feeding into a three-way cycle.
    let problem = ProblemBuilder::new()
        .with_resources(&["M1", "M2"])
        .with_task("a", 1, &[])
        .with_task("b", 1, &["a"])
        .with_task("c", 1, &["b"])
        .with_task("p", 1, &["c", "r"])
        .with_task("q", 1, &["p"])
        .with_task("r", 1, &["q"])
        .build();

    let mut scheduler = Scheduler::new(&problem);
    let max_steps = scheduler.max_steps();
    while !scheduler.state().is_terminal() {
        scheduler.step();
        assert!(scheduler.steps_taken() <= max_steps);
    }

    assert_eq!(scheduler.state(), SchedulerState::Stalled);
    // a, b, c placed one step each, then one stalled step.
    assert_eq!(scheduler.steps_taken(), 4);

    let outcome = scheduler.into_outcome();
    let report = outcome.stall_report().cloned().unwrap_or_default();
    assert_eq!(
        report.cycles,
        vec![vec!["p".to_string(), "q".to_string(), "r".to_string()]]
    );
}
