// src/lib.rs

pub mod cli;
pub mod config;
pub mod dag;
pub mod errors;
pub mod logging;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::Result;
use tracing::{debug, info};

use crate::cli::{CliArgs, OutputFormat};
use crate::config::loader::load_with_policy;
use crate::dag::{DependencyGraph, ScheduleOutcome, Scheduler, SchedulingProblem};

/// Schedule a validated problem.
///
/// Pure with respect to its input: no global state is read or written, so
/// independent calls may run concurrently. Never fails; an unsatisfiable
/// dependency structure yields [`ScheduleOutcome::Stalled`] with the partial
/// schedule.
pub fn plan(problem: &SchedulingProblem) -> ScheduleOutcome {
    Scheduler::new(problem).run()
}

/// High-level entry point used by `main.rs`.
///
/// Loads and validates the task file, then either prints the problem
/// (`--dry-run`) or schedules it and prints the result to stdout.
///
/// Returns the outcome so the caller can pick an exit status; `None` for a
/// dry run.
pub fn run(args: CliArgs) -> Result<Option<ScheduleOutcome>> {
    let config_path = PathBuf::from(&args.config);
    let cfg = load_with_policy(&config_path, args.unknown_deps)?;
    info!(
        path = ?config_path,
        tasks = cfg.problem().task_count(),
        resources = cfg.problem().resources().len(),
        policy = %cfg.problem().unknown_dependencies(),
        "task file loaded"
    );

    if args.dry_run {
        match args.format {
            OutputFormat::Table => print_dry_run(cfg.problem()),
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(cfg.problem())?),
        }
        return Ok(None);
    }

    let outcome = plan(cfg.problem());

    match args.format {
        OutputFormat::Table => print!("{}", report::render_table(&outcome, cfg.problem())),
        OutputFormat::Json => println!("{}", report::render_json(&outcome, cfg.problem())?),
    }

    Ok(Some(outcome))
}

/// Simple dry-run output: resources, tasks, durations and resolved deps.
fn print_dry_run(problem: &SchedulingProblem) {
    let graph = DependencyGraph::build(problem.tasks());

    println!("schedag dry-run");
    println!(
        "  config.unknown_dependencies = {}",
        problem.unknown_dependencies()
    );
    println!("  resources = {:?}", problem.resources());
    println!();

    println!("tasks ({}):", problem.task_count());
    for task in problem.tasks() {
        println!("  - {}", task.id());
        println!("      duration: {}", task.duration());
        if !task.dependencies().is_empty() {
            println!("      after: {:?}", task.dependencies());
        }
    }

    if !graph.dropped_references().is_empty() {
        println!();
        println!("dropped references:");
        for dropped in graph.dropped_references() {
            println!("  - {} -> {} (unknown)", dropped.task, dropped.dependency);
        }
    }

    debug!("dry-run complete (nothing scheduled)");
}
