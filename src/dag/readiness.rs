// src/dag/readiness.rs

use crate::dag::graph::DependencyGraph;
use crate::dag::task_info::TaskIndex;
use crate::dag::timeline::CompletionState;

/// Tasks that are not yet completed and whose every direct dependency is
/// completed, in task input order.
///
/// Recomputed from scratch on each call; nothing is cached between
/// scheduling steps. A task with no dependencies is ready immediately, and a
/// task that depends on itself never is.
pub fn ready_tasks(graph: &DependencyGraph, completion: &CompletionState) -> Vec<TaskIndex> {
    (0..graph.task_count())
        .filter(|&index| !completion.is_completed(index))
        .filter(|&index| {
            graph
                .dependencies_of(index)
                .iter()
                .all(|&dep| completion.is_completed(dep))
        })
        .collect()
}
