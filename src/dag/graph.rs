// src/dag/graph.rs

use std::collections::HashMap;

use petgraph::Direction;
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use tracing::warn;

use crate::dag::task_info::{TaskId, TaskIndex, TaskSpec};

/// A dependency reference that did not resolve to a known task and was left
/// out of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedReference {
    pub task: TaskId,
    pub dependency: TaskId,
}

/// Directed dependency graph over the tasks of a problem.
///
/// Edge direction: dependency -> dependent. For
///
/// ```toml
/// [[task]]
/// id = "B"
/// after = ["A"]
/// ```
///
/// we add edge A -> B.
///
/// Nodes are added in task input order, so a node's index is the task's
/// [`TaskIndex`]. Acyclicity is not checked here; a cycle shows up later as a
/// stall.
#[derive(Debug, Clone)]
pub struct DependencyGraph {
    graph: DiGraph<TaskId, ()>,
    dropped: Vec<DroppedReference>,
}

impl DependencyGraph {
    /// Build the graph: one node per task, one edge per dependency reference
    /// that names a known task. Repeated references to the same dependency
    /// collapse into a single edge; unknown references are dropped and
    /// remembered in [`dropped_references`](Self::dropped_references).
    pub fn build(tasks: &[TaskSpec]) -> Self {
        let mut graph: DiGraph<TaskId, ()> = DiGraph::with_capacity(tasks.len(), tasks.len());
        let mut index_of: HashMap<&str, NodeIndex> = HashMap::with_capacity(tasks.len());

        for task in tasks {
            let node = graph.add_node(task.id().to_string());
            index_of.insert(task.id(), node);
        }

        let mut dropped = Vec::new();
        for (position, task) in tasks.iter().enumerate() {
            let dependent = NodeIndex::new(position);
            for dep in task.dependencies() {
                match index_of.get(dep.as_str()) {
                    Some(&dependency) => {
                        graph.update_edge(dependency, dependent, ());
                    }
                    None => {
                        warn!(
                            task = %task.id(),
                            dependency = %dep,
                            "dropping reference to unknown task"
                        );
                        dropped.push(DroppedReference {
                            task: task.id().to_string(),
                            dependency: dep.clone(),
                        });
                    }
                }
            }
        }

        Self { graph, dropped }
    }

    /// Number of tasks (nodes).
    pub fn task_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of resolved dependency edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Identifier of the task at `index`.
    pub fn task_id(&self, index: TaskIndex) -> Option<&str> {
        self.graph
            .node_weight(NodeIndex::new(index))
            .map(|id| id.as_str())
    }

    /// Direct dependencies (graph predecessors) of a task, ascending by index.
    pub fn dependencies_of(&self, index: TaskIndex) -> Vec<TaskIndex> {
        self.neighbours(index, Direction::Incoming)
    }

    /// Direct dependents (graph successors) of a task, ascending by index.
    pub fn dependents_of(&self, index: TaskIndex) -> Vec<TaskIndex> {
        self.neighbours(index, Direction::Outgoing)
    }

    /// References that were dropped because they named no known task.
    pub fn dropped_references(&self) -> &[DroppedReference] {
        &self.dropped
    }

    /// Dependency cycles: strongly connected components with more than one
    /// task, plus single tasks that depend on themselves.
    ///
    /// Each cycle is sorted by index and the list is sorted by each cycle's
    /// first member, so the result is stable for a given input.
    pub fn cycles(&self) -> Vec<Vec<TaskIndex>> {
        let mut cycles: Vec<Vec<TaskIndex>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|component| {
                component.len() > 1
                    || component
                        .first()
                        .is_some_and(|&n| self.graph.contains_edge(n, n))
            })
            .map(|component| {
                let mut members: Vec<TaskIndex> =
                    component.into_iter().map(|n| n.index()).collect();
                members.sort_unstable();
                members
            })
            .collect();
        cycles.sort();
        cycles
    }

    fn neighbours(&self, index: TaskIndex, direction: Direction) -> Vec<TaskIndex> {
        if index >= self.graph.node_count() {
            return Vec::new();
        }
        let mut out: Vec<TaskIndex> = self
            .graph
            .neighbors_directed(NodeIndex::new(index), direction)
            .map(|n| n.index())
            .collect();
        out.sort_unstable();
        out
    }
}
