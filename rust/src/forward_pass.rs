//! Forward pass: earliest start and finish times.

use crate::graph::DependencyGraph;
use crate::log_tasks;

/// Earliest start and finish per task, indexed by task.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ForwardPassResult {
    pub earliest_start: Vec<f64>,
    pub earliest_finish: Vec<f64>,
}

/// Compute earliest start/finish times in topological order.
///
/// A task cannot begin until all of its predecessors have finished, so its
/// earliest start is the maximum (not the sum) of their earliest finishes.
/// Tasks without predecessors start at 0.
pub fn forward_pass(
    graph: &DependencyGraph,
    topo_order: &[usize],
    durations: &[f64],
    verbosity: u8,
) -> ForwardPassResult {
    let n = graph.len();
    let mut earliest_start = vec![0.0; n];
    let mut earliest_finish = vec![0.0; n];

    for &task in topo_order {
        // Predecessors come earlier in topo_order, so their finish times are final
        let start = graph
            .predecessors(task)
            .iter()
            .map(|&pred| earliest_finish[pred])
            .reduce(f64::max)
            .unwrap_or(0.0);

        earliest_start[task] = start;
        earliest_finish[task] = start + durations[task];

        log_tasks!(
            verbosity,
            "  forward: task {} ES={} EF={}",
            task,
            earliest_start[task],
            earliest_finish[task]
        );
    }

    ForwardPassResult {
        earliest_start,
        earliest_finish,
    }
}

/// Minimum project completion time: the largest earliest finish among sinks.
///
/// Returns 0 for an empty graph. Every non-empty acyclic graph has a sink.
pub fn completion_time(graph: &DependencyGraph, earliest_finish: &[f64]) -> f64 {
    graph
        .sinks()
        .map(|task| earliest_finish[task])
        .reduce(f64::max)
        .unwrap_or(0.0)
}
