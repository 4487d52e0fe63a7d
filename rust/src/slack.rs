//! Slack computation and critical path extraction.

use crate::backward_pass::BackwardPassResult;
use crate::config::ScheduleConfig;
use crate::forward_pass::ForwardPassResult;
use crate::graph::DependencyGraph;

/// Slack per task and the resulting critical set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SlackAnalysis {
    /// Slack = latest_start - earliest_start, indexed by task.
    pub slack: Vec<f64>,
    /// Critical flag per task.
    pub is_critical: Vec<bool>,
    /// Critical task indices, ascending.
    pub critical: Vec<usize>,
}

/// Derive slack for every task and classify zero-slack tasks as critical.
///
/// `completion_time` sets the scale of the zero-slack threshold.
pub fn analyze_slack(
    forward: &ForwardPassResult,
    backward: &BackwardPassResult,
    completion_time: f64,
    config: &ScheduleConfig,
) -> SlackAnalysis {
    let slack: Vec<f64> = backward
        .latest_start
        .iter()
        .zip(&forward.earliest_start)
        .map(|(ls, es)| ls - es)
        .collect();

    let is_critical: Vec<bool> = slack
        .iter()
        .map(|&s| config.is_zero_slack(s, completion_time))
        .collect();

    let critical = is_critical
        .iter()
        .enumerate()
        .filter(|(_, &crit)| crit)
        .map(|(task, _)| task)
        .collect();

    SlackAnalysis {
        slack,
        is_critical,
        critical,
    }
}

/// Trace one end-to-end chain of critical tasks.
///
/// Starts from the lowest-index critical sink finishing at `completion_time`
/// and walks back through the lowest-index critical predecessor whose earliest
/// finish meets the current task's earliest start, until a source is reached.
/// Returned first to last; empty only for an empty graph.
pub fn trace_critical_path(
    graph: &DependencyGraph,
    forward: &ForwardPassResult,
    analysis: &SlackAnalysis,
    completion_time: f64,
    config: &ScheduleConfig,
) -> Vec<usize> {
    let meets = |a: f64, b: f64| config.is_zero_slack(a - b, completion_time);

    let Some(mut current) = graph.sinks().find(|&task| {
        analysis.is_critical[task] && meets(forward.earliest_finish[task], completion_time)
    }) else {
        return Vec::new();
    };

    let mut chain = vec![current];
    while let Some(&pred) = graph.predecessors(current).iter().find(|&&pred| {
        analysis.is_critical[pred]
            && meets(forward.earliest_finish[pred], forward.earliest_start[current])
    }) {
        chain.push(pred);
        current = pred;
    }

    chain.reverse();
    chain
}
