//! Backward pass: latest start and finish times.

use crate::config::ScheduleConfig;
use crate::graph::DependencyGraph;
use crate::log_tasks;

/// Latest start and finish per task, indexed by task.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BackwardPassResult {
    pub latest_start: Vec<f64>,
    pub latest_finish: Vec<f64>,
}

/// Compute latest start/finish times in reverse topological order.
///
/// Every sink is anchored at the project `completion_time`, not at its own
/// earliest finish. With several sinks of different lengths only the longest
/// one would otherwise end up with zero slack on its path. A task with
/// successors must finish before the tightest (minimum) successor start.
///
/// A latest start within the zero-slack threshold of the task's earliest
/// start is pinned to it, so predecessors see the exact value and rounding
/// never accumulates along a critical chain.
pub fn backward_pass(
    graph: &DependencyGraph,
    topo_order: &[usize],
    durations: &[f64],
    earliest_start: &[f64],
    completion_time: f64,
    config: &ScheduleConfig,
) -> BackwardPassResult {
    let n = graph.len();
    let threshold = config.zero_slack_threshold(completion_time);
    let mut latest_start = vec![0.0; n];
    let mut latest_finish = vec![0.0; n];

    for &task in topo_order.iter().rev() {
        // Successors come later in topo_order, so their start times are final
        let finish = graph
            .successors(task)
            .iter()
            .map(|&succ| latest_start[succ])
            .reduce(f64::min)
            .unwrap_or(completion_time);

        let mut start = finish - durations[task];
        if (start - earliest_start[task]).abs() <= threshold {
            start = earliest_start[task];
        }

        latest_finish[task] = finish;
        latest_start[task] = start;

        log_tasks!(
            config.verbosity,
            "  backward: task {} LS={} LF={}",
            task,
            latest_start[task],
            latest_finish[task]
        );
    }

    BackwardPassResult {
        latest_start,
        latest_finish,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forward_pass::{completion_time, forward_pass};

    fn run(durations: &[f64], edges: &[(usize, usize)]) -> BackwardPassResult {
        let graph = DependencyGraph::new(durations.len(), edges).unwrap();
        let order = graph.topological_order(0).unwrap();
        let forward = forward_pass(&graph, &order, durations, 0);
        let completion = completion_time(&graph, &forward.earliest_finish);
        backward_pass(
            &graph,
            &order,
            durations,
            &forward.earliest_start,
            completion,
            &ScheduleConfig::default(),
        )
    }

    #[test]
    fn test_chain_has_no_float() {
        let result = run(&[3.0, 4.0, 2.0], &[(0, 1), (1, 2)]);

        assert_eq!(result.latest_start, vec![0.0, 3.0, 7.0]);
        assert_eq!(result.latest_finish, vec![3.0, 7.0, 9.0]);
    }

    #[test]
    fn test_diamond_takes_tightest_successor() {
        // a (2) -> b (3) -> d (1)
        // a (2) -> c (5) -> d (1)
        let result = run(&[2.0, 3.0, 5.0, 1.0], &[(0, 1), (0, 2), (1, 3), (2, 3)]);

        assert_eq!(result.latest_finish[3], 8.0);
        assert_eq!(result.latest_start[1], 4.0);
        assert_eq!(result.latest_start[2], 2.0);
        // a must finish before the earlier of b's and c's latest starts
        assert_eq!(result.latest_finish[0], 2.0);
        assert_eq!(result.latest_start[0], 0.0);
    }

    #[test]
    fn test_every_sink_anchored_at_completion_time() {
        // Two independent chains of different length: 0 -> 1 (total 9), 2 (total 2)
        let result = run(&[4.0, 5.0, 2.0], &[(0, 1)]);

        assert_eq!(result.latest_finish[1], 9.0);
        assert_eq!(result.latest_finish[2], 9.0);
        assert_eq!(result.latest_start[2], 7.0);
    }

    #[test]
    fn test_short_sink_behind_shared_source() {
        // 0 (1) feeds a short sink 1 (1) and a long sink 2 (6)
        let result = run(&[1.0, 1.0, 6.0], &[(0, 1), (0, 2)]);

        assert_eq!(result.latest_finish[1], 7.0);
        assert_eq!(result.latest_start[1], 6.0);
        assert_eq!(result.latest_finish[0], 1.0);
    }

    #[test]
    fn test_rounding_on_large_chain_pinned_to_earliest_start() {
        let durations = [1.05, 10000000.583, 160000000.794, 150000000.438];
        let graph = DependencyGraph::new(4, &[(0, 1), (1, 2), (2, 3)]).unwrap();
        let order = graph.topological_order(0).unwrap();
        let forward = forward_pass(&graph, &order, &durations, 0);
        let completion = completion_time(&graph, &forward.earliest_finish);
        let result = backward_pass(
            &graph,
            &order,
            &durations,
            &forward.earliest_start,
            completion,
            &ScheduleConfig::default(),
        );

        assert_eq!(result.latest_start, forward.earliest_start);
        assert_eq!(result.latest_finish[3], completion);
        for task in 0..3 {
            assert_eq!(result.latest_finish[task], result.latest_start[task + 1]);
        }
    }

    #[test]
    fn test_real_slack_is_not_pinned() {
        // A 1e8-long chain next to a short task; the short task keeps its slack
        let result = run(&[1.0e8 + 0.25, 2.0e8 + 0.5, 3.0], &[(0, 1)]);

        assert_eq!(result.latest_start[0], 0.0);
        assert_eq!(result.latest_finish[2], 3.0e8 + 0.75);
        assert!(result.latest_start[2] > 3.0e8 - 4.0);
    }
}
