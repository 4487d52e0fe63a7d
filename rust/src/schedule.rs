//! Schedule computation: validation, both passes, slack analysis and assembly.

use thiserror::Error;

use crate::backward_pass::backward_pass;
use crate::config::ScheduleConfig;
use crate::forward_pass::{completion_time, forward_pass};
use crate::graph::{DependencyGraph, GraphError};
use crate::models::{ScheduleResult, ScheduledTask, Task, TaskTiming};
use crate::slack::{analyze_slack, trace_critical_path};
use crate::{log_debug, log_summary};

/// Errors that can occur while computing a schedule.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// The dependencies contain a cycle; names of the tasks that could not be ordered.
    #[error("Circular dependency detected among tasks: {0:?}")]
    CircularDependency(Vec<String>),
    #[error("Dependency {predecessor} -> {successor} references an unknown task (task count {task_count})")]
    UnknownTask {
        predecessor: usize,
        successor: usize,
        task_count: usize,
    },
    #[error("Task {task:?} has invalid duration {duration}")]
    InvalidDuration { task: String, duration: f64 },
    #[error("Malformed adjacency matrix: row {row} has {len} entries, expected {expected}")]
    MalformedAdjacencyMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("Slack tolerance must be finite and non-negative, got {0}")]
    InvalidSlackTolerance(f64),
}

impl ScheduleError {
    /// Lift a graph error to the crate boundary, resolving task indices to names.
    fn from_graph(err: GraphError, tasks: &[Task]) -> Self {
        match err {
            GraphError::CircularDependency(unresolved) => ScheduleError::CircularDependency(
                unresolved
                    .into_iter()
                    .map(|idx| tasks[idx].name.clone())
                    .collect(),
            ),
            GraphError::TaskOutOfRange {
                predecessor,
                successor,
                task_count,
            } => ScheduleError::UnknownTask {
                predecessor,
                successor,
                task_count,
            },
            GraphError::MalformedAdjacencyMatrix { row, len, expected } => {
                ScheduleError::MalformedAdjacencyMatrix { row, len, expected }
            }
        }
    }
}

/// Compute the CPM schedule with the default configuration.
///
/// `edges` holds `(predecessor, successor)` pairs of indices into `tasks`.
///
/// # Returns
/// * `Ok(ScheduleResult)` with per-task bounds, critical tasks and completion time
/// * `Err(ScheduleError::CircularDependency)` if the edges induce a cycle
pub fn compute_schedule(
    tasks: &[Task],
    edges: &[(usize, usize)],
) -> Result<ScheduleResult, ScheduleError> {
    compute_schedule_with_config(tasks, edges, &ScheduleConfig::default())
}

/// Compute the CPM schedule for tasks given only by duration.
///
/// Tasks are named `Task1`, `Task2`, ... in index order.
pub fn compute_schedule_from_durations(
    durations: &[f64],
    edges: &[(usize, usize)],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let tasks: Vec<Task> = durations
        .iter()
        .enumerate()
        .map(|(idx, &duration)| Task::new(format!("Task{}", idx + 1), duration))
        .collect();
    compute_schedule_with_config(&tasks, edges, config)
}

/// Compute the CPM schedule.
///
/// Runs sequentially: topological sort, forward pass, completion time,
/// backward pass, slack analysis. Nothing is returned unless every task
/// could be scheduled.
pub fn compute_schedule_with_config(
    tasks: &[Task],
    edges: &[(usize, usize)],
    config: &ScheduleConfig,
) -> Result<ScheduleResult, ScheduleError> {
    let verbosity = config.verbosity;

    if !config.has_valid_tolerance() {
        return Err(ScheduleError::InvalidSlackTolerance(config.slack_tolerance));
    }
    if config.validate_durations {
        validate_durations(tasks)?;
    }

    let graph = DependencyGraph::new(tasks.len(), edges)
        .map_err(|e| ScheduleError::from_graph(e, tasks))?;
    log_debug!(
        verbosity,
        "Graph: {} tasks, {} edges",
        graph.len(),
        graph.edge_count()
    );

    let topo_order = graph
        .topological_order(verbosity)
        .map_err(|e| ScheduleError::from_graph(e, tasks))?;
    log_summary!(verbosity, "Topological order: {:?}", topo_order);

    let durations: Vec<f64> = tasks.iter().map(|t| t.duration).collect();

    let forward = forward_pass(&graph, &topo_order, &durations, verbosity);
    let completion = completion_time(&graph, &forward.earliest_finish);
    log_summary!(verbosity, "Minimum completion time: {}", completion);

    let backward = backward_pass(
        &graph,
        &topo_order,
        &durations,
        &forward.earliest_start,
        completion,
        config,
    );

    let analysis = analyze_slack(&forward, &backward, completion, config);
    let critical_path = trace_critical_path(&graph, &forward, &analysis, completion, config);
    log_summary!(
        verbosity,
        "Critical tasks: {} of {}, path length {}",
        analysis.critical.len(),
        tasks.len(),
        critical_path.len()
    );

    let scheduled: Vec<ScheduledTask> = tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| ScheduledTask {
            name: task.name.clone(),
            duration: task.duration,
            timing: TaskTiming {
                earliest_start: forward.earliest_start[idx],
                earliest_finish: forward.earliest_finish[idx],
                latest_start: backward.latest_start[idx],
                latest_finish: backward.latest_finish[idx],
                slack: analysis.slack[idx],
            },
            critical: analysis.is_critical[idx],
        })
        .collect();

    Ok(ScheduleResult::new(
        completion,
        scheduled,
        topo_order,
        analysis.critical,
        critical_path,
    ))
}

fn validate_durations(tasks: &[Task]) -> Result<(), ScheduleError> {
    match tasks
        .iter()
        .find(|t| !t.duration.is_finite() || t.duration < 0.0)
    {
        Some(task) => Err(ScheduleError::InvalidDuration {
            task: task.name.clone(),
            duration: task.duration,
        }),
        None => Ok(()),
    }
}
