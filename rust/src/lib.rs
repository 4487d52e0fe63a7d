//! Critical Path Method (CPM) scheduling for projects modeled as task DAGs.
//!
//! Given tasks with durations and precedence edges, the crate computes a
//! topological order, earliest/latest start and finish times, slack per task,
//! the critical task set and the minimum project completion time.
//!
//! ```
//! use cpm_rust::{compute_schedule, Task};
//!
//! let tasks = vec![
//!     Task::new("design", 3.0),
//!     Task::new("build", 4.0),
//!     Task::new("docs", 1.0),
//!     Task::new("ship", 2.0),
//! ];
//! let edges = [(0, 1), (0, 2), (1, 3), (2, 3)];
//!
//! let schedule = compute_schedule(&tasks, &edges).unwrap();
//! assert_eq!(schedule.completion_time(), 9.0);
//! assert_eq!(schedule.critical_tasks(), vec!["design", "build", "ship"]);
//! assert_eq!(schedule.task("docs").unwrap().slack(), 3.0);
//! ```

pub mod backward_pass;
mod config;
pub mod forward_pass;
pub mod graph;
pub mod logging;
mod models;
#[cfg(feature = "python")]
mod python;
mod schedule;
pub mod slack;

pub use backward_pass::{backward_pass, BackwardPassResult};
pub use config::{ScheduleConfig, DEFAULT_SLACK_TOLERANCE};
pub use forward_pass::{completion_time, forward_pass, ForwardPassResult};
pub use graph::{edges_from_adjacency_matrix, DependencyGraph, GraphError};
pub use models::{ScheduleResult, ScheduledTask, Task, TaskTiming};
pub use schedule::{
    compute_schedule, compute_schedule_from_durations, compute_schedule_with_config,
    ScheduleError,
};
pub use slack::{analyze_slack, trace_critical_path, SlackAnalysis};
