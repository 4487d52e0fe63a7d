//! Python bindings (enabled with the `python` feature).

// Allow clippy warning triggered by PyO3 macro expansion
#![allow(clippy::useless_conversion)]

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::config::{ScheduleConfig, DEFAULT_SLACK_TOLERANCE};
use crate::models::{ScheduleResult, ScheduledTask, Task};
use crate::schedule::compute_schedule_with_config;

/// A task with its computed schedule bounds (read-only).
#[pyclass(name = "ScheduledTask", frozen)]
#[derive(Clone, Debug)]
pub struct PyScheduledTask {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get)]
    pub duration: f64,
    #[pyo3(get)]
    pub earliest_start: f64,
    #[pyo3(get)]
    pub earliest_finish: f64,
    #[pyo3(get)]
    pub latest_start: f64,
    #[pyo3(get)]
    pub latest_finish: f64,
    #[pyo3(get)]
    pub slack: f64,
    #[pyo3(get)]
    pub critical: bool,
}

impl From<&ScheduledTask> for PyScheduledTask {
    fn from(task: &ScheduledTask) -> Self {
        Self {
            name: task.name.clone(),
            duration: task.duration,
            earliest_start: task.earliest_start(),
            earliest_finish: task.earliest_finish(),
            latest_start: task.latest_start(),
            latest_finish: task.latest_finish(),
            slack: task.slack(),
            critical: task.is_critical(),
        }
    }
}

#[pymethods]
impl PyScheduledTask {
    fn __repr__(&self) -> String {
        format!(
            "ScheduledTask(name={:?}, duration={}, es={}, ef={}, ls={}, lf={}, slack={}, critical={})",
            self.name,
            self.duration,
            self.earliest_start,
            self.earliest_finish,
            self.latest_start,
            self.latest_finish,
            self.slack,
            self.critical
        )
    }
}

/// Result of a schedule computation (read-only).
#[pyclass(name = "ScheduleResult", frozen)]
pub struct PyScheduleResult {
    inner: ScheduleResult,
}

#[pymethods]
impl PyScheduleResult {
    #[getter]
    fn completion_time(&self) -> f64 {
        self.inner.completion_time()
    }

    #[getter]
    fn tasks(&self) -> Vec<PyScheduledTask> {
        self.inner.tasks().iter().map(PyScheduledTask::from).collect()
    }

    #[getter]
    fn critical_tasks(&self) -> Vec<String> {
        owned_names(self.inner.critical_tasks())
    }

    #[getter]
    fn topological_order(&self) -> Vec<String> {
        owned_names(self.inner.topological_order())
    }

    #[getter]
    fn critical_path(&self) -> Vec<String> {
        owned_names(self.inner.critical_path())
    }

    /// Look up a task by name (first match wins).
    fn task(&self, name: &str) -> Option<PyScheduledTask> {
        self.inner.task(name).map(PyScheduledTask::from)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }

    fn __repr__(&self) -> String {
        format!(
            "ScheduleResult(tasks={}, completion_time={}, critical={})",
            self.inner.len(),
            self.inner.completion_time(),
            self.inner.critical_indices().len()
        )
    }
}

fn owned_names(names: Vec<&str>) -> Vec<String> {
    names.into_iter().map(str::to_string).collect()
}

/// Compute the critical path schedule.
///
/// # Arguments
/// * `tasks` - List of (name, duration) tuples; a task's index is its list position
/// * `edges` - List of (predecessor_index, successor_index) tuples
/// * `verbosity` - 0=silent, 1=summary, 2=tasks, 3=debug (written to stderr)
/// * `slack_tolerance` - Relative slack still counted as zero (scaled by completion time)
/// * `validate_durations` - Reject negative or non-finite durations
///
/// # Raises
/// * ValueError on circular dependencies, unknown task indices, invalid durations
///   or an invalid slack tolerance
#[pyfunction]
#[pyo3(signature = (tasks, edges, verbosity=0, slack_tolerance=DEFAULT_SLACK_TOLERANCE, validate_durations=true))]
fn compute_schedule(
    tasks: Vec<(String, f64)>,
    edges: Vec<(usize, usize)>,
    verbosity: u8,
    slack_tolerance: f64,
    validate_durations: bool,
) -> PyResult<PyScheduleResult> {
    let tasks: Vec<Task> = tasks
        .into_iter()
        .map(|(name, duration)| Task::new(name, duration))
        .collect();
    let config = ScheduleConfig {
        verbosity,
        slack_tolerance,
        validate_durations,
    };

    match compute_schedule_with_config(&tasks, &edges, &config) {
        Ok(inner) => Ok(PyScheduleResult { inner }),
        Err(e) => Err(PyValueError::new_err(e.to_string())),
    }
}

/// The cpm_rust Python module.
#[pymodule]
fn cpm_rust(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyScheduledTask>()?;
    m.add_class::<PyScheduleResult>()?;
    m.add_function(wrap_pyfunction!(compute_schedule, m)?)?;
    Ok(())
}

// Built with `--features python`; nothing here touches the interpreter.
#[cfg(all(test, feature = "python"))]
mod tests {
    use super::*;

    fn diamond() -> PyResult<PyScheduleResult> {
        let tasks = vec![
            ("design".to_string(), 3.0),
            ("build".to_string(), 4.0),
            ("docs".to_string(), 1.0),
            ("ship".to_string(), 2.0),
        ];
        compute_schedule(
            tasks,
            vec![(0, 1), (0, 2), (1, 3), (2, 3)],
            0,
            DEFAULT_SLACK_TOLERANCE,
            true,
        )
    }

    #[test]
    fn test_result_wrapper_mirrors_schedule() {
        let result = diamond().unwrap();

        assert_eq!(result.completion_time(), 9.0);
        assert_eq!(result.__len__(), 4);
        assert_eq!(result.critical_tasks(), vec!["design", "build", "ship"]);
        assert_eq!(result.critical_path(), vec!["design", "build", "ship"]);
        assert_eq!(result.topological_order(), vec!["design", "build", "docs", "ship"]);
        assert_eq!(
            result.__repr__(),
            "ScheduleResult(tasks=4, completion_time=9, critical=3)"
        );
    }

    #[test]
    fn test_scheduled_task_fields() {
        let result = diamond().unwrap();
        let docs = result.task("docs").unwrap();

        assert_eq!(docs.name, "docs");
        assert_eq!(
            (docs.earliest_start, docs.earliest_finish, docs.latest_start, docs.latest_finish),
            (3.0, 4.0, 6.0, 7.0)
        );
        assert_eq!(docs.slack, 3.0);
        assert!(!docs.critical);
        assert!(result.task("missing").is_none());
        assert_eq!(result.tasks().len(), 4);
    }

    #[test]
    fn test_errors_become_value_errors() {
        let cycle = compute_schedule(
            vec![("a".to_string(), 1.0), ("b".to_string(), 1.0)],
            vec![(0, 1), (1, 0)],
            0,
            DEFAULT_SLACK_TOLERANCE,
            true,
        );
        assert!(cycle.is_err());

        let bad_tolerance = compute_schedule(
            vec![("a".to_string(), 1.0)],
            vec![],
            0,
            f64::NAN,
            true,
        );
        assert!(bad_tolerance.is_err());
    }
}
