//! Core data types for the schedule computation.

use rustc_hash::FxHashMap;

/// A unit of work with a fixed duration.
///
/// The task's index is its position in the slice handed to the scheduler;
/// dependency edges refer to tasks by that index.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub name: String,
    pub duration: f64,
}

impl Task {
    pub fn new(name: impl Into<String>, duration: f64) -> Self {
        Self {
            name: name.into(),
            duration,
        }
    }
}

/// Per-task timing information produced by the forward and backward passes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TaskTiming {
    /// Earliest possible start time (from forward pass).
    pub earliest_start: f64,
    /// Earliest possible finish time (from forward pass).
    pub earliest_finish: f64,
    /// Latest allowable start time (from backward pass).
    pub latest_start: f64,
    /// Latest allowable finish time (from backward pass).
    pub latest_finish: f64,
    /// Slack = latest_start - earliest_start.
    pub slack: f64,
}

/// A task together with its computed schedule bounds.
#[derive(Clone, Debug, PartialEq)]
pub struct ScheduledTask {
    pub name: String,
    pub duration: f64,
    pub timing: TaskTiming,
    pub critical: bool,
}

impl ScheduledTask {
    pub fn earliest_start(&self) -> f64 {
        self.timing.earliest_start
    }

    pub fn earliest_finish(&self) -> f64 {
        self.timing.earliest_finish
    }

    pub fn latest_start(&self) -> f64 {
        self.timing.latest_start
    }

    pub fn latest_finish(&self) -> f64 {
        self.timing.latest_finish
    }

    pub fn slack(&self) -> f64 {
        self.timing.slack
    }

    pub fn is_critical(&self) -> bool {
        self.critical
    }
}

/// Complete output of one schedule computation.
///
/// Immutable once built; every accessor is a read-only view.
#[derive(Clone, Debug)]
pub struct ScheduleResult {
    completion_time: f64,
    tasks: Vec<ScheduledTask>,
    topological_order: Vec<usize>,
    critical: Vec<usize>,
    critical_path: Vec<usize>,
    // name -> index of the first task carrying that name
    name_index: FxHashMap<String, usize>,
}

impl ScheduleResult {
    pub(crate) fn new(
        completion_time: f64,
        tasks: Vec<ScheduledTask>,
        topological_order: Vec<usize>,
        critical: Vec<usize>,
        critical_path: Vec<usize>,
    ) -> Self {
        let mut name_index: FxHashMap<String, usize> =
            FxHashMap::with_capacity_and_hasher(tasks.len(), Default::default());
        for (idx, task) in tasks.iter().enumerate() {
            name_index.entry(task.name.clone()).or_insert(idx);
        }

        Self {
            completion_time,
            tasks,
            topological_order,
            critical,
            critical_path,
            name_index,
        }
    }

    /// Minimum project completion time (max earliest finish over sink tasks).
    pub fn completion_time(&self) -> f64 {
        self.completion_time
    }

    /// All tasks in input index order.
    pub fn tasks(&self) -> &[ScheduledTask] {
        &self.tasks
    }

    /// Task at the given input index.
    pub fn task_at(&self, index: usize) -> Option<&ScheduledTask> {
        self.tasks.get(index)
    }

    /// Task by name. With duplicate names the first task wins.
    pub fn task(&self, name: &str) -> Option<&ScheduledTask> {
        self.name_index.get(name).map(|&idx| &self.tasks[idx])
    }

    /// Input index of the first task with the given name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Names of all tasks in the order they were scheduled.
    pub fn topological_order(&self) -> Vec<&str> {
        self.names(&self.topological_order)
    }

    pub fn topological_indices(&self) -> &[usize] {
        &self.topological_order
    }

    /// Names of zero-slack tasks in input index order.
    pub fn critical_tasks(&self) -> Vec<&str> {
        self.names(&self.critical)
    }

    pub fn critical_indices(&self) -> &[usize] {
        &self.critical
    }

    /// One end-to-end chain of critical tasks, first to last.
    ///
    /// Consecutive entries are joined by a dependency edge and the summed
    /// durations equal [`completion_time`](Self::completion_time).
    pub fn critical_path(&self) -> Vec<&str> {
        self.names(&self.critical_path)
    }

    pub fn critical_path_indices(&self) -> &[usize] {
        &self.critical_path
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn names(&self, indices: &[usize]) -> Vec<&str> {
        indices
            .iter()
            .map(|&idx| self.tasks[idx].name.as_str())
            .collect()
    }
}
