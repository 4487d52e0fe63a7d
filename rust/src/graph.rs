//! Dependency graph over task indices and its topological ordering.

use std::collections::VecDeque;

use thiserror::Error;

use crate::log_debug;

/// Errors raised while building or ordering a dependency graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Kahn's algorithm could not order these tasks (indices, ascending).
    #[error("Circular dependency detected among tasks {0:?}")]
    CircularDependency(Vec<usize>),
    #[error("Dependency {predecessor} -> {successor} references a task outside 0..{task_count}")]
    TaskOutOfRange {
        predecessor: usize,
        successor: usize,
        task_count: usize,
    },
    #[error("Adjacency matrix row {row} has {len} entries, expected {expected}")]
    MalformedAdjacencyMatrix {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Convert a dense adjacency matrix into an edge list.
///
/// `matrix[i][j] == true` means task `j` is an immediate successor of task `i`.
/// Edges are emitted in row-major order.
pub fn edges_from_adjacency_matrix(
    matrix: &[Vec<bool>],
) -> Result<Vec<(usize, usize)>, GraphError> {
    let n = matrix.len();
    let mut edges = Vec::new();

    for (i, row) in matrix.iter().enumerate() {
        if row.len() != n {
            return Err(GraphError::MalformedAdjacencyMatrix {
                row: i,
                len: row.len(),
                expected: n,
            });
        }
        edges.extend(
            row.iter()
                .enumerate()
                .filter(|(_, &linked)| linked)
                .map(|(j, _)| (i, j)),
        );
    }

    Ok(edges)
}

/// Precedence relation over tasks `0..n`, stored as adjacency lists.
///
/// Both successor and predecessor lists are deduplicated and sorted by index,
/// which keeps every traversal deterministic.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    successors: Vec<Vec<usize>>,
    predecessors: Vec<Vec<usize>>,
}

impl DependencyGraph {
    /// Build a graph of `task_count` nodes from `(predecessor, successor)` edges.
    pub fn new(task_count: usize, edges: &[(usize, usize)]) -> Result<Self, GraphError> {
        let mut successors: Vec<Vec<usize>> = vec![Vec::new(); task_count];

        for &(predecessor, successor) in edges {
            if predecessor >= task_count || successor >= task_count {
                return Err(GraphError::TaskOutOfRange {
                    predecessor,
                    successor,
                    task_count,
                });
            }
            successors[predecessor].push(successor);
        }

        for succs in &mut successors {
            succs.sort_unstable();
            succs.dedup();
        }

        // Reverse map; iterating predecessors in index order keeps each list sorted
        let mut predecessors: Vec<Vec<usize>> = vec![Vec::new(); task_count];
        for (task, succs) in successors.iter().enumerate() {
            for &succ in succs {
                predecessors[succ].push(task);
            }
        }

        Ok(Self {
            successors,
            predecessors,
        })
    }

    /// Number of tasks.
    pub fn len(&self) -> usize {
        self.successors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.successors.is_empty()
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }

    #[inline]
    pub fn successors(&self, task: usize) -> &[usize] {
        &self.successors[task]
    }

    #[inline]
    pub fn predecessors(&self, task: usize) -> &[usize] {
        &self.predecessors[task]
    }

    /// A sink has no outgoing edges.
    #[inline]
    pub fn is_sink(&self, task: usize) -> bool {
        self.successors[task].is_empty()
    }

    /// A source has no incoming edges.
    #[inline]
    pub fn is_source(&self, task: usize) -> bool {
        self.predecessors[task].is_empty()
    }

    /// Sink tasks in index order.
    pub fn sinks(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len()).filter(|&task| self.is_sink(task))
    }

    /// Perform topological sort using Kahn's algorithm.
    ///
    /// The queue is seeded with zero in-degree tasks in index order and
    /// successors are released in index order, so the result only depends on
    /// the graph. Fails with [`GraphError::CircularDependency`] when some tasks
    /// can never reach in-degree zero.
    pub fn topological_order(&self, verbosity: u8) -> Result<Vec<usize>, GraphError> {
        let n = self.len();

        let mut in_degree: Vec<usize> = self.predecessors.iter().map(Vec::len).collect();

        let mut queue: VecDeque<usize> = (0..n).filter(|&task| in_degree[task] == 0).collect();
        log_debug!(verbosity, "  topo: initial ready queue {:?}", queue);

        let mut order: Vec<usize> = Vec::with_capacity(n);

        while let Some(task) = queue.pop_front() {
            order.push(task);

            for &succ in &self.successors[task] {
                in_degree[succ] -= 1;
                if in_degree[succ] == 0 {
                    log_debug!(verbosity, "  topo: task {} released by {}", succ, task);
                    queue.push_back(succ);
                }
            }
        }

        if order.len() != n {
            let unresolved: Vec<usize> = (0..n).filter(|&task| in_degree[task] > 0).collect();
            log_debug!(verbosity, "  topo: unresolved tasks {:?}", unresolved);
            return Err(GraphError::CircularDependency(unresolved));
        }

        Ok(order)
    }
}
