//! Fewest context switches when running a task DAG on a machine that keeps
//! one of two data sets loaded at a time.
//!
//! The schedule is greedy: run everything that is ready and uses the loaded
//! data set, switch only when nothing of that kind is left. The greedy run is
//! tried starting from each data set and the better one is kept.

use std::collections::VecDeque;
use std::io::Write;

use tracing::debug;

use crate::data_handling::{InputError, Tokens};
use crate::graph::{AdjacencyGraph, Graph, IndexT, MutableGraph};
use crate::tasks::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSet {
    First,
    Second,
}

impl DataSet {
    pub fn other(self) -> DataSet {
        match self {
            DataSet::First => DataSet::Second,
            DataSet::Second => DataSet::First,
        }
    }

    fn slot(self) -> usize {
        match self {
            DataSet::First => 0,
            DataSet::Second => 1,
        }
    }
}

impl TryFrom<i64> for DataSet {
    type Error = InputError;

    fn try_from(value: i64) -> Result<DataSet, InputError> {
        match value {
            1 => Ok(DataSet::First),
            2 => Ok(DataSet::Second),
            other => Err(InputError::InvalidDataSet(other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workload {
    pub data_set: Vec<DataSet>,
    /// `x -> y` when x must finish before y starts
    pub dependencies: AdjacencyGraph,
}

/// Runs the greedy schedule with `first` loaded initially and counts switches.
///
/// Returns the switch count and how many tasks were scheduled; the latter is
/// smaller than the task count only when the dependencies have a cycle.
pub fn count_switches(workload: &Workload, first: DataSet) -> (usize, usize) {
    let graph = &workload.dependencies;
    let mut in_degree = graph.in_degrees();
    let mut queues: [VecDeque<IndexT>; 2] = [VecDeque::new(), VecDeque::new()];

    for (task, &degree) in in_degree.iter().enumerate() {
        if degree == 0 {
            queues[workload.data_set[task].slot()].push_back(task as IndexT);
        }
    }

    let mut switches = 0;
    let mut scheduled = 0;
    let mut loaded = first;

    while queues.iter().any(|q| !q.is_empty()) {
        // drain the loaded set, including tasks released along the way
        while let Some(task) = queues[loaded.slot()].pop_front() {
            scheduled += 1;
            for &next in graph.neighbors(task) {
                in_degree[next as usize] -= 1;
                if in_degree[next as usize] == 0 {
                    queues[workload.data_set[next as usize].slot()].push_back(next);
                }
            }
        }

        loaded = loaded.other();
        if !queues[loaded.slot()].is_empty() {
            switches += 1;
        }
    }

    (switches, scheduled)
}

/// Minimum over both initial data sets.
pub fn min_context_switches(workload: &Workload) -> Result<usize, InputError> {
    let n = workload.data_set.len();
    let (from_first, scheduled) = count_switches(workload, DataSet::First);
    if scheduled < n {
        return Err(InputError::CyclicDependencies { scheduled, n });
    }
    let (from_second, _) = count_switches(workload, DataSet::Second);

    debug!(from_first, from_second, "greedy schedules");
    Ok(from_first.min(from_second))
}

pub struct Supercomputer;

impl Task for Supercomputer {
    const NAME: &'static str = "supercomputer";

    type Instance = Workload;
    type Answer = usize;

    /// `n m`, the data set of each task, then `m` dependencies `x y`
    fn parse(tokens: &mut Tokens<'_>) -> Result<Workload, InputError> {
        let n = tokens.count("number of tasks")?;
        let m = tokens.count("number of dependencies")?;

        let data_set = (0..n)
            .map(|_| DataSet::try_from(tokens.next::<i64>("data set")?))
            .collect::<Result<Vec<_>, _>>()?;

        let mut dependencies = AdjacencyGraph::empty(n);
        for _ in 0..m {
            let from = tokens.node(n)?;
            let to = tokens.node(n)?;
            dependencies.add_edge(from, to);
        }

        Ok(Workload {
            data_set,
            dependencies,
        })
    }

    fn solve(workload: &Workload) -> Result<usize, InputError> {
        min_context_switches(workload)
    }

    fn write_answer<W: Write>(out: &mut W, switches: &usize) -> std::io::Result<()> {
        writeln!(out, "{switches}")
    }
}
