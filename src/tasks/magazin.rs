//! Subtree-order successor queries over the warehouse tree.
//!
//! A query `(d, e)` asks for the deposit reached after `e` steps of a
//! preorder walk started at `d`, provided the walk has not left `d`'s
//! subtree. With the tree flattened once into preorder, each query is a
//! bounds check and an array lookup.

use std::io::Write;

use rayon::prelude::*;
use tracing::debug;

use crate::data_handling::{InputError, Tokens};
use crate::graph::traversal::EulerTour;
use crate::graph::{AdjacencyGraph, IndexT, MutableGraph};
use crate::tasks::Task;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub node: IndexT,
    pub steps: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warehouse {
    /// parent -> children, children in input order
    pub tree: AdjacencyGraph,
    pub queries: Vec<Query>,
}

/// Answers every query against the preorder of the tree rooted at node 0.
pub fn answer_queries(warehouse: &Warehouse) -> Vec<Option<IndexT>> {
    // an empty tree cannot have valid queries
    if warehouse.tree.n() == 0 {
        return vec![None; warehouse.queries.len()];
    }

    let tour = EulerTour::compute(&warehouse.tree, 0);
    debug!(
        visited = tour.path.len(),
        queries = warehouse.queries.len(),
        "flattened warehouse tree"
    );

    warehouse
        .queries
        .par_iter()
        .map(|q| tour.successor_in_subtree(q.node, q.steps))
        .collect()
}

pub struct Magazin;

impl Task for Magazin {
    const NAME: &'static str = "magazin";

    type Instance = Warehouse;
    type Answer = Vec<Option<IndexT>>;

    /// `n q`, the parents of nodes `2..=n`, then `q` queries `d e`
    fn parse(tokens: &mut Tokens<'_>) -> Result<Warehouse, InputError> {
        let n = tokens.count("number of deposits")?;
        let q = tokens.count("number of queries")?;

        let mut tree = AdjacencyGraph::empty(n);
        for child in 1..n {
            let parent = tokens.node(n)?;
            tree.add_edge(parent, child as IndexT);
        }

        let mut queries = Vec::with_capacity(q);
        for _ in 0..q {
            let node = tokens.node(n)?;
            let steps = tokens.count("number of steps")?;
            queries.push(Query { node, steps });
        }

        Ok(Warehouse { tree, queries })
    }

    fn solve(warehouse: &Warehouse) -> Result<Self::Answer, InputError> {
        Ok(answer_queries(warehouse))
    }

    /// one line per query, 1-based node id or `-1`
    fn write_answer<W: Write>(out: &mut W, answers: &Self::Answer) -> std::io::Result<()> {
        for answer in answers {
            match answer {
                Some(node) => writeln!(out, "{}", node + 1)?,
                None => writeln!(out, "-1")?,
            }
        }
        Ok(())
    }
}
