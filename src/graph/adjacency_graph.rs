//! a directed graph using a vector of vectors

use crate::graph::IndexT;

use super::{Graph, MutableGraph};

/// Directed adjacency lists. Neighborhoods keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdjacencyGraph {
    neighborhoods: Vec<Vec<IndexT>>,
}

impl AdjacencyGraph {
    /// constructs a new graph with `n` nodes and no edges
    pub fn empty(n: usize) -> AdjacencyGraph {
        AdjacencyGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    /// builds a graph with `n` nodes from a list of directed edges
    pub fn from_edges(n: usize, edges: &[(IndexT, IndexT)]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph::empty(n);
        for &(from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }

    /// returns the number of nodes in the graph
    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// returns the out-neighborhood of a node
    pub fn get_neighborhood(&self, i: IndexT) -> &[IndexT] {
        assert!(i < self.n() as IndexT);
        &self.neighborhoods[i as usize]
    }

    /// sum of out-degrees of all nodes
    pub fn total_edges(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum()
    }

    /// maximum out-degree of the graph
    pub fn max_degree(&self) -> usize {
        self.neighborhoods
            .iter()
            .map(|n| n.len())
            .max()
            .unwrap_or(0)
    }

    /// number of edges entering each node
    pub fn in_degrees(&self) -> Vec<usize> {
        let mut degrees = vec![0; self.n()];
        for &to in self.neighborhoods.iter().flatten() {
            degrees[to as usize] += 1;
        }
        degrees
    }
}

impl Graph for AdjacencyGraph {
    fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    fn neighbors(&self, i: IndexT) -> &[IndexT] {
        self.get_neighborhood(i)
    }
}

impl MutableGraph for AdjacencyGraph {
    fn add_edge(&mut self, from: IndexT, to: IndexT) {
        assert!(from < self.n() as IndexT && to < self.n() as IndexT);
        self.neighborhoods[from as usize].push(to);
    }
}
