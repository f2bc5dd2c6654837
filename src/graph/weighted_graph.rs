//! undirected graph with a u64 label on every edge

use crate::graph::IndexT;

/// Undirected adjacency lists of `(neighbor, label)` pairs. The label is a
/// cost for corridors and a period for portals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeightedGraph {
    neighborhoods: Vec<Vec<(IndexT, u64)>>,
}

impl WeightedGraph {
    pub fn empty(n: usize) -> WeightedGraph {
        WeightedGraph {
            neighborhoods: vec![Vec::new(); n],
        }
    }

    pub fn n(&self) -> usize {
        self.neighborhoods.len()
    }

    /// adds the edge in both directions
    pub fn add_undirected_edge(&mut self, a: IndexT, b: IndexT, label: u64) {
        assert!(a < self.n() as IndexT && b < self.n() as IndexT);
        self.neighborhoods[a as usize].push((b, label));
        self.neighborhoods[b as usize].push((a, label));
    }

    pub fn neighbors(&self, i: IndexT) -> &[(IndexT, u64)] {
        &self.neighborhoods[i as usize]
    }

    /// number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.neighborhoods.iter().map(|n| n.len()).sum::<usize>() / 2
    }

    /// iterates over every stored label, each undirected edge seen twice
    pub fn labels(&self) -> impl Iterator<Item = u64> + '_ {
        self.neighborhoods.iter().flatten().map(|&(_, label)| label)
    }
}
