//! depth-first traversals with explicit stacks

use crate::graph::{Graph, IndexT};

/// marks every node reachable from `start` (including `start`)
pub fn reachable_from<G: Graph + ?Sized>(graph: &G, start: IndexT) -> Vec<bool> {
    let mut reached = vec![false; graph.n()];
    let mut stack = vec![start];
    reached[start as usize] = true;

    while let Some(v) = stack.pop() {
        for &w in graph.neighbors(v) {
            if !reached[w as usize] {
                reached[w as usize] = true;
                stack.push(w);
            }
        }
    }

    reached
}

/// Preorder flattening of the tree rooted at `root`.
///
/// `path` lists nodes in visiting order, children in neighborhood order.
/// The subtree of `v` is the contiguous slice
/// `path[position[v] ..= position[v] + exit[v] - entry[v]]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EulerTour {
    pub path: Vec<IndexT>,
    pub position: Vec<Option<usize>>,
    pub entry: Vec<usize>,
    pub exit: Vec<usize>,
}

impl EulerTour {
    pub fn compute<G: Graph + ?Sized>(graph: &G, root: IndexT) -> EulerTour {
        let n = graph.n();
        let mut path = Vec::with_capacity(n);
        let mut position = vec![None; n];
        let mut entry = vec![0; n];
        let mut exit = vec![0; n];
        let mut time = 0usize;

        let mut frames: Vec<(IndexT, usize)> = Vec::new();
        time += 1;
        entry[root as usize] = time;
        position[root as usize] = Some(path.len());
        path.push(root);
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let neighbors = graph.neighbors(frame.0);
            if frame.1 < neighbors.len() {
                let child = neighbors[frame.1];
                frame.1 += 1;
                if position[child as usize].is_none() {
                    time += 1;
                    entry[child as usize] = time;
                    position[child as usize] = Some(path.len());
                    path.push(child);
                    frames.push((child, 0));
                }
            } else {
                exit[frame.0 as usize] = time;
                frames.pop();
            }
        }

        EulerTour {
            path,
            position,
            entry,
            exit,
        }
    }

    /// number of nodes in the subtree of `v` other than `v` itself, `None` if
    /// `v` was not reached from the root
    pub fn descendants(&self, v: IndexT) -> Option<usize> {
        self.position[v as usize].map(|_| self.exit[v as usize] - self.entry[v as usize])
    }

    /// the node `steps` places after `v` in preorder, if still inside `v`'s subtree
    pub fn successor_in_subtree(&self, v: IndexT, steps: usize) -> Option<IndexT> {
        let start = self.position[v as usize]?;
        if steps > self.descendants(v)? {
            return None;
        }
        self.path.get(start + steps).copied()
    }
}
