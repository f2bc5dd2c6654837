//! Tarjan's strongly connected components, without recursion

use crate::graph::{Graph, IndexT};

const UNVISITED: usize = usize::MAX;

/// Component assignment produced by [`tarjan`].
///
/// Components are numbered in the order Tarjan closes them, which is a
/// reverse topological order of the condensed graph: every edge between two
/// different components goes from a higher id to a lower one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    pub component: Vec<IndexT>,
    pub count: usize,
}

impl Condensation {
    pub fn component_of(&self, i: IndexT) -> IndexT {
        self.component[i as usize]
    }
}

/// Computes the strongly connected components of `graph`.
///
/// The DFS call stack is kept on the heap as `(node, next neighbor offset)`
/// frames, so arbitrarily long paths are fine.
pub fn tarjan<G: Graph + ?Sized>(graph: &G) -> Condensation {
    let n = graph.n();
    let mut index = vec![UNVISITED; n];
    let mut lowlink = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<IndexT> = Vec::new();
    let mut frames: Vec<(IndexT, usize)> = Vec::new();

    let mut component = vec![0 as IndexT; n];
    let mut count = 0usize;
    let mut counter = 0usize;

    for root in 0..n {
        if index[root] != UNVISITED {
            continue;
        }

        index[root] = counter;
        lowlink[root] = counter;
        counter += 1;
        stack.push(root as IndexT);
        on_stack[root] = true;
        frames.push((root as IndexT, 0));

        while let Some(frame) = frames.last_mut() {
            let v = frame.0 as usize;
            let neighbors = graph.neighbors(frame.0);

            if frame.1 < neighbors.len() {
                let w = neighbors[frame.1] as usize;
                frame.1 += 1;

                if index[w] == UNVISITED {
                    index[w] = counter;
                    lowlink[w] = counter;
                    counter += 1;
                    stack.push(w as IndexT);
                    on_stack[w] = true;
                    frames.push((w as IndexT, 0));
                } else if on_stack[w] {
                    lowlink[v] = lowlink[v].min(index[w]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                let parent = parent as usize;
                lowlink[parent] = lowlink[parent].min(lowlink[v]);
            }

            if lowlink[v] == index[v] {
                // v is the root of a component: everything above it on the stack belongs to it
                while let Some(w) = stack.pop() {
                    on_stack[w as usize] = false;
                    component[w as usize] = count as IndexT;
                    if w as usize == v {
                        break;
                    }
                }
                count += 1;
            }
        }
    }

    Condensation { component, count }
}
