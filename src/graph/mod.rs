//! Graph containers and the traversals shared by the tasks

pub mod scc;
pub mod traversal;


mod graph_traits;
mod adjacency_graph;
mod weighted_graph;

pub use graph_traits::*;
pub use adjacency_graph::*;
pub use weighted_graph::*;
