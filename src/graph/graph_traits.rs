//! Traits for graph interfaces

pub type IndexT = u32;

pub trait Graph {
    /// number of nodes
    fn n(&self) -> usize;

    fn neighbors(&self, i: IndexT) -> &[IndexT];
}

pub trait MutableGraph {
    fn add_edge(&mut self, from: IndexT, to: IndexT);
}
