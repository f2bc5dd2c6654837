pub mod data_handling;
pub mod graph;
pub mod tasks;
pub mod util;
