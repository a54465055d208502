//! Serialization adapters: interchange records (JSON) and adjacency matrices.

pub mod matrix;
pub mod record;

pub use matrix::AdjacencyMatrix;
pub use record::{EdgeRecord, GraphRecord};
