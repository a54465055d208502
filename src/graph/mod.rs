//! In-memory graph container and traversal: the core data structure.

pub mod builder;
pub mod container;
pub mod traversal;
pub(crate) mod view;

pub use builder::GraphBuilder;
pub use container::Graph;
