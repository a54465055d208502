//! All data types for the graphkit library.

pub mod edge;
pub mod error;
pub mod kind;
pub mod stats;

pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use kind::GraphKind;
pub use stats::GraphStats;

/// Weight given to an edge when none is specified.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Adjacency-matrix entry for an absent edge.
pub const NO_EDGE: f64 = f64::INFINITY;

/// Default `max_length` (in edges) for path enumeration from the CLI.
pub const DEFAULT_MAX_PATH_LENGTH: usize = 10;
