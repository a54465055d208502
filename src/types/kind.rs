//! Directed vs. undirected graph kind.

use serde::Serialize;

/// Whether edges carry a direction. Fixed when a graph is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphKind {
    /// Edges run from source to target only.
    Directed,
    /// Every edge is mirrored with identical weight.
    Undirected,
}

impl GraphKind {
    /// Map the construction flag to a kind.
    pub fn from_directed(directed: bool) -> Self {
        if directed {
            Self::Directed
        } else {
            Self::Undirected
        }
    }

    /// True for `Directed`.
    pub fn is_directed(&self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Return a human-readable name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
