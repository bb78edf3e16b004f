//! Error types exposed by the engine API and a convenient result alias.

use crate::metrics::TimerNotStarted;

/// Errors returned while computing a minimum spanning tree/forest.
#[derive(Clone, Debug, thiserror::Error, Eq, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// Prim's fixed root (vertex 0) does not exist in an empty graph.
    #[error("cannot grow a spanning tree from vertex 0 of an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex index that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    InvalidEdgeEndpoint {
        /// The out-of-range vertex index referenced by an edge.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// The run timer was stopped without having been started.
    #[error(transparent)]
    Timer(#[from] TimerNotStarted),
}

impl MstError {
    /// Returns a stable, machine-readable error code for the variant.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::InvalidEdgeEndpoint { .. } => MstErrorCode::InvalidEdgeEndpoint,
            Self::Timer(_) => MstErrorCode::TimerNotStarted,
        }
    }
}

/// Machine-readable error codes for [`MstError`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum MstErrorCode {
    /// Prim's fixed root (vertex 0) does not exist in an empty graph.
    EmptyGraph,
    /// An edge referenced a vertex index that is not present in the graph.
    InvalidEdgeEndpoint,
    /// The run timer was stopped without having been started.
    TimerNotStarted,
}

impl MstErrorCode {
    /// Returns the symbolic identifier for logging surfaces.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::InvalidEdgeEndpoint => "INVALID_EDGE_ENDPOINT",
            Self::TimerNotStarted => "TIMER_NOT_STARTED",
        }
    }
}

/// Convenient alias for results returned by the engine API.
pub type Result<T> = core::result::Result<T, MstError>;
