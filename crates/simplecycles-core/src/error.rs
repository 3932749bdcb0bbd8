/// Error types for graph input validation and cycle search.
///
/// The taxonomy is deliberately narrow. A start vertex with no cycle through
/// it is a normal outcome reported as `Ok(false)`, never an error.
use std::collections::TryReserveError;

/// Errors raised while setting up or running a cycle search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CycleSearchError {
    /// Reserving storage for the working adjacency, the blocking vector or
    /// the block-dependent sets failed. No search state was created.
    #[error("failed to allocate cycle search state: {0}")]
    Allocation(#[from] TryReserveError),

    /// A start vertex outside `[0, vertex_count)` was requested.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the search state.
        vertex_count: usize,
    },

    /// The cooperative interrupt fired before the search completed.
    ///
    /// Cycles appended to the result collection before this point remain
    /// valid.
    #[error("cycle search interrupted")]
    Interrupted,
}

/// Errors raised while reading or validating an input graph.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    /// An edge endpoint is not a vertex of the graph.
    #[error("edge {index} ({from} -> {to}) references a vertex >= {vertices}")]
    EdgeOutOfRange {
        /// Position of the edge in the edge list.
        index: usize,
        /// Edge source.
        from: usize,
        /// Edge target.
        to: usize,
        /// Declared vertex count.
        vertices: usize,
    },

    /// `labels` is present but does not name every vertex exactly once.
    #[error("expected {vertices} labels, found {labels}")]
    LabelCountMismatch {
        /// Declared vertex count.
        vertices: usize,
        /// Number of labels supplied.
        labels: usize,
    },

    /// A line of a text edge list could not be parsed.
    #[error("line {line}: {detail}")]
    MalformedLine {
        /// 1-based line number.
        line: usize,
        /// What was wrong with it.
        detail: String,
    },
}
