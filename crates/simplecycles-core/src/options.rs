//! Tuning knobs for a cycle search run.

/// How a directed input is viewed when building the working adjacency.
///
/// Undirected inputs ignore the mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Follow edges from source to target.
    #[default]
    Out,
    /// Follow edges from target to source. Every cycle comes out reversed.
    In,
    /// Ignore edge orientation; the run behaves as on an undirected graph.
    All,
}

/// How mirror traversals of the same undirected cycle are recognised.
///
/// Only consulted for undirected runs; directed runs never filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DedupStrategy {
    /// Two cycles are the same if they visit the same set of vertices.
    ///
    /// Cheap, but also collapses distinct cycles that happen to share a
    /// vertex set (the three 4-cycles of K4 count once).
    #[default]
    VertexSet,
    /// Two cycles are the same if one is a rotation or reversal of the
    /// other.
    CycleSequence,
}

/// Options accepted by [`CycleSearch::with_options`](crate::CycleSearch::with_options)
/// and [`search_all`](crate::search_all).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchOptions {
    /// Edge orientation policy for directed inputs.
    pub mode: SearchMode,
    /// Duplicate detection for undirected runs.
    pub dedup: DedupStrategy,
    /// Stop after this many cycles have been accepted. `None` is unbounded.
    pub max_cycles: Option<usize>,
}

impl SearchOptions {
    /// Returns a copy with `mode` replaced.
    #[must_use]
    pub fn mode(mut self, mode: SearchMode) -> Self {
        self.mode = mode;
        self
    }

    /// Returns a copy with `dedup` replaced.
    #[must_use]
    pub fn dedup(mut self, dedup: DedupStrategy) -> Self {
        self.dedup = dedup;
        self
    }

    /// Returns a copy with `max_cycles` replaced.
    #[must_use]
    pub fn max_cycles(mut self, max_cycles: Option<usize>) -> Self {
        self.max_cycles = max_cycles;
        self
    }
}
