//! Johnson's simple-cycle enumeration: search state and orchestration.
//!
//! # Algorithm Overview
//!
//! Vertices are taken as start vertices in increasing id order. For start
//! vertex `s` the blocking state of every vertex `>= s` is reset, the
//! recursive circuit search looks for paths from `s` back to `s`, and `s` is
//! then detached from the working adjacency. Detaching is what keeps each
//! cycle from being reported more than once: a cycle is only ever found from
//! its smallest vertex.
//!
//! Blocking keeps the total work bounded by `O((V + E)(C + 1))` for `C`
//! cycles: a vertex that led nowhere stays blocked until something it points
//! at becomes reachable again.
//!
//! # Undirected graphs
//!
//! Each undirected edge is a pair of opposite arcs. Closing edges that would
//! form a two-vertex back-and-forth loop are ignored, and because every real
//! cycle is walked once in each direction the second traversal is dropped by
//! the [`DuplicateFilter`].
//!
//! # Reuse
//!
//! A [`CycleSearch`] is built once per graph and reused across start
//! vertices; it is released when dropped. It is not reentrant: `search_one`
//! takes `&mut self`.
use crate::adjacency::WorkingAdjacency;
use crate::blocking::BlockingSets;
use crate::circuit::{Circuit, Halt};
use crate::dedup::DuplicateFilter;
use crate::error::CycleSearchError;
use crate::input::CycleInput;
use crate::interrupt::{Interrupt, NeverInterrupt};
use crate::options::SearchOptions;

// ---------------------------------------------------------------------------
// Outcome types
// ---------------------------------------------------------------------------

/// How a full-graph run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    /// Every start vertex was processed.
    Complete,
    /// [`SearchOptions::max_cycles`] cycles were accepted and the search
    /// stopped early.
    LimitReached,
}

/// Summary of a [`search_all`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    /// Cycles appended to the result collection by this run.
    pub cycles_found: usize,
    /// Start vertices for which a circuit search was launched.
    pub start_vertices_searched: usize,
    /// Whether the run finished or stopped at the cycle limit.
    pub status: SearchStatus,
}

// ---------------------------------------------------------------------------
// CycleSearch
// ---------------------------------------------------------------------------

/// Reusable state for enumerating the simple cycles of one graph.
#[derive(Debug, Clone)]
pub struct CycleSearch {
    adjacency: WorkingAdjacency,
    blocking: BlockingSets,
    path: Vec<usize>,
    filter: DuplicateFilter,
    options: SearchOptions,
    accepted: usize,
}

impl CycleSearch {
    /// Builds search state for `input` with default options.
    ///
    /// # Errors
    ///
    /// See [`CycleSearch::with_options`].
    pub fn new<G: CycleInput + ?Sized>(input: &G) -> Result<Self, CycleSearchError> {
        Self::with_options(input, SearchOptions::default())
    }

    /// Builds search state for `input`.
    ///
    /// The working adjacency is a sorted, deduplicated copy of `input`'s
    /// edges viewed through `options.mode`.
    ///
    /// # Errors
    ///
    /// - [`CycleSearchError::Allocation`] if any owned structure cannot be
    ///   allocated. Nothing is returned in that case.
    /// - [`CycleSearchError::VertexOutOfRange`] if `input` reports an edge
    ///   endpoint outside its vertex range.
    pub fn with_options<G: CycleInput + ?Sized>(
        input: &G,
        options: SearchOptions,
    ) -> Result<Self, CycleSearchError> {
        let adjacency = WorkingAdjacency::build(input, options.mode)?;
        let vertex_count = adjacency.vertex_count();
        let blocking = BlockingSets::new(vertex_count)?;
        let mut path = Vec::new();
        path.try_reserve_exact(vertex_count)?;

        tracing::debug!(
            vertices = vertex_count,
            entries = adjacency.entry_count(),
            directed = adjacency.is_directed(),
            "cycle search state initialised"
        );

        Ok(Self {
            adjacency,
            blocking,
            path,
            filter: DuplicateFilter::new(options.dedup),
            options,
            accepted: 0,
        })
    }

    /// Number of vertices of the underlying graph.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.vertex_count()
    }

    /// `false` for undirected inputs and [`SearchMode::All`](crate::SearchMode::All) runs.
    pub fn is_directed(&self) -> bool {
        self.adjacency.is_directed()
    }

    /// The current working adjacency.
    pub fn adjacency(&self) -> &WorkingAdjacency {
        &self.adjacency
    }

    /// Options this state was built with.
    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    /// Cycles accepted over the lifetime of this state.
    pub fn cycles_accepted(&self) -> usize {
        self.accepted
    }

    /// `true` once [`SearchOptions::max_cycles`] cycles have been accepted.
    pub fn limit_reached(&self) -> bool {
        self.options
            .max_cycles
            .is_some_and(|limit| self.accepted >= limit)
    }

    /// Finds every cycle through `s` in the current working graph, appends
    /// the new ones to `results`, then detaches `s`.
    ///
    /// On a freshly built state this reports every simple cycle through `s`.
    /// Within a full run, vertices below `s` have already been detached, so
    /// only cycles whose smallest vertex is `s` remain.
    ///
    /// Only blocking state for vertices `>= s` is reset. Calls on a reused
    /// state must therefore go in increasing `s`: after `search_one(2)`, a
    /// call to `search_one(4)` still sees vertex 3 as blocked if the earlier
    /// search left it so, and can miss cycles through it. Build a fresh
    /// [`CycleSearch`] for each arbitrary-vertex query.
    ///
    /// Returns `Ok(true)` if at least one cycle closed at `s`, `Ok(false)`
    /// otherwise. Once the cycle limit has been reached, returns `Ok(false)`
    /// without searching. If the limit is hit during this call, `Ok(true)` is
    /// returned and `s` is left attached.
    ///
    /// # Errors
    ///
    /// - [`CycleSearchError::VertexOutOfRange`] if `s >= vertex_count`; the
    ///   state is untouched.
    /// - [`CycleSearchError::Interrupted`] if `interrupt` fired. Cycles
    ///   already appended stay valid and `s` is left attached.
    pub fn search_one<I: Interrupt + ?Sized>(
        &mut self,
        s: usize,
        interrupt: &I,
        results: &mut Vec<Vec<usize>>,
    ) -> Result<bool, CycleSearchError> {
        let vertex_count = self.vertex_count();
        if s >= vertex_count {
            return Err(CycleSearchError::VertexOutOfRange {
                vertex: s,
                vertex_count,
            });
        }
        if self.limit_reached() {
            return Ok(false);
        }

        self.blocking.reset_from(s);
        self.path.clear();
        let before = self.accepted;

        let mut circuit = Circuit {
            adjacency: &self.adjacency,
            blocking: &mut self.blocking,
            path: &mut self.path,
            filter: &mut self.filter,
            results,
            interrupt,
            accepted: &mut self.accepted,
            limit: self.options.max_cycles,
            start: s,
        };
        let outcome = circuit.run(s);

        match outcome {
            Ok(found) => {
                self.adjacency.remove_vertex(s);
                tracing::debug!(
                    start = s,
                    found,
                    emitted = self.accepted - before,
                    remaining_entries = self.adjacency.entry_count(),
                    "start vertex processed"
                );
                Ok(found)
            }
            Err(Halt::LimitReached) => {
                self.path.clear();
                tracing::debug!(start = s, limit = ?self.options.max_cycles, "cycle limit reached");
                Ok(true)
            }
            Err(Halt::Interrupted) => {
                self.path.clear();
                tracing::warn!(
                    start = s,
                    cycles = self.accepted,
                    "cycle search interrupted"
                );
                Err(CycleSearchError::Interrupted)
            }
        }
    }

    /// Runs [`CycleSearch::search_one`] for every vertex in increasing order,
    /// skipping vertices with no remaining out-edges.
    ///
    /// # Errors
    ///
    /// [`CycleSearchError::Interrupted`] if `interrupt` fired; `results`
    /// keeps everything found up to that point.
    pub fn search_remaining<I: Interrupt + ?Sized>(
        &mut self,
        interrupt: &I,
        results: &mut Vec<Vec<usize>>,
    ) -> Result<SearchSummary, CycleSearchError> {
        let before = self.accepted;
        let mut searched = 0;
        let mut status = SearchStatus::Complete;

        for s in 0..self.vertex_count() {
            if !self.adjacency.has_out_edges(s) {
                continue;
            }
            if self.limit_reached() {
                status = SearchStatus::LimitReached;
                break;
            }
            searched += 1;
            self.search_one(s, interrupt, results)?;
        }
        if self.limit_reached() {
            status = SearchStatus::LimitReached;
        }

        let summary = SearchSummary {
            cycles_found: self.accepted - before,
            start_vertices_searched: searched,
            status,
        };
        tracing::debug!(
            cycles = summary.cycles_found,
            start_vertices = summary.start_vertices_searched,
            status = ?summary.status,
            "cycle search finished"
        );
        Ok(summary)
    }
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Enumerates every simple cycle of `input`, appending them to `results`.
///
/// Builds a [`CycleSearch`] once, processes every start vertex, and drops
/// the state before returning.
///
/// # Errors
///
/// - [`CycleSearchError::Allocation`] / [`CycleSearchError::VertexOutOfRange`]
///   from state construction.
/// - [`CycleSearchError::Interrupted`] if `interrupt` fired; `results` keeps
///   everything found up to that point.
pub fn search_all<G, I>(
    input: &G,
    options: SearchOptions,
    interrupt: &I,
    results: &mut Vec<Vec<usize>>,
) -> Result<SearchSummary, CycleSearchError>
where
    G: CycleInput + ?Sized,
    I: Interrupt + ?Sized,
{
    let mut state = CycleSearch::with_options(input, options)?;
    state.search_remaining(interrupt, results)
}

/// Returns every simple cycle of `input` using default options.
///
/// # Errors
///
/// [`CycleSearchError::Allocation`] or [`CycleSearchError::VertexOutOfRange`]
/// from state construction.
pub fn simple_cycles<G: CycleInput + ?Sized>(
    input: &G,
) -> Result<Vec<Vec<usize>>, CycleSearchError> {
    let mut results = Vec::new();
    search_all(input, SearchOptions::default(), &NeverInterrupt, &mut results)?;
    Ok(results)
}

#[cfg(test)]
mod tests;
