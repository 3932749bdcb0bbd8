/// The shrinking adjacency structure a cycle search runs over.
///
/// [`WorkingAdjacency`] is an arena of sorted out-neighbour lists indexed by
/// dense vertex id. It is built once from a [`CycleInput`] and afterwards
/// only ever loses entries: each start vertex is detached with
/// [`WorkingAdjacency::remove_vertex`] once every cycle through it has been
/// reported, so later start vertices never rediscover those cycles.
///
/// # Construction rules
///
/// - Directed input in [`SearchMode::Out`]: `u → v` becomes `v ∈ adj[u]`.
/// - Directed input in [`SearchMode::In`]: `u → v` becomes `u ∈ adj[v]`.
/// - Undirected input, or [`SearchMode::All`]: both directions are added.
/// - Parallel edges collapse to one entry; a self-loop appears at most once.
use std::collections::TryReserveError;

use crate::error::CycleSearchError;
use crate::input::CycleInput;
use crate::options::SearchMode;

/// Sorted, duplicate-free out-neighbour lists that shrink as start vertices
/// are retired.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingAdjacency {
    lists: Vec<Vec<usize>>,
    directed: bool,
}

impl WorkingAdjacency {
    /// Builds the working adjacency for `input` viewed through `mode`.
    ///
    /// Every list is sorted ascending and deduplicated.
    ///
    /// # Errors
    ///
    /// - [`CycleSearchError::Allocation`] if storage cannot be reserved.
    /// - [`CycleSearchError::VertexOutOfRange`] if `input` reports an edge
    ///   endpoint outside `[0, vertex_count)`.
    pub fn build<G: CycleInput + ?Sized>(
        input: &G,
        mode: SearchMode,
    ) -> Result<Self, CycleSearchError> {
        let vertex_count = input.vertex_count();
        let directed = input.is_directed() && mode != SearchMode::All;

        let mut lists: Vec<Vec<usize>> = Vec::new();
        lists.try_reserve_exact(vertex_count)?;
        lists.resize_with(vertex_count, Vec::new);

        let mut failure: Option<CycleSearchError> = None;
        input.for_each_edge(|u, v| {
            if failure.is_some() {
                return;
            }
            let outcome = if u >= vertex_count || v >= vertex_count {
                Err(CycleSearchError::VertexOutOfRange {
                    vertex: u.max(v),
                    vertex_count,
                })
            } else {
                insert_edge(&mut lists, u, v, directed, mode).map_err(CycleSearchError::from)
            };
            if let Err(e) = outcome {
                failure = Some(e);
            }
        });
        if let Some(e) = failure {
            return Err(e);
        }

        for list in &mut lists {
            list.sort_unstable();
            list.dedup();
        }

        Ok(Self { lists, directed })
    }

    /// Number of vertices, fixed at construction.
    pub fn vertex_count(&self) -> usize {
        self.lists.len()
    }

    /// `false` for undirected inputs and for [`SearchMode::All`].
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Current out-neighbours of `v`, ascending.
    pub fn neighbors(&self, v: usize) -> &[usize] {
        &self.lists[v]
    }

    /// `true` if `v` still has at least one outgoing entry.
    pub fn has_out_edges(&self, v: usize) -> bool {
        !self.lists[v].is_empty()
    }

    /// `true` if `to` is currently listed as a neighbour of `from`.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.lists[from].binary_search(&to).is_ok()
    }

    /// Total number of adjacency entries.
    ///
    /// An undirected edge contributes two entries, a self-loop one.
    pub fn entry_count(&self) -> usize {
        self.lists.iter().map(Vec::len).sum()
    }

    /// Detaches `s`: removes it from every neighbour list and clears its own.
    ///
    /// Afterwards [`WorkingAdjacency::is_detached`] holds for `s`.
    pub fn remove_vertex(&mut self, s: usize) {
        for list in &mut self.lists {
            if let Ok(pos) = list.binary_search(&s) {
                list.remove(pos);
            }
        }
        self.lists[s].clear();
    }

    /// `true` if `s` has no out-neighbours and appears in no other list.
    pub fn is_detached(&self, s: usize) -> bool {
        self.lists[s].is_empty() && self.lists.iter().all(|list| list.binary_search(&s).is_err())
    }
}

fn insert_edge(
    lists: &mut [Vec<usize>],
    u: usize,
    v: usize,
    directed: bool,
    mode: SearchMode,
) -> Result<(), TryReserveError> {
    if directed {
        match mode {
            SearchMode::In => push(&mut lists[v], u),
            SearchMode::Out | SearchMode::All => push(&mut lists[u], v),
        }
    } else {
        push(&mut lists[u], v)?;
        if u != v {
            push(&mut lists[v], u)?;
        }
        Ok(())
    }
}

fn push(list: &mut Vec<usize>, v: usize) -> Result<(), TryReserveError> {
    list.try_reserve(1)?;
    list.push(v);
    Ok(())
}
