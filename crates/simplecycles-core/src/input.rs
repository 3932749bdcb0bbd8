/// Read-only graph views consumed by the cycle search.
///
/// The engine only needs three things from a graph: how many vertices it
/// has, whether it is directed, and its edges as pairs of dense vertex ids in
/// `[0, vertex_count)`. [`CycleInput`] captures exactly that, and is
/// implemented for the crate's own serde-friendly [`EdgeListGraph`] as well
/// as for `petgraph`'s [`Graph`] and [`StableGraph`].
///
/// Parallel edges and repeated self-loops are passed through untouched;
/// collapsing them is the job of
/// [`WorkingAdjacency`](crate::adjacency::WorkingAdjacency).
use petgraph::graph::{Graph, IndexType};
use petgraph::stable_graph::StableGraph;
use petgraph::EdgeType;
use petgraph::visit::{EdgeRef, IntoEdgeReferences, NodeIndexable};
use serde::{Deserialize, Serialize};

use crate::error::InputError;

// ---------------------------------------------------------------------------
// CycleInput
// ---------------------------------------------------------------------------

/// An immutable graph handle the cycle search can read from.
pub trait CycleInput {
    /// Number of vertices; vertex ids are `0..vertex_count()`.
    fn vertex_count(&self) -> usize;

    /// `true` if edges have an orientation.
    fn is_directed(&self) -> bool;

    /// Calls `f(source, target)` once for every stored edge.
    ///
    /// Undirected graphs report each edge once, in either orientation.
    fn for_each_edge<F>(&self, f: F)
    where
        F: FnMut(usize, usize);
}

impl<T: CycleInput + ?Sized> CycleInput for &T {
    fn vertex_count(&self) -> usize {
        (**self).vertex_count()
    }

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn for_each_edge<F>(&self, f: F)
    where
        F: FnMut(usize, usize),
    {
        (**self).for_each_edge(f);
    }
}

impl<N, E, Ty: EdgeType, Ix: IndexType> CycleInput for Graph<N, E, Ty, Ix> {
    fn vertex_count(&self) -> usize {
        self.node_bound()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        for edge in self.edge_references() {
            f(self.to_index(edge.source()), self.to_index(edge.target()));
        }
    }
}

/// Vacant slots left by removed nodes behave as isolated vertices.
impl<N, E, Ty: EdgeType, Ix: IndexType> CycleInput for StableGraph<N, E, Ty, Ix> {
    fn vertex_count(&self) -> usize {
        self.node_bound()
    }

    fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        for edge in self.edge_references() {
            f(self.to_index(edge.source()), self.to_index(edge.target()));
        }
    }
}

// ---------------------------------------------------------------------------
// EdgeListGraph
// ---------------------------------------------------------------------------

/// A plain edge-list graph, the on-disk JSON shape read by the CLI.
///
/// ```json
/// { "directed": true, "vertices": 3, "edges": [[0, 1], [1, 2], [2, 0]] }
/// ```
///
/// `labels`, when present, names every vertex and is only used for output.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeListGraph {
    /// Whether edges are oriented.
    pub directed: bool,
    /// Number of vertices.
    pub vertices: usize,
    /// Edges as `[source, target]` pairs.
    #[serde(default)]
    pub edges: Vec<(usize, usize)>,
    /// Optional per-vertex display names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

impl EdgeListGraph {
    /// Creates an edge-list graph with no labels.
    pub fn new(directed: bool, vertices: usize, edges: Vec<(usize, usize)>) -> Self {
        Self {
            directed,
            vertices,
            edges,
            labels: None,
        }
    }

    /// Creates a directed graph whose vertex count is one past the largest
    /// endpoint.
    pub fn directed_from_edges(edges: &[(usize, usize)]) -> Self {
        Self::new(true, implied_vertex_count(edges), edges.to_vec())
    }

    /// Creates an undirected graph whose vertex count is one past the
    /// largest endpoint.
    pub fn undirected_from_edges(edges: &[(usize, usize)]) -> Self {
        Self::new(false, implied_vertex_count(edges), edges.to_vec())
    }

    /// Checks that every edge endpoint is a vertex and that `labels`, if
    /// present, has one entry per vertex.
    ///
    /// # Errors
    ///
    /// - [`InputError::EdgeOutOfRange`] for the first edge with an endpoint
    ///   `>= vertices`.
    /// - [`InputError::LabelCountMismatch`] if the label count is wrong.
    pub fn validate(&self) -> Result<(), InputError> {
        for (index, &(from, to)) in self.edges.iter().enumerate() {
            if from >= self.vertices || to >= self.vertices {
                return Err(InputError::EdgeOutOfRange {
                    index,
                    from,
                    to,
                    vertices: self.vertices,
                });
            }
        }
        if let Some(labels) = &self.labels {
            if labels.len() != self.vertices {
                return Err(InputError::LabelCountMismatch {
                    vertices: self.vertices,
                    labels: labels.len(),
                });
            }
        }
        Ok(())
    }

    /// Returns the display name of `vertex`: its label if one exists,
    /// otherwise its decimal id.
    pub fn display_name(&self, vertex: usize) -> String {
        self.labels
            .as_ref()
            .and_then(|labels| labels.get(vertex))
            .cloned()
            .unwrap_or_else(|| vertex.to_string())
    }

    /// Resolves a vertex reference given either as a label or as a decimal
    /// id. Labels take precedence.
    pub fn resolve_vertex(&self, reference: &str) -> Option<usize> {
        if let Some(labels) = &self.labels {
            if let Some(pos) = labels.iter().position(|l| l == reference) {
                return Some(pos);
            }
        }
        reference
            .parse::<usize>()
            .ok()
            .filter(|&v| v < self.vertices)
    }

    /// Builds the disjoint union of `self` and `other`: `other`'s vertex ids
    /// are shifted by `self.vertices`.
    ///
    /// Directedness is taken from `self`. Labels are kept only when both
    /// sides carry them.
    pub fn disjoint_union(&self, other: &EdgeListGraph) -> EdgeListGraph {
        let offset = self.vertices;
        let mut edges = self.edges.clone();
        edges.extend(other.edges.iter().map(|&(u, v)| (u + offset, v + offset)));
        let labels = match (&self.labels, &other.labels) {
            (Some(a), Some(b)) => Some(a.iter().chain(b).cloned().collect()),
            (Some(_), None) | (None, Some(_)) | (None, None) => None,
        };
        EdgeListGraph {
            directed: self.directed,
            vertices: self.vertices + other.vertices,
            edges,
            labels,
        }
    }
}

impl CycleInput for EdgeListGraph {
    fn vertex_count(&self) -> usize {
        self.vertices
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn for_each_edge<F>(&self, mut f: F)
    where
        F: FnMut(usize, usize),
    {
        for &(u, v) in &self.edges {
            f(u, v);
        }
    }
}

fn implied_vertex_count(edges: &[(usize, usize)]) -> usize {
    edges
        .iter()
        .map(|&(u, v)| u.max(v).saturating_add(1))
        .max()
        .unwrap_or(0)
}

// ---------------------------------------------------------------------------
// Text edge lists
// ---------------------------------------------------------------------------

/// Parses a whitespace-separated text edge list, one `u v` pair per line.
///
/// Blank lines and lines starting with `#` are skipped. When `vertices` is
/// `None` the vertex count is one past the largest id seen.
///
/// # Errors
///
/// [`InputError::MalformedLine`] for a line that is not exactly two
/// non-negative integers below `usize::MAX`, and [`InputError::EdgeOutOfRange`] when an
/// explicit `vertices` is too small.
pub fn parse_edge_list(
    text: &str,
    directed: bool,
    vertices: Option<usize>,
) -> Result<EdgeListGraph, InputError> {
    let mut edges = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut fields = line.split_whitespace();
        let (Some(a), Some(b), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(InputError::MalformedLine {
                line: idx + 1,
                detail: format!("expected two vertex ids, got {line:?}"),
            });
        };
        let parse = |field: &str| {
            let id = field.parse::<usize>().map_err(|e| InputError::MalformedLine {
                line: idx + 1,
                detail: format!("invalid vertex id {field:?}: {e}"),
            })?;
            if id == usize::MAX {
                return Err(InputError::MalformedLine {
                    line: idx + 1,
                    detail: format!("vertex id {id} is too large"),
                });
            }
            Ok(id)
        };
        edges.push((parse(a)?, parse(b)?));
    }

    let graph = EdgeListGraph::new(
        directed,
        vertices.unwrap_or_else(|| implied_vertex_count(&edges)),
        edges,
    );
    graph.validate()?;
    Ok(graph)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
