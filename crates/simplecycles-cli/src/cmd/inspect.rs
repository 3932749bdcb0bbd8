//! Implementation of `simplecycles inspect <file>`.
//!
//! Prints summary statistics for a graph: vertex and edge counts,
//! directedness, self-loops, parallel edges, and the number of adjacency
//! entries the search will actually walk after duplicates collapse.
//!
//! Exit codes: 0 = success, 2 = parse/build failure.
use std::collections::BTreeSet;

use simplecycles_core::{EdgeListGraph, SearchMode, WorkingAdjacency};

use crate::OutputFormat;
use crate::cmd::stdout_error;
use crate::error::CliError;

/// Statistics gathered from a loaded [`EdgeListGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectStats {
    pub vertices: usize,
    pub edges: usize,
    pub directed: bool,
    pub labelled: bool,
    pub self_loops: usize,
    /// Edges that repeat an earlier edge (in either orientation when
    /// undirected).
    pub parallel_edges: usize,
    /// Vertices with no incident edge.
    pub isolated_vertices: usize,
    /// Out-neighbour entries in the working adjacency.
    pub adjacency_entries: usize,
}

impl InspectStats {
    /// Computes statistics for `graph`.
    ///
    /// # Errors
    ///
    /// [`CliError::InvalidGraph`] if the working adjacency cannot be built.
    pub fn from_graph(graph: &EdgeListGraph) -> Result<Self, CliError> {
        let adjacency =
            WorkingAdjacency::build(graph, SearchMode::Out).map_err(|e| CliError::InvalidGraph {
                detail: e.to_string(),
            })?;

        let mut seen = BTreeSet::new();
        let mut touched = vec![false; graph.vertices];
        let mut self_loops = 0;
        let mut parallel_edges = 0;
        for &(u, v) in &graph.edges {
            if u == v {
                self_loops += 1;
            }
            let key = if graph.directed { (u, v) } else { (u.min(v), u.max(v)) };
            if !seen.insert(key) {
                parallel_edges += 1;
            }
            for end in [u, v] {
                if let Some(slot) = touched.get_mut(end) {
                    *slot = true;
                }
            }
        }

        Ok(Self {
            vertices: graph.vertices,
            edges: graph.edges.len(),
            directed: graph.directed,
            labelled: graph.labels.is_some(),
            self_loops,
            parallel_edges,
            isolated_vertices: touched.iter().filter(|&&t| !t).count(),
            adjacency_entries: adjacency.entry_count(),
        })
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// [`CliError`] with exit code 2 if the graph cannot be analysed or stdout
/// cannot be written.
pub fn run(graph: &EdgeListGraph, format: OutputFormat) -> Result<(), CliError> {
    let stats = InspectStats::from_graph(graph)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, &stats),
        OutputFormat::Json => print_json(&mut out, &stats),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let kind = if stats.directed { "directed" } else { "undirected" };
    writeln!(w, "kind:               {kind}")?;
    writeln!(w, "vertices:           {}", stats.vertices)?;
    writeln!(w, "edges:              {}", stats.edges)?;
    writeln!(w, "labelled:           {}", stats.labelled)?;
    writeln!(w, "self_loops:         {}", stats.self_loops)?;
    writeln!(w, "parallel_edges:     {}", stats.parallel_edges)?;
    writeln!(w, "isolated_vertices:  {}", stats.isolated_vertices)?;
    writeln!(w, "adjacency_entries:  {}", stats.adjacency_entries)?;
    Ok(())
}

fn print_json<W: std::io::Write>(w: &mut W, stats: &InspectStats) -> std::io::Result<()> {
    let output = serde_json::json!({
        "directed": stats.directed,
        "vertices": stats.vertices,
        "edges": stats.edges,
        "labelled": stats.labelled,
        "self_loops": stats.self_loops,
        "parallel_edges": stats.parallel_edges,
        "isolated_vertices": stats.isolated_vertices,
        "adjacency_entries": stats.adjacency_entries,
    });
    let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
