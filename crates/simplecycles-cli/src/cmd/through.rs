//! Implementation of `simplecycles through <file> <vertex>`.
//!
//! Builds fresh search state and processes only `vertex` as start vertex, so
//! every simple cycle passing through it is reported, each starting at
//! `vertex`.
//!
//! Output (human mode): one cycle per line, vertices separated by ` -> `.
//! Output (JSON mode): `{"vertex": V, "cycles": [[...], ...], "count": N}`.
//!
//! Exit codes: 0 = at least one cycle, 1 = vertex not found / no cycle /
//! timed out, 2 = parse/build failure.
use simplecycles_core::{CycleSearch, EdgeListGraph, SearchOptions};

use crate::OutputFormat;
use crate::cmd::{Timeout, cycle_json, named_cycles, stdout_error};
use crate::error::CliError;

/// Runs the `through` command.
///
/// # Errors
///
/// - [`CliError::VertexNotFound`] if `reference` names no vertex.
/// - [`CliError::NoCycles`] if no cycle passes through the vertex.
/// - [`CliError::TimedOut`] if `timeout` fires.
pub fn run(
    graph: &EdgeListGraph,
    reference: &str,
    options: SearchOptions,
    timeout: &Timeout,
    format: OutputFormat,
) -> Result<(), CliError> {
    let vertex = graph
        .resolve_vertex(reference)
        .ok_or_else(|| CliError::VertexNotFound {
            reference: reference.to_owned(),
        })?;

    let mut state =
        CycleSearch::with_options(graph, options).map_err(|e| timeout.search_error(e, 0))?;
    let mut cycles = Vec::new();
    let found = state
        .search_one(vertex, timeout, &mut cycles)
        .map_err(|e| timeout.search_error(e, cycles.len()))?;

    if !found || cycles.is_empty() {
        return Err(CliError::NoCycles {
            vertex: graph.display_name(vertex),
        });
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, graph, &cycles),
        OutputFormat::Json => print_json(&mut out, graph, vertex, &cycles),
    }
    .map_err(|e| stdout_error(&e))
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    graph: &EdgeListGraph,
    cycles: &[Vec<usize>],
) -> std::io::Result<()> {
    for cycle in named_cycles(graph, cycles) {
        writeln!(w, "{}", cycle.join(" -> "))?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    graph: &EdgeListGraph,
    vertex: usize,
    cycles: &[Vec<usize>],
) -> std::io::Result<()> {
    let output = serde_json::json!({
        "vertex": graph.display_name(vertex),
        "cycles": cycles.iter().map(|c| cycle_json(graph, c)).collect::<Vec<_>>(),
        "count": cycles.len(),
    });
    let json = serde_json::to_string_pretty(&output).map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
