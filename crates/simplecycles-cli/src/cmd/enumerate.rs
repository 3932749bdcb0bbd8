//! Implementation of `simplecycles enumerate <file>`.
//!
//! Runs a full cycle search and writes the cycles to stdout.
//!
//! Flags:
//! - `--mode out|in|all`: edge orientation for directed graphs.
//! - `--dedup vertex-set|sequence`: duplicate detection for undirected runs.
//! - `--max-cycles <n>`: stop after `n` cycles.
//! - `--count`: print only the number of cycles.
//!
//! Output (human mode): one cycle per line, vertices separated by ` -> `.
//! Output (JSON mode): `{"cycles": [[...], ...], "count": N, "status": S}`
//! where `S` is `"complete"` or `"limit_reached"`.
//!
//! Exit codes: 0 = success, 1 = timed out, 2 = parse/build failure.
use simplecycles_core::{EdgeListGraph, SearchOptions, SearchStatus, search_all};

use crate::OutputFormat;
use crate::cmd::{Timeout, cycle_json, named_cycles, stdout_error};
use crate::error::CliError;

/// Runs the `enumerate` command.
///
/// # Errors
///
/// - [`CliError::TimedOut`] (exit 1) if `timeout` fires.
/// - [`CliError::InvalidGraph`] (exit 2) if search state cannot be built.
pub fn run(
    graph: &EdgeListGraph,
    options: SearchOptions,
    count_only: bool,
    timeout: &Timeout,
    format: OutputFormat,
) -> Result<(), CliError> {
    let mut cycles = Vec::new();
    let summary = search_all(graph, options, timeout, &mut cycles)
        .map_err(|e| timeout.search_error(e, cycles.len()))?;

    tracing::info!(
        cycles = summary.cycles_found,
        start_vertices = summary.start_vertices_searched,
        "enumeration finished"
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Human => print_human(&mut out, graph, &cycles, count_only),
        OutputFormat::Json => print_json(&mut out, graph, &cycles, summary.status, count_only),
    }
    .map_err(|e| stdout_error(&e))
}

fn status_str(status: SearchStatus) -> &'static str {
    match status {
        SearchStatus::Complete => "complete",
        SearchStatus::LimitReached => "limit_reached",
    }
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    graph: &EdgeListGraph,
    cycles: &[Vec<usize>],
    count_only: bool,
) -> std::io::Result<()> {
    if count_only {
        return writeln!(w, "{}", cycles.len());
    }
    for cycle in named_cycles(graph, cycles) {
        writeln!(w, "{}", cycle.join(" -> "))?;
    }
    Ok(())
}

fn print_json<W: std::io::Write>(
    w: &mut W,
    graph: &EdgeListGraph,
    cycles: &[Vec<usize>],
    status: SearchStatus,
    count_only: bool,
) -> std::io::Result<()> {
    let mut obj = serde_json::Map::new();
    if !count_only {
        obj.insert(
            "cycles".to_owned(),
            serde_json::Value::Array(cycles.iter().map(|c| cycle_json(graph, c)).collect()),
        );
    }
    obj.insert("count".to_owned(), cycles.len().into());
    obj.insert("status".to_owned(), status_str(status).into());

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))
        .map_err(std::io::Error::other)?;
    writeln!(w, "{json}")
}
