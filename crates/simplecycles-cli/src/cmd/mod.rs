/// Command module for the `simplecycles` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// loaded graph plus parsed arguments and returns `Ok(())` on success or a
/// [`CliError`] on failure.
use std::time::Duration;

use simplecycles_core::{CycleSearchError, Deadline, EdgeListGraph, Interrupt};

use crate::error::CliError;

pub mod enumerate;
pub mod inspect;
pub mod through;

/// Optional `--timeout-ms` deadline, started when the command begins.
#[derive(Debug, Clone, Copy)]
pub struct Timeout {
    deadline: Option<Deadline>,
    timeout_ms: Option<u64>,
}

impl Timeout {
    /// Starts the clock; `None` never fires.
    pub fn start(timeout_ms: Option<u64>) -> Self {
        Self {
            deadline: timeout_ms.map(|ms| Deadline::after(Duration::from_millis(ms))),
            timeout_ms,
        }
    }

    /// Maps a core search error to a [`CliError`], given how many cycles were
    /// found before it happened.
    pub fn search_error(&self, e: CycleSearchError, partial: usize) -> CliError {
        match e {
            CycleSearchError::Interrupted => CliError::TimedOut {
                timeout_ms: self.timeout_ms.unwrap_or_default(),
                partial,
            },
            CycleSearchError::Allocation(_) | CycleSearchError::VertexOutOfRange { .. } => {
                CliError::InvalidGraph {
                    detail: e.to_string(),
                }
            }
        }
    }
}

impl Interrupt for Timeout {
    fn is_interrupted(&self) -> bool {
        self.deadline.as_ref().is_some_and(Interrupt::is_interrupted)
    }
}

/// Replaces vertex ids with display names (labels when present).
pub fn named_cycles(graph: &EdgeListGraph, cycles: &[Vec<usize>]) -> Vec<Vec<String>> {
    cycles
        .iter()
        .map(|cycle| cycle.iter().map(|&v| graph.display_name(v)).collect())
        .collect()
}

/// JSON value for one cycle: label strings when the graph is labelled,
/// numeric ids otherwise.
pub fn cycle_json(graph: &EdgeListGraph, cycle: &[usize]) -> serde_json::Value {
    if graph.labels.is_some() {
        serde_json::Value::Array(
            cycle
                .iter()
                .map(|&v| serde_json::Value::String(graph.display_name(v)))
                .collect(),
        )
    } else {
        serde_json::Value::Array(cycle.iter().map(|&v| v.into()).collect())
    }
}

/// Wraps a stdout write failure.
pub fn stdout_error(e: &std::io::Error) -> CliError {
    CliError::IoError {
        source: "stdout".to_owned(),
        detail: e.to_string(),
    }
}
