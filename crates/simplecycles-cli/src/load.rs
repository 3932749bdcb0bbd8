//! Turns input text into a validated [`EdgeListGraph`].
use simplecycles_core::{EdgeListGraph, InputError, parse_edge_list};

use crate::cli::{Cli, InputFormat};
use crate::error::CliError;

/// Parses `content` according to the global input flags and validates it.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] for malformed JSON or edge-list lines.
/// - [`CliError::InvalidGraph`] for out-of-range edges or a label count that
///   does not match the vertex count.
pub fn load_graph(content: &str, cli: &Cli) -> Result<EdgeListGraph, CliError> {
    let graph = match cli.input_format {
        InputFormat::Json => {
            let graph: EdgeListGraph =
                serde_json::from_str(content).map_err(|e| CliError::ParseFailed {
                    detail: format!("line {}, column {}: {e}", e.line(), e.column()),
                })?;
            graph.validate().map_err(input_error_to_cli)?;
            graph
        }
        InputFormat::Edgelist => {
            parse_edge_list(content, !cli.undirected, cli.vertices).map_err(input_error_to_cli)?
        }
    };

    tracing::debug!(
        vertices = graph.vertices,
        edges = graph.edges.len(),
        directed = graph.directed,
        "graph loaded"
    );
    Ok(graph)
}

fn input_error_to_cli(e: InputError) -> CliError {
    match e {
        InputError::MalformedLine { .. } => CliError::ParseFailed {
            detail: e.to_string(),
        },
        InputError::EdgeOutOfRange { .. } | InputError::LabelCountMismatch { .. } => {
            CliError::InvalidGraph {
                detail: e.to_string(),
            }
        }
    }
}
