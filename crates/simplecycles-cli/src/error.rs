/// CLI error types with associated exit codes.
///
/// Every [`CliError`] variant maps to a stable exit code via
/// [`CliError::exit_code`]:
///
/// - Exit code **2**: the input could not be read, parsed, or turned into a
///   searchable graph.
/// - Exit code **1**: the search ran but produced a well-defined failure
///   (unknown vertex, no cycle through it, timeout).
use std::fmt;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `simplecycles` CLI can produce.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// A file argument could not be found on the filesystem.
    FileNotFound {
        /// The path that was not found.
        path: PathBuf,
    },

    /// The process lacks permission to read a file.
    PermissionDenied {
        /// The path that could not be read.
        path: PathBuf,
    },

    /// The input exceeds the configured `--max-file-size` limit.
    FileTooLarge {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The configured size limit in bytes.
        limit: u64,
        /// The actual size in bytes; `None` for stdin.
        actual: Option<u64>,
    },

    /// The input bytes are not valid UTF-8.
    InvalidUtf8 {
        /// `"-"` for stdin, or the filesystem path.
        source: String,
        /// The byte offset of the first invalid byte sequence.
        byte_offset: usize,
    },

    /// An I/O error occurred while reading from stdin.
    StdinReadError {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Any other I/O error.
    IoError {
        /// `"-"` for stdin, `"stdout"`, or the filesystem path.
        source: String,
        /// The underlying I/O error message.
        detail: String,
    },

    /// The input is not a well-formed graph document.
    ParseFailed {
        /// Parser message including position.
        detail: String,
    },

    /// The graph parsed but is inconsistent (edge endpoints out of range,
    /// wrong label count) or search state could not be built for it.
    InvalidGraph {
        /// Description of the problem.
        detail: String,
    },

    // --- Exit code 1: logical failures ---
    /// The requested vertex is neither a label nor an in-range id.
    VertexNotFound {
        /// The reference given on the command line.
        reference: String,
    },

    /// No simple cycle passes through the requested vertex.
    NoCycles {
        /// Display name of the vertex.
        vertex: String,
    },

    /// `--timeout-ms` elapsed before the search finished.
    TimedOut {
        /// The configured timeout.
        timeout_ms: u64,
        /// Cycles found before the deadline.
        partial: usize,
    },
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::FileNotFound { .. }
            | Self::PermissionDenied { .. }
            | Self::FileTooLarge { .. }
            | Self::InvalidUtf8 { .. }
            | Self::StdinReadError { .. }
            | Self::IoError { .. }
            | Self::ParseFailed { .. }
            | Self::InvalidGraph { .. } => 2,

            Self::VertexNotFound { .. } | Self::NoCycles { .. } | Self::TimedOut { .. } => 1,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::FileNotFound { path } => {
                format!("error: file not found: {}", path.display())
            }
            Self::PermissionDenied { path } => {
                format!("error: permission denied: {}", path.display())
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: Some(actual),
            } => {
                format!("error: file too large: {source} is {actual} bytes, limit is {limit} bytes")
            }
            Self::FileTooLarge {
                source,
                limit,
                actual: None,
            } => {
                format!("error: file too large: {source} exceeded limit of {limit} bytes")
            }
            Self::InvalidUtf8 {
                source,
                byte_offset,
            } => {
                format!(
                    "error: invalid UTF-8 in {source}: first invalid byte at offset {byte_offset}"
                )
            }
            Self::StdinReadError { detail } => {
                format!("error: failed to read stdin: {detail}")
            }
            Self::IoError { source, detail } => {
                format!("error: I/O error on {source}: {detail}")
            }
            Self::ParseFailed { detail } => format!("error: parse failed: {detail}"),
            Self::InvalidGraph { detail } => format!("error: invalid graph: {detail}"),
            Self::VertexNotFound { reference } => {
                format!("error: vertex not found: {reference:?}")
            }
            Self::NoCycles { vertex } => format!("error: no cycle passes through {vertex}"),
            Self::TimedOut {
                timeout_ms,
                partial,
            } => {
                format!(
                    "error: search timed out after {timeout_ms} ms ({partial} cycles found before stopping)"
                )
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
