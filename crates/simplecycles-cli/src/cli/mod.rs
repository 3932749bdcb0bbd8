//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use simplecycles_core::{DedupStrategy, SearchMode};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one record per line (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// How the input file is encoded.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum InputFormat {
    /// `{"directed", "vertices", "edges", "labels"}` object (default).
    Json,
    /// Whitespace-separated `u v` pairs, one edge per line.
    Edgelist,
}

/// Edge orientation used by the search.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ModeArg {
    /// Follow edges from source to target (default).
    Out,
    /// Follow edges from target to source.
    In,
    /// Ignore edge direction.
    All,
}

impl From<ModeArg> for SearchMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Out => SearchMode::Out,
            ModeArg::In => SearchMode::In,
            ModeArg::All => SearchMode::All,
        }
    }
}

/// Duplicate detection for undirected runs.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum DedupArg {
    /// One cycle per distinct vertex set (default).
    VertexSet,
    /// One cycle per distinct cyclic sequence, up to rotation and reversal.
    Sequence,
}

impl From<DedupArg> for DedupStrategy {
    fn from(dedup: DedupArg) -> Self {
        match dedup {
            DedupArg::VertexSet => DedupStrategy::VertexSet,
            DedupArg::Sequence => DedupStrategy::CycleSequence,
        }
    }
}

/// All top-level subcommands exposed by the `simplecycles` binary.
#[derive(Subcommand)]
pub enum Command {
    /// List every simple cycle of a graph.
    Enumerate {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Edge orientation: out (default), in, or all.
        #[arg(long, default_value = "out", value_enum)]
        mode: ModeArg,
        /// Duplicate detection for undirected graphs.
        #[arg(long, default_value = "vertex-set", value_enum)]
        dedup: DedupArg,
        /// Stop after this many cycles.
        #[arg(long, value_name = "N")]
        max_cycles: Option<usize>,
        /// Print only the number of cycles.
        #[arg(long)]
        count: bool,
    },

    /// List every simple cycle through one vertex.
    Through {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Vertex label or numeric id.
        #[arg(value_name = "VERTEX")]
        vertex: String,
        /// Edge orientation: out (default), in, or all.
        #[arg(long, default_value = "out", value_enum)]
        mode: ModeArg,
        /// Duplicate detection for undirected graphs.
        #[arg(long, default_value = "vertex-set", value_enum)]
        dedup: DedupArg,
    },

    /// Print summary statistics for a graph.
    Inspect {
        /// Path to a graph file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `simplecycles` binary.
#[derive(Parser)]
#[command(
    name = "simplecycles",
    version,
    about = "Enumerate the simple cycles of directed and undirected graphs"
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log search progress to stderr (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `SIMPLECYCLES_MAX_FILE_SIZE` environment
    /// variable. The CLI flag takes precedence over the environment variable.
    /// Default: 268435456 (256 MB).
    #[arg(
        long,
        global = true,
        env = "SIMPLECYCLES_MAX_FILE_SIZE",
        default_value = "268435456"
    )]
    pub max_file_size: u64,

    /// Abort the search after this many milliseconds.
    #[arg(long, global = true, env = "SIMPLECYCLES_TIMEOUT_MS", value_name = "MS")]
    pub timeout_ms: Option<u64>,

    /// Input encoding: json (default) or edgelist.
    #[arg(long, global = true, default_value = "json", value_enum)]
    pub input_format: InputFormat,

    /// Treat an edge list as undirected (edgelist input only).
    #[arg(long, global = true)]
    pub undirected: bool,

    /// Vertex count for an edge list; defaults to one past the largest id.
    #[arg(long, global = true, value_name = "N")]
    pub vertices: Option<usize>,
}
