#![deny(clippy::print_stdout, clippy::print_stderr)]
//! Exhaustive simple-cycle enumeration (Johnson's algorithm) for directed
//! and undirected graphs.
//!
//! ```
//! use simplecycles_core::{EdgeListGraph, simple_cycles};
//!
//! let triangle = EdgeListGraph::directed_from_edges(&[(0, 1), (1, 2), (2, 0)]);
//! let cycles = simple_cycles(&triangle).unwrap_or_default();
//! assert_eq!(cycles, vec![vec![0, 1, 2]]);
//! ```

pub mod adjacency;
pub mod blocking;
mod circuit;
pub mod dedup;
pub mod error;
pub mod input;
pub mod interrupt;
pub mod options;
pub mod search;

pub use adjacency::WorkingAdjacency;
pub use blocking::BlockingSets;
pub use dedup::{DuplicateFilter, canonical_key};
pub use error::{CycleSearchError, InputError};
pub use input::{CycleInput, EdgeListGraph, parse_edge_list};
pub use interrupt::{Deadline, Interrupt, InterruptFlag, NeverInterrupt};
pub use options::{DedupStrategy, SearchMode, SearchOptions};
pub use search::{CycleSearch, SearchStatus, SearchSummary, search_all, simple_cycles};

/// Returns the version of the simplecycles-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
