//! Graph generators and benchmark utilities for `simplecycles-core`.
//!
//! Everything here is deterministic: the same [`GeneratorConfig`] always
//! yields the same graph, so benchmark runs and correctness checks are
//! reproducible.

use std::path::PathBuf;

pub mod correctness;
pub mod generator;

pub use generator::{
    GeneratorConfig, SizeTier, Topology, complete_graph, generate_graph, ring_graph, to_petgraph,
};

/// Directory where `gen-graph` writes fixtures: `target/bench-fixtures/`.
pub fn fixtures_dir() -> PathBuf {
    let manifest = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    manifest
        .join("..")
        .join("..")
        .join("target")
        .join("bench-fixtures")
}

/// Path of the JSON fixture for `tier`.
pub fn fixture_path(tier: SizeTier) -> PathBuf {
    fixtures_dir().join(format!("{}.json", tier.name()))
}
