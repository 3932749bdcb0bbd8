//! Writes one JSON graph fixture per size tier to `target/bench-fixtures/`.
//!
//! The files use the CLI's input format, so they can be fed straight to
//! `simplecycles enumerate` for end-to-end timing.

use std::error::Error;
use std::fs;
use std::io::BufWriter;

use simplecycles_bench::{SizeTier, fixture_path, fixtures_dir, generate_graph};

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all(fixtures_dir())?;

    for tier in SizeTier::ALL {
        let graph = generate_graph(&tier.config(42));
        let path = fixture_path(tier);
        eprintln!(
            "{}: {} vertices, {} edges -> {}",
            tier.name(),
            graph.vertices,
            graph.edges.len(),
            path.display()
        );
        let writer = BufWriter::new(fs::File::create(&path)?);
        serde_json::to_writer(writer, &graph)?;
    }

    eprintln!("Done.");
    Ok(())
}
