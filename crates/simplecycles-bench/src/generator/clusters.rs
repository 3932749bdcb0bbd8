//! Clustered topology: dense random clusters linked by a bridge forest.

use rand::Rng;
use rand::rngs::StdRng;

use super::shapes::random_edges;

/// Splits `0..vertices` into consecutive clusters of `cluster_size`
/// (the last one may be smaller), fills each with
/// `intra_degree * size` random edges, and links every cluster after the
/// first to one earlier cluster by a single edge pointing forward.
///
/// Bridges form a forest over clusters and always point from a lower to a
/// higher vertex id, so no cycle ever crosses a cluster boundary in either
/// the directed or the undirected reading.
pub fn clustered_edges(
    rng: &mut StdRng,
    vertices: usize,
    cluster_size: usize,
    intra_degree: f64,
) -> Vec<(usize, usize)> {
    let cluster_size = cluster_size.max(1);
    let starts: Vec<usize> = (0..vertices).step_by(cluster_size).collect();

    let mut edges = Vec::new();
    for (i, &start) in starts.iter().enumerate() {
        let end = (start + cluster_size).min(vertices);
        let budget = ((end - start) as f64 * intra_degree).round() as usize;
        edges.extend(random_edges(rng, start..end, budget));

        if i > 0 {
            let target = rng.gen_range(0..i);
            let from_start = starts[target];
            let from_end = (from_start + cluster_size).min(vertices);
            let u = rng.gen_range(from_start..from_end);
            let v = rng.gen_range(start..end);
            edges.push((u, v));
        }
    }
    edges
}

/// Cluster index of `vertex`.
pub fn cluster_of(vertex: usize, cluster_size: usize) -> usize {
    vertex / cluster_size.max(1)
}
