//! Fixed shapes and uniformly random edge sets.

use std::ops::Range;

use rand::Rng;
use rand::rngs::StdRng;
use simplecycles_core::EdgeListGraph;

/// The complete graph on `n` vertices without self-loops.
///
/// Directed: every ordered pair `(u, v)`, `u != v`. Undirected: every pair
/// `u < v` once.
pub fn complete_graph(n: usize, directed: bool) -> EdgeListGraph {
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v && (directed || u < v) {
                edges.push((u, v));
            }
        }
    }
    EdgeListGraph::new(directed, n, edges)
}

/// `0 -> 1 -> ... -> n-1 -> 0`. Contains exactly one simple cycle when
/// `n >= 2` (directed) or `n >= 3` (undirected).
pub fn ring_graph(n: usize, directed: bool) -> EdgeListGraph {
    let edges = if n < 2 {
        Vec::new()
    } else {
        (0..n).map(|i| (i, (i + 1) % n)).collect()
    };
    EdgeListGraph::new(directed, n, edges)
}

/// `count` random loop-free edges between vertices of `range`. Parallel
/// edges may occur.
pub fn random_edges(rng: &mut StdRng, range: Range<usize>, count: usize) -> Vec<(usize, usize)> {
    if range.len() < 2 {
        return Vec::new();
    }
    let mut edges = Vec::with_capacity(count);
    while edges.len() < count {
        let u = rng.gen_range(range.clone());
        let v = rng.gen_range(range.clone());
        if u != v {
            edges.push((u, v));
        }
    }
    edges
}
