//! Deterministic graph generator.
//!
//! Produces [`EdgeListGraph`] instances whose cycle counts stay tractable:
//! dense structure is confined to small clusters joined by acyclic bridges,
//! so the number of simple cycles grows linearly with the number of clusters
//! rather than exponentially with the vertex count.

pub mod clusters;
pub mod shapes;

use petgraph::Graph;
use petgraph::graph::NodeIndex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use simplecycles_core::EdgeListGraph;

pub use shapes::{complete_graph, ring_graph};

/// Overall shape of a generated graph.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Topology {
    /// Every ordered (directed) or unordered (undirected) pair is an edge.
    Complete,
    /// A single cycle through all vertices.
    Ring,
    /// Uniformly random loop-free edges, `avg_degree * vertices` in total.
    Sparse {
        /// Average number of edges per vertex.
        avg_degree: f64,
    },
    /// Random clusters joined by bridge edges that never close a cycle.
    Clustered {
        /// Vertices per cluster.
        cluster_size: usize,
        /// Average number of intra-cluster edges per vertex.
        intra_degree: f64,
    },
}

/// Configuration for the graph generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Seed for the random number generator.
    pub seed: u64,
    /// Number of vertices.
    pub vertices: usize,
    /// Whether the generated graph is directed.
    pub directed: bool,
    /// Shape of the edge set.
    pub topology: Topology,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 16 vertices in two clusters.
    Small,
    /// 64 vertices in eight clusters.
    Medium,
    /// 256 vertices in 32 clusters.
    Large,
    /// 1024 vertices in 128 clusters.
    XLarge,
}

impl SizeTier {
    /// All tiers, smallest first.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
        SizeTier::XLarge,
    ];

    /// Short name used for benchmark ids and fixture files.
    pub fn name(self) -> &'static str {
        match self {
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
            SizeTier::XLarge => "XL",
        }
    }

    /// Returns a clustered directed configuration for this tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let vertices = match self {
            SizeTier::Small => 16,
            SizeTier::Medium => 64,
            SizeTier::Large => 256,
            SizeTier::XLarge => 1024,
        };
        GeneratorConfig {
            seed,
            vertices,
            directed: true,
            topology: Topology::Clustered {
                cluster_size: 8,
                intra_degree: 2.0,
            },
        }
    }
}

/// Generates a graph from `config`. All randomness is seeded from
/// `config.seed`.
pub fn generate_graph(config: &GeneratorConfig) -> EdgeListGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let n = config.vertices;
    let edges = match config.topology {
        Topology::Complete => return complete_graph(n, config.directed),
        Topology::Ring => return ring_graph(n, config.directed),
        Topology::Sparse { avg_degree } => {
            shapes::random_edges(&mut rng, 0..n, edge_budget(n, avg_degree))
        }
        Topology::Clustered {
            cluster_size,
            intra_degree,
        } => clusters::clustered_edges(&mut rng, n, cluster_size, intra_degree),
    };
    EdgeListGraph::new(config.directed, n, edges)
}

/// Converts an edge-list graph into a directed petgraph [`Graph`] with the
/// same vertex ids. Edge orientation is kept even if `graph` is undirected.
pub fn to_petgraph(graph: &EdgeListGraph) -> Graph<(), ()> {
    let mut g = Graph::with_capacity(graph.vertices, graph.edges.len());
    for _ in 0..graph.vertices {
        g.add_node(());
    }
    for &(u, v) in &graph.edges {
        g.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    g
}

fn edge_budget(vertices: usize, avg_degree: f64) -> usize {
    (vertices as f64 * avg_degree).round() as usize
}
