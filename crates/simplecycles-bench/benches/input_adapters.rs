//! Compares building search state from an edge list, a petgraph `Graph`,
//! and JSON text.
#![allow(clippy::expect_used)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use simplecycles_bench::{SizeTier, generate_graph, to_petgraph};
use simplecycles_core::{CycleSearch, EdgeListGraph, simple_cycles};

fn bench_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_adapters");
    for tier in SizeTier::ALL {
        let graph = generate_graph(&tier.config(7));
        let petgraph = to_petgraph(&graph);
        let json = serde_json::to_string(&graph).expect("serializes");

        group.bench_with_input(BenchmarkId::new("edge_list", tier.name()), &graph, |b, g| {
            b.iter(|| simple_cycles(g).expect("enumerates").len());
        });
        group.bench_with_input(BenchmarkId::new("petgraph", tier.name()), &petgraph, |b, g| {
            b.iter(|| simple_cycles(g).expect("enumerates").len());
        });
        group.bench_with_input(BenchmarkId::new("json_parse_build", tier.name()), &json, |b, s| {
            b.iter(|| {
                let g: EdgeListGraph = serde_json::from_str(s).expect("parses");
                CycleSearch::new(&g).expect("builds").vertex_count()
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_adapters);
criterion_main!(benches);
