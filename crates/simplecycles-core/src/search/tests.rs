#![allow(clippy::expect_used)]

use std::cell::Cell;
use std::collections::BTreeSet;

use petgraph::graph::Graph;
use petgraph::stable_graph::StableGraph;
use petgraph::{Directed, Undirected};

use super::*;
use crate::input::EdgeListGraph;
use crate::interrupt::InterruptFlag;
use crate::options::{DedupStrategy, SearchMode};

// ---------------------------------------------------------------------------
// Fixture helpers
// ---------------------------------------------------------------------------

fn directed(edges: &[(usize, usize)]) -> EdgeListGraph {
    EdgeListGraph::directed_from_edges(edges)
}

fn undirected(edges: &[(usize, usize)]) -> EdgeListGraph {
    EdgeListGraph::undirected_from_edges(edges)
}

fn complete(n: usize, directed: bool) -> EdgeListGraph {
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

fn run(g: &EdgeListGraph, options: SearchOptions) -> Vec<Vec<usize>> {
    let mut results = Vec::new();
    search_all(g, options, &NeverInterrupt, &mut results).expect("search succeeds");
    results
}

fn vertex_sets(cycles: &[Vec<usize>]) -> Vec<BTreeSet<usize>> {
    let mut sets: Vec<BTreeSet<usize>> = cycles
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect();
    sets.sort();
    sets
}

// ---------------------------------------------------------------------------
// Small fixed graphs
// ---------------------------------------------------------------------------

#[test]
fn graph_without_edges_has_no_cycles() {
    let g = EdgeListGraph::new(true, 5, vec![]);
    assert!(simple_cycles(&g).expect("runs").is_empty());
    let g = EdgeListGraph::new(false, 5, vec![]);
    assert!(simple_cycles(&g).expect("runs").is_empty());
}

#[test]
fn empty_graph_has_no_cycles() {
    assert!(simple_cycles(&EdgeListGraph::default()).expect("runs").is_empty());
}

#[test]
fn directed_two_cycle_is_reported_once() {
    let cycles = simple_cycles(&directed(&[(0, 1), (1, 0)])).expect("runs");
    assert_eq!(cycles, vec![vec![0, 1]]);
}

#[test]
fn undirected_single_edge_is_not_a_cycle() {
    assert!(simple_cycles(&undirected(&[(0, 1)])).expect("runs").is_empty());
}

#[test]
fn directed_triangle_has_one_cycle() {
    let cycles = simple_cycles(&directed(&[(0, 1), (1, 2), (2, 0)])).expect("runs");
    assert_eq!(cycles, vec![vec![0, 1, 2]]);
}

#[test]
fn undirected_triangle_has_one_cycle() {
    let cycles = simple_cycles(&undirected(&[(0, 1), (1, 2), (2, 0)])).expect("runs");
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].len(), 3);
}

#[test]
fn directed_path_has_no_cycles() {
    assert!(
        simple_cycles(&directed(&[(0, 1), (1, 2), (2, 3)]))
            .expect("runs")
            .is_empty()
    );
}

#[test]
fn directed_self_loop_is_a_one_vertex_cycle() {
    let cycles = simple_cycles(&directed(&[(0, 0), (0, 1)])).expect("runs");
    assert_eq!(cycles, vec![vec![0]]);
}

#[test]
fn undirected_self_loop_is_ignored() {
    assert!(simple_cycles(&undirected(&[(0, 0)])).expect("runs").is_empty());
}

#[test]
fn parallel_edges_collapse() {
    let cycles = simple_cycles(&directed(&[(0, 1), (0, 1), (1, 0), (1, 0)])).expect("runs");
    assert_eq!(cycles.len(), 1);
    let cycles = simple_cycles(&undirected(&[(0, 1), (1, 0)])).expect("runs");
    assert!(cycles.is_empty());
}

#[test]
fn cycles_start_at_their_smallest_vertex() {
    let g = complete(4, true);
    for cycle in run(&g, SearchOptions::default()) {
        let min = cycle.iter().copied().min().expect("non-empty");
        assert_eq!(cycle[0], min, "cycle {cycle:?}");
    }
}

#[test]
fn complete_digraph_cycle_counts() {
    // sum_{k=2..n} C(n, k) * (k - 1)!
    assert_eq!(run(&complete(3, true), SearchOptions::default()).len(), 5);
    assert_eq!(run(&complete(4, true), SearchOptions::default()).len(), 20);
    assert_eq!(run(&complete(5, true), SearchOptions::default()).len(), 84);
}

#[test]
fn undirected_k4_vertex_set_dedup_merges_squares() {
    let cycles = run(&complete(4, false), SearchOptions::default());
    // 4 triangles + 1 of the 3 squares, which share a vertex set.
    assert_eq!(cycles.len(), 5);
}

#[test]
fn undirected_complete_graph_sequence_dedup_counts() {
    let options = SearchOptions::default().dedup(DedupStrategy::CycleSequence);
    assert_eq!(run(&complete(4, false), options).len(), 7);
    assert_eq!(run(&complete(5, false), options).len(), 37);
}

#[test]
fn undirected_square_with_diagonal() {
    // 0-1-2-3-0 plus chord 0-2: two triangles and the outer square.
    let g = undirected(&[(0, 1), (1, 2), (2, 3), (3, 0), (0, 2)]);
    let cycles = run(&g, SearchOptions::default());
    assert_eq!(
        vertex_sets(&cycles),
        vec![
            BTreeSet::from([0, 1, 2]),
            BTreeSet::from([0, 1, 2, 3]),
            BTreeSet::from([0, 2, 3]),
        ]
    );
}

// ---------------------------------------------------------------------------
// Search modes
// ---------------------------------------------------------------------------

#[test]
fn in_mode_reverses_cycle_orientation() {
    let g = directed(&[(0, 1), (1, 2), (2, 0)]);
    let cycles = run(&g, SearchOptions::default().mode(SearchMode::In));
    assert_eq!(cycles, vec![vec![0, 2, 1]]);
}

#[test]
fn all_mode_ignores_direction() {
    // A directed path 0 -> 1 -> 2 and 0 -> 2 is acyclic, but not undirected.
    let g = directed(&[(0, 1), (1, 2), (0, 2)]);
    assert!(run(&g, SearchOptions::default()).is_empty());
    let cycles = run(&g, SearchOptions::default().mode(SearchMode::All));
    assert_eq!(cycles.len(), 1);

    // A directed 2-cycle is a single undirected edge.
    let g = directed(&[(0, 1), (1, 0)]);
    assert!(run(&g, SearchOptions::default().mode(SearchMode::All)).is_empty());
}

#[test]
fn mode_is_ignored_for_undirected_input() {
    let g = undirected(&[(0, 1), (1, 2), (2, 0)]);
    for mode in [SearchMode::Out, SearchMode::In, SearchMode::All] {
        assert_eq!(run(&g, SearchOptions::default().mode(mode)).len(), 1);
    }
}

// ---------------------------------------------------------------------------
// Per-start-vertex search
// ---------------------------------------------------------------------------

#[test]
fn search_one_on_fresh_state_finds_every_cycle_through_vertex() {
    let g = directed(&[(0, 1), (1, 2), (2, 0), (2, 3), (3, 2)]);
    let mut state = CycleSearch::new(&g).expect("builds");
    let mut results = Vec::new();
    let found = state
        .search_one(2, &NeverInterrupt, &mut results)
        .expect("searches");
    assert!(found);
    assert_eq!(results, vec![vec![2, 0, 1], vec![2, 3]]);
}

#[test]
fn search_one_detaches_start_vertex() {
    let g = undirected(&[(0, 1), (1, 2), (2, 0), (2, 3)]);
    let mut state = CycleSearch::new(&g).expect("builds");
    let mut results = Vec::new();
    state
        .search_one(2, &NeverInterrupt, &mut results)
        .expect("searches");
    assert!(state.adjacency().is_detached(2));
    for v in 0..state.vertex_count() {
        assert!(!state.adjacency().neighbors(v).contains(&2));
    }
}

#[test]
fn search_one_reports_not_found() {
    let g = directed(&[(0, 1), (1, 2), (2, 1)]);
    let mut state = CycleSearch::new(&g).expect("builds");
    let mut results = Vec::new();
    let found = state
        .search_one(0, &NeverInterrupt, &mut results)
        .expect("searches");
    assert!(!found);
    assert!(results.is_empty());
    assert!(state.adjacency().is_detached(0));
}

#[test]
fn search_one_rejects_out_of_range_vertex() {
    let g = directed(&[(0, 1)]);
    let mut state = CycleSearch::new(&g).expect("builds");
    let before = state.adjacency().clone();
    let mut results = Vec::new();
    assert_eq!(
        state.search_one(2, &NeverInterrupt, &mut results),
        Err(CycleSearchError::VertexOutOfRange {
            vertex: 2,
            vertex_count: 2
        })
    );
    assert_eq!(state.adjacency(), &before);
}

#[test]
fn state_is_reused_across_start_vertices() {
    let g = complete(4, true);
    let mut state = CycleSearch::new(&g).expect("builds");
    let mut results = Vec::new();
    for s in 0..4 {
        state
            .search_one(s, &NeverInterrupt, &mut results)
            .expect("searches");
    }
    assert_eq!(results.len(), 20);
    assert_eq!(state.cycles_accepted(), 20);
    assert_eq!(state.adjacency().entry_count(), 0);
}

// ---------------------------------------------------------------------------
// Limits and interruption
// ---------------------------------------------------------------------------

#[test]
fn max_cycles_stops_early() {
    let g = complete(4, true);
    let mut results = Vec::new();
    let summary = search_all(
        &g,
        SearchOptions::default().max_cycles(Some(3)),
        &NeverInterrupt,
        &mut results,
    )
    .expect("runs");
    assert_eq!(results.len(), 3);
    assert_eq!(summary.cycles_found, 3);
    assert_eq!(summary.status, SearchStatus::LimitReached);
}

#[test]
fn generous_limit_completes() {
    let g = complete(4, true);
    let mut results = Vec::new();
    let summary = search_all(
        &g,
        SearchOptions::default().max_cycles(Some(100)),
        &NeverInterrupt,
        &mut results,
    )
    .expect("runs");
    assert_eq!(summary.status, SearchStatus::Complete);
    assert_eq!(summary.cycles_found, 20);
    assert_eq!(summary.start_vertices_searched, 4);
}

#[test]
fn search_one_after_limit_does_nothing() {
    let g = directed(&[(0, 1), (1, 0), (2, 3), (3, 2)]);
    let mut state =
        CycleSearch::with_options(&g, SearchOptions::default().max_cycles(Some(1))).expect("builds");
    let mut results = Vec::new();
    assert!(state.search_one(0, &NeverInterrupt, &mut results).expect("ok"));
    assert!(state.limit_reached());
    assert!(!state.search_one(2, &NeverInterrupt, &mut results).expect("ok"));
    assert_eq!(results, vec![vec![0, 1]]);
}

#[test]
fn raised_flag_interrupts_immediately() {
    let g = complete(4, true);
    let flag = InterruptFlag::new();
    flag.trigger();
    let mut results = Vec::new();
    let err = search_all(&g, SearchOptions::default(), &flag, &mut results)
        .expect_err("interrupted");
    assert_eq!(err, CycleSearchError::Interrupted);
    assert!(results.is_empty());
}

#[test]
fn interruption_keeps_partial_results_and_can_resume() {
    // Four disjoint directed 2-cycles; each start vertex polls twice.
    let g = directed(&[(0, 1), (1, 0), (2, 3), (3, 2), (4, 5), (5, 4), (6, 7), (7, 6)]);
    let polls = Cell::new(0usize);
    let interrupt = || {
        polls.set(polls.get() + 1);
        polls.get() > 5
    };

    let mut state = CycleSearch::new(&g).expect("builds");
    let mut results = Vec::new();
    let err = state
        .search_remaining(&interrupt, &mut results)
        .expect_err("interrupted");
    assert_eq!(err, CycleSearchError::Interrupted);
    assert_eq!(results, vec![vec![0, 1], vec![2, 3]]);
    assert!(!state.adjacency().is_detached(4), "interrupted start stays");

    let summary = state
        .search_remaining(&NeverInterrupt, &mut results)
        .expect("resumes");
    assert_eq!(summary.cycles_found, 2);
    assert_eq!(summary.start_vertices_searched, 2);
    assert_eq!(
        results,
        vec![vec![0, 1], vec![2, 3], vec![4, 5], vec![6, 7]]
    );
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn invalid_edge_list_is_rejected_at_construction() {
    let g = EdgeListGraph::new(true, 2, vec![(0, 3)]);
    assert!(matches!(
        CycleSearch::new(&g),
        Err(CycleSearchError::VertexOutOfRange { vertex: 3, .. })
    ));
}

#[test]
fn petgraph_inputs_are_searchable() {
    let g = Graph::<(), (), Directed>::from_edges([(0u32, 1), (1, 2), (2, 0), (1, 0)]);
    let cycles = simple_cycles(&g).expect("runs");
    assert_eq!(vertex_sets(&cycles), vec![
        BTreeSet::from([0, 1]),
        BTreeSet::from([0, 1, 2]),
    ]);

    let g = Graph::<(), (), Undirected>::from_edges([(0u32, 1), (1, 2), (2, 0)]);
    assert_eq!(simple_cycles(&g).expect("runs").len(), 1);
}

#[test]
fn stable_graph_search_uses_stable_indices() {
    // 0 -> 1 -> 3 -> 0 and 3 <-> 4, with vertex 2 removed.
    let mut g = StableGraph::<(), (), Directed>::default();
    let n: Vec<_> = (0..5).map(|_| g.add_node(())).collect();
    g.add_edge(n[0], n[1], ());
    g.add_edge(n[1], n[2], ());
    g.add_edge(n[2], n[0], ());
    g.add_edge(n[1], n[3], ());
    g.add_edge(n[3], n[0], ());
    g.add_edge(n[3], n[4], ());
    g.add_edge(n[4], n[3], ());
    g.remove_node(n[2]);

    let cycles = simple_cycles(&g).expect("runs");
    assert_eq!(cycles, vec![vec![0, 1, 3], vec![3, 4]]);

    let mut u = StableGraph::<(), (), Undirected>::default();
    let m: Vec<_> = (0..4).map(|_| u.add_node(())).collect();
    u.add_edge(m[0], m[1], ());
    u.add_edge(m[1], m[3], ());
    u.add_edge(m[3], m[0], ());
    u.remove_node(m[2]);
    assert_eq!(simple_cycles(&u).expect("runs"), vec![vec![0, 1, 3]]);
}
