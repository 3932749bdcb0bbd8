//! Invariant checkers and reference counts for cross-checking the engine.

use std::collections::{BTreeSet, HashSet};

use simplecycles_core::{CycleSearch, DedupStrategy, EdgeListGraph, canonical_key};

/// Verifies that every reported cycle:
/// - is non-empty and only names vertices of `graph`
/// - repeats no vertex
/// - follows real edges, including the closing edge back to its first vertex
/// - has length >= 3 when `graph` is undirected
/// - is not a rotation (or, undirected, a reversal) of another reported cycle
pub fn check_cycle_invariants(graph: &EdgeListGraph, cycles: &[Vec<usize>]) -> Result<(), String> {
    let edges: HashSet<(usize, usize)> = graph
        .edges
        .iter()
        .flat_map(|&(u, v)| {
            let reverse = (!graph.directed).then_some((v, u));
            std::iter::once((u, v)).chain(reverse)
        })
        .collect();

    let mut keys = HashSet::new();
    for cycle in cycles {
        let Some(&first) = cycle.first() else {
            return Err("empty cycle reported".to_owned());
        };
        if let Some(&v) = cycle.iter().find(|&&v| v >= graph.vertices) {
            return Err(format!("cycle {cycle:?} names vertex {v} outside the graph"));
        }
        let distinct: BTreeSet<usize> = cycle.iter().copied().collect();
        if distinct.len() != cycle.len() {
            return Err(format!("cycle {cycle:?} repeats a vertex"));
        }
        if !graph.directed && cycle.len() < 3 {
            return Err(format!("undirected cycle {cycle:?} is shorter than 3"));
        }
        let closing = cycle.last().map(|&last| (last, first));
        for pair in cycle.windows(2).map(|w| (w[0], w[1])).chain(closing) {
            if !edges.contains(&pair) {
                return Err(format!("cycle {cycle:?} uses missing edge {pair:?}"));
            }
        }
        if !keys.insert(cycle_key(cycle, graph.directed)) {
            return Err(format!("cycle {cycle:?} reported twice"));
        }
    }
    Ok(())
}

/// Verifies that every vertex in `processed` has been detached from the
/// working adjacency of `state`.
pub fn check_detached(state: &CycleSearch, processed: &[usize]) -> Result<(), String> {
    match processed
        .iter()
        .find(|&&s| !state.adjacency().is_detached(s))
    {
        Some(s) => Err(format!("vertex {s} still attached after processing")),
        None => Ok(()),
    }
}

/// Counts simple cycles by exhaustive path search from each vertex through
/// strictly larger vertices. Exponential; only for small graphs.
///
/// Undirected cycles are counted once per cyclic sequence.
pub fn reference_cycle_count(graph: &EdgeListGraph) -> usize {
    let n = graph.vertices;
    let mut adj: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for &(u, v) in &graph.edges {
        adj[u].insert(v);
        if !graph.directed {
            adj[v].insert(u);
        }
    }

    let mut seen = HashSet::new();
    let mut path = Vec::with_capacity(n);
    for s in 0..n {
        path.clear();
        path.push(s);
        walk(&adj, s, &mut path, graph.directed, &mut seen);
    }
    seen.len()
}

fn walk(
    adj: &[BTreeSet<usize>],
    s: usize,
    path: &mut Vec<usize>,
    directed: bool,
    seen: &mut HashSet<Vec<usize>>,
) {
    let Some(&last) = path.last() else {
        return;
    };
    for &w in &adj[last] {
        if w == s {
            if directed || path.len() > 2 {
                seen.insert(cycle_key(path, directed));
            }
        } else if w > s && !path.contains(&w) {
            path.push(w);
            walk(adj, s, path, directed, seen);
            path.pop();
        }
    }
}

fn cycle_key(cycle: &[usize], directed: bool) -> Vec<usize> {
    if directed {
        let pos = cycle
            .iter()
            .enumerate()
            .min_by_key(|&(_, &v)| v)
            .map_or(0, |(i, _)| i);
        let mut rotated = cycle.to_vec();
        rotated.rotate_left(pos);
        rotated
    } else {
        canonical_key(cycle, DedupStrategy::CycleSequence)
    }
}

/// Number of simple cycles in the complete graph on `n` vertices.
///
/// Directed: `sum_{k=2..n} C(n, k) * (k - 1)!`. Undirected (per cyclic
/// sequence): `sum_{k=3..n} C(n, k) * (k - 1)! / 2`.
pub fn complete_graph_cycle_count(n: usize, directed: bool) -> u128 {
    let min_len = if directed { 2 } else { 3 };
    let mut total: u128 = 0;
    for k in min_len..=n {
        let arrangements = binomial(n as u128, k as u128) * factorial(k as u128 - 1);
        total += if directed {
            arrangements
        } else {
            arrangements / 2
        };
    }
    total
}

fn binomial(n: u128, k: u128) -> u128 {
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

fn factorial(n: u128) -> u128 {
    (1..=n).product()
}
