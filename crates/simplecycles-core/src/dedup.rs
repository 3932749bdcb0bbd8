/// Suppression of mirror traversals in undirected runs.
///
/// On an undirected graph Johnson's search closes every cycle twice, once per
/// direction around it. [`DuplicateFilter`] keeps a hashed canonical key for
/// each accepted cycle and rejects later cycles with the same key.
use std::collections::HashSet;

use crate::options::DedupStrategy;

/// Canonical-key set of the cycles accepted so far.
#[derive(Debug, Clone, Default)]
pub struct DuplicateFilter {
    strategy: DedupStrategy,
    seen: HashSet<Vec<usize>>,
}

impl DuplicateFilter {
    /// Creates an empty filter using `strategy`.
    pub fn new(strategy: DedupStrategy) -> Self {
        Self {
            strategy,
            seen: HashSet::new(),
        }
    }

    /// Records `cycle` and returns `true` if no equivalent cycle was seen
    /// before; returns `false` for a duplicate.
    pub fn admit(&mut self, cycle: &[usize]) -> bool {
        self.seen.insert(canonical_key(cycle, self.strategy))
    }

    /// Number of distinct cycles admitted.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// `true` if nothing has been admitted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }
}

/// Returns the comparison key of `cycle` under `strategy`.
///
/// - [`DedupStrategy::VertexSet`]: the vertices sorted ascending.
/// - [`DedupStrategy::CycleSequence`]: the cycle rotated to begin at its
///   smallest vertex, walked toward whichever neighbour of that vertex is
///   smaller. Rotations and reversals of one cycle share a key.
pub fn canonical_key(cycle: &[usize], strategy: DedupStrategy) -> Vec<usize> {
    match strategy {
        DedupStrategy::VertexSet => {
            let mut key = cycle.to_vec();
            key.sort_unstable();
            key
        }
        DedupStrategy::CycleSequence => canonical_rotation(cycle),
    }
}

fn canonical_rotation(cycle: &[usize]) -> Vec<usize> {
    let n = cycle.len();
    let Some((min_pos, _)) = cycle.iter().enumerate().min_by_key(|&(_, &v)| v) else {
        return Vec::new();
    };
    let forward: Vec<usize> = (0..n).map(|i| cycle[(min_pos + i) % n]).collect();
    let backward: Vec<usize> = (0..n).map(|i| cycle[(min_pos + n - i) % n]).collect();
    forward.min(backward)
}
