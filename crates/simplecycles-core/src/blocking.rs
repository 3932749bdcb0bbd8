/// Per-vertex blocked flags and block-dependent (B) sets.
///
/// A vertex is blocked while it sits on the current search path, and stays
/// blocked after a dead-end exploration until one of the vertices it leads to
/// is unblocked. `dependents[w]` records which blocked vertices are waiting
/// on `w`; unblocking `w` unblocks them transitively.
use crate::error::CycleSearchError;

/// Blocked flags plus B-sets for every vertex of a search state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockingSets {
    blocked: Vec<bool>,
    dependents: Vec<Vec<usize>>,
}

impl BlockingSets {
    /// Creates unblocked state with empty B-sets for `vertex_count` vertices.
    ///
    /// # Errors
    ///
    /// [`CycleSearchError::Allocation`] if storage cannot be reserved.
    pub fn new(vertex_count: usize) -> Result<Self, CycleSearchError> {
        let mut blocked = Vec::new();
        blocked.try_reserve_exact(vertex_count)?;
        blocked.resize(vertex_count, false);

        let mut dependents = Vec::new();
        dependents.try_reserve_exact(vertex_count)?;
        dependents.resize_with(vertex_count, Vec::new);

        Ok(Self {
            blocked,
            dependents,
        })
    }

    /// Clears the flag and B-set of every vertex in `[from, vertex_count)`.
    ///
    /// Vertices below `from` are left as they are; a search from start
    /// vertex `from` never reaches them.
    pub fn reset_from(&mut self, from: usize) {
        for flag in self.blocked.iter_mut().skip(from) {
            *flag = false;
        }
        for set in self.dependents.iter_mut().skip(from) {
            set.clear();
        }
    }

    /// Marks `v` blocked.
    pub fn block(&mut self, v: usize) {
        self.blocked[v] = true;
    }

    /// `true` if `v` is blocked.
    pub fn is_blocked(&self, v: usize) -> bool {
        self.blocked[v]
    }

    /// Unblocks `u` and, recursively, every still-blocked vertex waiting on
    /// it. Each visited B-set is drained.
    pub fn unblock(&mut self, u: usize) {
        self.blocked[u] = false;
        while let Some(w) = self.dependents[u].pop() {
            if self.blocked[w] {
                self.unblock(w);
            }
        }
    }

    /// Records that `v` should be retried once `w` is unblocked.
    ///
    /// Idempotent: `v` is added to `w`'s B-set at most once.
    pub fn link(&mut self, v: usize, w: usize) {
        let set = &mut self.dependents[w];
        if !set.contains(&v) {
            set.push(v);
        }
    }

    /// Vertices currently waiting on `w`.
    pub fn dependents(&self, w: usize) -> &[usize] {
        &self.dependents[w]
    }
}
