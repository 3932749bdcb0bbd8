//! The recursive `CIRCUIT` procedure of Johnson's algorithm.
//!
//! One [`Circuit`] borrows every piece of search state it touches for the
//! duration of a single start vertex: the working adjacency (read-only), the
//! blocking sets, the path stack, the duplicate filter, and the caller's
//! result collection. Recursion depth is bounded by the vertex count because
//! a vertex is blocked while it is on the path.
use crate::adjacency::WorkingAdjacency;
use crate::blocking::BlockingSets;
use crate::dedup::DuplicateFilter;
use crate::interrupt::Interrupt;

/// Why a circuit search stopped before exhausting the start vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Halt {
    /// The interrupt fired.
    Interrupted,
    /// The configured cycle limit was reached.
    LimitReached,
}

/// Borrowed search context for one start vertex.
pub(crate) struct Circuit<'a, I: Interrupt + ?Sized> {
    pub(crate) adjacency: &'a WorkingAdjacency,
    pub(crate) blocking: &'a mut BlockingSets,
    pub(crate) path: &'a mut Vec<usize>,
    pub(crate) filter: &'a mut DuplicateFilter,
    pub(crate) results: &'a mut Vec<Vec<usize>>,
    pub(crate) interrupt: &'a I,
    /// Cycles accepted during the whole run, across start vertices.
    pub(crate) accepted: &'a mut usize,
    pub(crate) limit: Option<usize>,
    pub(crate) start: usize,
}

impl<I: Interrupt + ?Sized> Circuit<'_, I> {
    /// Explores every path from `v` back to the start vertex.
    ///
    /// Returns `Ok(true)` if at least one closing edge was accepted through
    /// `v`. On `Ok` the path stack is restored to its state before the call;
    /// on `Err` the caller is expected to discard it.
    pub(crate) fn run(&mut self, v: usize) -> Result<bool, Halt> {
        if self.interrupt.is_interrupted() {
            return Err(Halt::Interrupted);
        }

        let adjacency = self.adjacency;
        self.path.push(v);
        self.blocking.block(v);
        debug_assert!(
            self.path.iter().all(|&p| self.blocking.is_blocked(p)),
            "unblocked vertex on path {:?}",
            self.path
        );

        let mut found = false;
        for &w in adjacency.neighbors(v) {
            if w == self.start {
                // Undirected edges would otherwise close a trivial u-v-u loop.
                if adjacency.is_directed() || self.path.len() > 2 {
                    found = true;
                    self.emit()?;
                }
            } else if !self.blocking.is_blocked(w) {
                found |= self.run(w)?;
            }
        }

        if found {
            self.blocking.unblock(v);
        } else {
            for &w in adjacency.neighbors(v) {
                self.blocking.link(v, w);
            }
        }

        self.path.pop();
        Ok(found)
    }

    /// Hands the current path to the duplicate filter and appends it to the
    /// results if it is new.
    fn emit(&mut self) -> Result<(), Halt> {
        let cycle = self.path.clone();
        if !self.adjacency.is_directed() && !self.filter.admit(&cycle) {
            tracing::trace!(?cycle, "duplicate cycle suppressed");
            return Ok(());
        }
        tracing::trace!(?cycle, "cycle found");
        self.results.push(cycle);
        *self.accepted += 1;
        match self.limit {
            Some(limit) if *self.accepted >= limit => Err(Halt::LimitReached),
            Some(_) | None => Ok(()),
        }
    }
}
