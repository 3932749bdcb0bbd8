//! Cooperative cancellation for long-running searches.
//!
//! The circuit search polls an [`Interrupt`] once per visited vertex. When it
//! reports `true` the search unwinds every active frame and the caller gets
//! [`CycleSearchError::Interrupted`](crate::CycleSearchError::Interrupted);
//! cycles already appended to the result collection stay valid.
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// A cancellation checkpoint.
pub trait Interrupt {
    /// `true` once the search should stop.
    fn is_interrupted(&self) -> bool;
}

impl<F: Fn() -> bool> Interrupt for F {
    fn is_interrupted(&self) -> bool {
        self()
    }
}

/// Never fires.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverInterrupt;

impl Interrupt for NeverInterrupt {
    fn is_interrupted(&self) -> bool {
        false
    }
}

/// A shareable flag another thread can raise.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct InterruptFlag(Arc<AtomicBool>);

impl InterruptFlag {
    /// Creates a lowered flag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises the flag.
    pub fn trigger(&self) {
        self.0.store(true, Ordering::Relaxed);
    }
}

impl Interrupt for InterruptFlag {
    fn is_interrupted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fires once a wall-clock instant has passed.
#[derive(Debug, Clone, Copy)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Self(Instant::now() + timeout)
    }

    /// A deadline at `at`.
    pub fn at(at: Instant) -> Self {
        Self(at)
    }
}

impl Interrupt for Deadline {
    fn is_interrupted(&self) -> bool {
        Instant::now() >= self.0
    }
}
