//! Branch-and-bound plumbing shared by the solvers.
//!
//! Solvers mutate working state in place while exploring a branch and revert it before returning
//! to the parent frame. A frame always captures the result of its recursive call, unwinds its own
//! mutations, and only then propagates an interrupt, so an interrupted search leaves no partial
//! state behind.

use crate::Error;
use std::convert::Infallible;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Options shared by every solver.
#[derive(Debug, Clone)]
pub struct SolverOptions {
    /// Seed for the randomized lower-bound heuristics. The same seed always yields the same
    /// bounds, so searches are reproducible.
    pub random_seed: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self { random_seed: 0 }
    }
}

/// Accounting for explored search nodes.
///
/// `tick` is called once per search node; returning `Err` interrupts the search.
pub trait Budget {
    type Interrupt;

    fn tick(&mut self) -> Result<(), Self::Interrupt>;

    /// Number of nodes ticked so far.
    fn explored(&self) -> u64;
}

impl<B: Budget + ?Sized> Budget for &mut B {
    type Interrupt = B::Interrupt;

    fn tick(&mut self) -> Result<(), Self::Interrupt> {
        (**self).tick()
    }

    fn explored(&self) -> u64 {
        (**self).explored()
    }
}

/// A budget that never interrupts.
#[derive(Debug, Clone, Default)]
pub struct Unbounded {
    explored: u64,
}

impl Budget for Unbounded {
    type Interrupt = Infallible;

    fn tick(&mut self) -> Result<(), Infallible> {
        self.explored += 1;
        Ok(())
    }

    fn explored(&self) -> u64 {
        self.explored
    }
}

/// A node limit and/or a cancellation flag.
///
/// The cancellation flag may be set from another thread; it is checked on every tick.
#[derive(Debug, Clone, Default)]
pub struct Limits {
    max_nodes: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
    explored: u64,
}

impl Limits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_nodes(mut self, max_nodes: u64) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }
}

impl Budget for Limits {
    type Interrupt = Error;

    fn tick(&mut self) -> Result<(), Error> {
        if self
            .cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
        {
            return Err(Error::Cancelled {
                explored: self.explored,
            });
        }
        if self.max_nodes.is_some_and(|max| self.explored >= max) {
            return Err(Error::NodeLimit {
                explored: self.explored,
            });
        }
        self.explored += 1;
        Ok(())
    }

    fn explored(&self) -> u64 {
        self.explored
    }
}

/// A stack of inverse operations.
///
/// A frame takes a [`mark`](Self::mark) before mutating, records one entry per mutation, and on
/// backtrack pops entries down to its mark, applying each inverse in reverse order.
#[derive(Debug, Clone)]
pub(crate) struct UndoLog<T> {
    entries: Vec<T>,
}

impl<T> Default for UndoLog<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> UndoLog<T> {
    pub(crate) fn mark(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn record(&mut self, entry: T) {
        self.entries.push(entry);
    }

    /// Pops the most recent entry recorded after `mark`, if any.
    pub(crate) fn pop_to(&mut self, mark: usize) -> Option<T> {
        if self.entries.len() > mark {
            self.entries.pop()
        } else {
            None
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
