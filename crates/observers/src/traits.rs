//! Capability traits for reusable observers.
//!
//! These traits abstract over event and action types, enabling observers to be
//! written once and used with any transform that exposes the capability.
//!
//! # Event traits
//!
//! - [`HasIndex`] — events that refer to one element of the input sequence
//! - [`HasOutcome`] — events that report whether the element was mapped
//!
//! # Action traits
//!
//! - [`CanAbort`] — actions that can end a run early
//!
//! # Example
//!
//! ```rust
//! use mapseq_core::Observer;
//! use mapseq_observers::traits::{CanAbort, HasIndex};
//!
//! /// Aborts once `limit` elements have been seen.
//! struct FirstN {
//!     limit: usize,
//! }
//!
//! impl<E: HasIndex, A: CanAbort> Observer<E, A> for FirstN {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.index() + 1 >= self.limit).then(A::abort)
//!     }
//! }
//! ```

use mapseq_core::Model;
use mapseq_transform::{Action, Event};

/// An event that refers to one element of the input sequence.
pub trait HasIndex {
    /// Returns the position of the element in the input sequence.
    fn index(&self) -> usize;
}

/// An event that reports whether its element was mapped successfully.
pub trait HasOutcome {
    /// Returns `true` if the element was mapped.
    fn succeeded(&self) -> bool;
}

/// An action type that can end a run early.
pub trait CanAbort {
    /// Returns the action that aborts the run.
    fn abort() -> Self;
}

impl<M: Model> HasIndex for Event<'_, M> {
    fn index(&self) -> usize {
        Event::index(self)
    }
}

impl<M: Model> HasOutcome for Event<'_, M> {
    fn succeeded(&self) -> bool {
        self.is_mapped()
    }
}

impl CanAbort for Action {
    fn abort() -> Self {
        Self::Abort
    }
}
