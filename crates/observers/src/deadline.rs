use std::time::{Duration, Instant};

use mapseq_core::Observer;
use tracing::debug;

use crate::traits::{CanAbort, HasIndex};

/// An observer that aborts a run once a wall-clock budget is spent.
///
/// The clock starts when the deadline is created. Each event checks the
/// elapsed time; the first event observed after the budget runs out aborts
/// the run. The element that event refers to has already been mapped.
#[derive(Debug, Clone, Copy)]
pub struct Deadline {
    start: Instant,
    budget: Duration,
}

impl Deadline {
    /// Creates a deadline `budget` from now.
    #[must_use]
    pub fn after(budget: Duration) -> Self {
        Self {
            start: Instant::now(),
            budget,
        }
    }

    /// Returns `true` if the budget is spent.
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.start.elapsed() >= self.budget
    }
}

impl<E, A> Observer<E, A> for Deadline
where
    E: HasIndex,
    A: CanAbort,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if !self.is_expired() {
            return None;
        }

        debug!(index = event.index(), budget = ?self.budget, "deadline reached");
        Some(A::abort())
    }
}
