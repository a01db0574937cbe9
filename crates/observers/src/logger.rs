use mapseq_core::Observer;
use tracing::{debug, warn};

use crate::traits::{HasIndex, HasOutcome};

/// An observer that forwards every event to `tracing`.
///
/// Mapped elements are logged at `DEBUG`, failed ones at `WARN`. The logger
/// never returns an action.
#[derive(Debug, Clone, Copy)]
pub struct Logger {
    name: &'static str,
}

impl Logger {
    /// Creates a logger that tags each record with `name`.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new("map")
    }
}

impl<E, A> Observer<E, A> for Logger
where
    E: HasIndex + HasOutcome,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        let index = event.index();
        if event.succeeded() {
            debug!(name = self.name, index, "element mapped");
        } else {
            warn!(name = self.name, index, "element failed");
        }
        None
    }
}

impl<E, A> Observer<E, A> for &mut Logger
where
    E: HasIndex + HasOutcome,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
