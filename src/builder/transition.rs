//! Builder pairing two states before the trigger is known.

use crate::core::{Event, StateId};
use crate::dispatch::Transition;

/// A `(from, to)` pair waiting for its trigger.
///
/// Call [`on`](TransitionBuilder::on) to produce the [`Transition`]. The
/// builder holds nothing else and is not kept by the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionBuilder {
    from: StateId,
    to: StateId,
}

impl TransitionBuilder {
    /// Pair a source and a destination
    pub fn new(from: StateId, to: StateId) -> Self {
        Self { from, to }
    }

    /// Source state
    pub fn from(&self) -> StateId {
        self.from
    }

    /// Destination state
    pub fn to(&self) -> StateId {
        self.to
    }

    /// Bind the trigger, yielding an unguarded transition without actions.
    pub fn on<E: Event>(self, event: E) -> Transition<E> {
        Transition::new(self.from, self.to, event)
    }
}
