//! Dispatch table: (source state, event) to ordered candidate transitions.

use crate::core::{Event, StateId};
use crate::dispatch::transition::Transition;
use std::collections::BTreeMap;
use std::rc::Rc;

/// Registered transitions, grouped by source state and then by event.
///
/// Candidates under one key keep their registration order. Transitions are
/// reference counted so a selected transition can run while the machine is
/// mutably borrowed by its callbacks.
pub(crate) struct DispatchTable<E: Event> {
    by_source: BTreeMap<StateId, BTreeMap<E, Vec<Rc<Transition<E>>>>>,
    len: usize,
}

impl<E: Event> DispatchTable<E> {
    pub(crate) fn new() -> Self {
        Self {
            by_source: BTreeMap::new(),
            len: 0,
        }
    }

    /// Append a transition under its (source, event) key.
    pub(crate) fn insert(&mut self, transition: Transition<E>) {
        self.by_source
            .entry(transition.from())
            .or_default()
            .entry(transition.event().clone())
            .or_default()
            .push(Rc::new(transition));
        self.len += 1;
    }

    /// Candidates for `event` in `from`, in registration order.
    pub(crate) fn candidates(&self, from: StateId, event: &E) -> &[Rc<Transition<E>>] {
        self.by_source
            .get(&from)
            .and_then(|events| events.get(event))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// First candidate whose guard passes. Guards after it are not evaluated.
    pub(crate) fn select(&self, from: StateId, event: &E) -> Option<Rc<Transition<E>>> {
        self.candidates(from, event)
            .iter()
            .find(|t| t.check_guard())
            .cloned()
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }
}
