//! Transitions: event-triggered edges between two states.

use crate::core::{Action, Event, Guard, StateId};
use crate::dispatch::Machine;
use std::fmt;
use std::rc::Rc;

/// A transition from one state to another, triggered by an event.
///
/// A transition carries at most one guard and any number of actions. Binding
/// a guard replaces the previous one; actions accumulate and run in the order
/// they were attached.
///
/// # Example
///
/// ```rust
/// use featherstate::{transition_between, Machine, State};
///
/// let mut machine: Machine<char> = Machine::new();
/// let idle = machine.add_state(State::named("idle"));
/// let busy = machine.add_state(State::named("busy"));
///
/// let transition = transition_between(idle, busy)
///     .on('q')
///     .when(|_| true)
///     .with_action(|_| println!("working"));
///
/// assert!(transition.check_guard());
/// assert_eq!(transition.action_count(), 1);
/// machine.register(transition);
/// ```
pub struct Transition<E: Event> {
    from: StateId,
    to: StateId,
    event: E,
    guard: Option<Guard<E>>,
    actions: Vec<Action<E>>,
}

impl<E: Event> Transition<E> {
    /// Create an unguarded transition without actions.
    pub fn new(from: StateId, to: StateId, event: E) -> Self {
        Self {
            from,
            to,
            event,
            guard: None,
            actions: Vec::new(),
        }
    }

    /// Bind a guard, replacing any previous one.
    pub fn guarded_by(mut self, guard: Guard<E>) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Bind a guard from a closure, replacing any previous one.
    pub fn when<F>(self, predicate: F) -> Self
    where
        F: Fn(&E) -> bool + 'static,
    {
        self.guarded_by(Guard::new(predicate))
    }

    /// Append one action.
    pub fn with_action<F>(mut self, action: F) -> Self
    where
        F: Fn(&mut Machine<E>) + 'static,
    {
        self.actions.push(Rc::new(action));
        self
    }

    /// Append several actions, keeping their iteration order.
    pub fn with_actions<I>(mut self, actions: I) -> Self
    where
        I: IntoIterator<Item = Action<E>>,
    {
        self.actions.extend(actions);
        self
    }

    /// Source state
    pub fn from(&self) -> StateId {
        self.from
    }

    /// Destination state
    pub fn to(&self) -> StateId {
        self.to
    }

    /// Triggering event
    pub fn event(&self) -> &E {
        &self.event
    }

    /// Check whether a guard is attached
    pub fn has_guard(&self) -> bool {
        self.guard.is_some()
    }

    /// Number of attached actions
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// True when unguarded, otherwise the guard's verdict for this
    /// transition's event.
    pub fn check_guard(&self) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(&self.event))
    }

    /// Run every action in attachment order.
    pub fn invoke_actions(&self, machine: &mut Machine<E>) {
        for action in &self.actions {
            action(machine);
        }
    }
}

impl<E: Event> fmt::Debug for Transition<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transition")
            .field("from", &self.from)
            .field("to", &self.to)
            .field("event", &self.event)
            .field("guarded", &self.guard.is_some())
            .field("actions", &self.actions.len())
            .finish()
    }
}
