//! States and the hooks bound to them.
//!
//! A state is a named condition with an optional enter hook and an optional
//! leave hook. States live in the machine's arena and are addressed through
//! [`StateId`] handles, so identity is the handle and never the value.

use super::event::Event;
use crate::dispatch::Machine;
use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;

/// Callback bound to a state or a transition.
///
/// Hooks receive the machine that invoked them, which lets a hook feed
/// further events (`machine.notify(..)`) or stop the machine. Such calls run
/// to completion before the outer call returns.
pub type Hook<E> = Rc<dyn Fn(&mut Machine<E>)>;

/// Side effect run while a transition is taken.
pub type Action<E> = Hook<E>;

/// Handle to a state registered in a [`Machine`].
///
/// Handles are only meaningful for the machine that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(pub(crate) usize);

impl StateId {
    /// Position of the state in its machine's arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A state with optional enter and leave hooks.
///
/// Cloning a state copies its hook bindings. Adding the clone to a machine
/// yields a new [`StateId`], so the clone is a distinct dispatch key.
///
/// # Example
///
/// ```rust
/// use featherstate::{Machine, State};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let entered = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&entered);
///
/// let mut machine: Machine<char> = Machine::new();
/// let idle = machine.add_state(State::named("idle").on_enter(move |_| {
///     counter.set(counter.get() + 1);
/// }));
///
/// machine.start(idle);
/// assert_eq!(entered.get(), 1);
/// ```
pub struct State<E: Event> {
    name: Option<Cow<'static, str>>,
    on_enter: Option<Hook<E>>,
    on_leave: Option<Hook<E>>,
}

impl<E: Event> State<E> {
    /// Create an anonymous state without hooks.
    pub fn new() -> Self {
        Self {
            name: None,
            on_enter: None,
            on_leave: None,
        }
    }

    /// Create a state carrying a display name for logs.
    pub fn named(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::new()
        }
    }

    /// Bind the enter hook, replacing any previous one.
    pub fn on_enter<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Machine<E>) + 'static,
    {
        self.on_enter = Some(Rc::new(hook));
        self
    }

    /// Bind the leave hook, replacing any previous one.
    pub fn on_leave<F>(mut self, hook: F) -> Self
    where
        F: Fn(&mut Machine<E>) + 'static,
    {
        self.on_leave = Some(Rc::new(hook));
        self
    }

    /// Display name, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Check whether an enter hook is bound
    pub fn has_enter_hook(&self) -> bool {
        self.on_enter.is_some()
    }

    /// Check whether a leave hook is bound
    pub fn has_leave_hook(&self) -> bool {
        self.on_leave.is_some()
    }

    /// Run the enter hook, if any. Every call fires the hook again.
    pub fn enter(&self, machine: &mut Machine<E>) {
        if let Some(hook) = &self.on_enter {
            hook(machine);
        }
    }

    /// Run the leave hook, if any. Every call fires the hook again.
    pub fn leave(&self, machine: &mut Machine<E>) {
        if let Some(hook) = &self.on_leave {
            hook(machine);
        }
    }

    pub(crate) fn enter_hook(&self) -> Option<Hook<E>> {
        self.on_enter.clone()
    }

    pub(crate) fn leave_hook(&self) -> Option<Hook<E>> {
        self.on_leave.clone()
    }
}

impl<E: Event> Default for State<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> Clone for State<E> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            on_enter: self.on_enter.clone(),
            on_leave: self.on_leave.clone(),
        }
    }
}

impl<E: Event> fmt::Debug for State<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("name", &self.name)
            .field("on_enter", &self.on_enter.is_some())
            .field("on_leave", &self.on_leave.is_some())
            .finish()
    }
}
