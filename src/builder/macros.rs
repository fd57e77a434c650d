//! Macros for compact transition declarations.

/// Declare a transition in one line.
///
/// `transition!(from => to; event)` produces an unguarded transition. An
/// optional `, if guard` tail binds a guard closure and an optional
/// `, then [action, ...]` tail appends actions in order.
///
/// # Example
///
/// ```
/// use featherstate::{transition, Machine, State};
/// use std::cell::Cell;
/// use std::rc::Rc;
///
/// let presses = Rc::new(Cell::new(0));
/// let counter = Rc::clone(&presses);
///
/// let mut machine: Machine<char> = Machine::new();
/// let idle = machine.add_state(State::named("idle"));
/// let typing = machine.add_state(State::named("typing"));
///
/// machine
///     .register(transition!(idle => typing; 'k'))
///     .register(transition!(typing => typing; 'k', if |_| true, then [
///         move |_| counter.set(counter.get() + 1),
///     ]));
///
/// machine.start(idle);
/// machine.notify('k');
/// machine.notify('k');
/// assert_eq!(presses.get(), 1);
/// ```
#[macro_export]
macro_rules! transition {
    (
        $from:expr => $to:expr; $event:expr
        $(, if $guard:expr)?
        $(, then [$($action:expr),* $(,)?])?
    ) => {{
        let transition = $crate::builder::transition_between($from, $to).on($event);
        $(let transition = transition.when($guard);)?
        $($(let transition = transition.with_action($action);)*)?
        transition
    }};
}
