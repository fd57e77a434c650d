//! The event bound shared by every machine.

use std::fmt::Debug;

/// Values that can trigger transitions.
///
/// An event is a dispatch key: it must be totally ordered (the dispatch table
/// is a `BTreeMap`), cloneable (each transition keeps its own copy) and
/// debuggable (events are recorded in trace output). The blanket impl means
/// any such type qualifies, so enums and `char`s work out of the box.
///
/// # Example
///
/// ```rust
/// use featherstate::core::Event;
///
/// #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// enum Key {
///     Pressed,
///     CapsLock,
/// }
///
/// fn assert_event<E: Event>() {}
/// assert_event::<Key>();
/// assert_event::<char>();
/// ```
///
/// A unit struct is a valid event too: dispatch is keyed by the event and
/// the current state, so a single value can still drive a cycle.
///
/// ```rust
/// use featherstate::{transition_between, Machine, State};
///
/// #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
/// struct Tick;
///
/// let mut machine: Machine<Tick> = Machine::new();
/// let red = machine.add_state(State::named("red"));
/// let green = machine.add_state(State::named("green"));
/// machine
///     .register(transition_between(red, green).on(Tick))
///     .register(transition_between(green, red).on(Tick));
///
/// machine.start(red);
/// machine.notify(Tick);
/// assert!(machine.is_in(green));
/// ```
pub trait Event: Ord + Clone + Debug {}

impl<T: Ord + Clone + Debug> Event for T {}
