//! Featherstate: a lightweight, synchronous finite state machine
//!
//! Applications declare states with optional enter/leave hooks and
//! transitions keyed by an event value, optionally gated by a guard and
//! followed by ordered actions. The machine is then driven by feeding it
//! events: for each event, the first registered transition out of the
//! current state whose guard passes is taken.
//!
//! # Core Concepts
//!
//! - **State**: a condition with optional enter/leave hooks, addressed by a
//!   `StateId` handle issued by the machine
//! - **Transition**: an event-triggered edge with an optional guard and
//!   ordered actions
//! - **Machine**: owns states and the dispatch table, tracks the current
//!   state, and runs every callback synchronously
//!
//! # Example
//!
//! ```rust
//! use featherstate::{transition_between, Dispatch, Machine, State};
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
//! enum Event {
//!     Coin,
//!     Push,
//! }
//!
//! let coins = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&coins);
//!
//! let mut machine: Machine<Event> = Machine::new();
//! let locked = machine.add_state(State::named("locked"));
//! let unlocked = machine.add_state(State::named("unlocked"));
//!
//! machine
//!     .register(
//!         transition_between(locked, unlocked)
//!             .on(Event::Coin)
//!             .with_action(move |_| counter.set(counter.get() + 1)),
//!     )
//!     .register(transition_between(unlocked, locked).on(Event::Push));
//!
//! machine.start(locked);
//! assert_eq!(machine.notify(Event::Push), Dispatch::Unhandled);
//! assert_eq!(
//!     machine.notify(Event::Coin),
//!     Dispatch::Fired { from: locked, to: unlocked }
//! );
//! assert_eq!(coins.get(), 1);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod dispatch;

// Re-export commonly used types
pub use builder::{transition_between, BuildError, MachineBuilder, TransitionBuilder};
pub use config::{AfterStop, ConfigError, MachineConfig};
pub use crate::core::{Action, Event, Guard, Hook, State, StateId};
pub use dispatch::{Dispatch, Lifecycle, Machine, MachineError, Transition};
