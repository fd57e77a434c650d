//! Builder API for declaring machines.
//!
//! Transitions are declared as a method chain:
//!
//! ```
//! use featherstate::builder::transition_between;
//! use featherstate::{Machine, State};
//!
//! let mut machine: Machine<char> = Machine::new();
//! let a = machine.add_state(State::named("a"));
//! let b = machine.add_state(State::named("b"));
//!
//! machine.register(
//!     transition_between(a, b)
//!         .on('q')
//!         .when(|_| true)
//!         .with_action(|_| println!("first"))
//!         .with_action(|_| println!("second")),
//! );
//! ```
//!
//! The [`transition!`](crate::transition) macro expands to the same chain,
//! and [`MachineBuilder`] validates a whole machine at once.

pub mod error;
pub mod machine;
pub mod macros;
pub mod transition;

pub use error::BuildError;
pub use machine::MachineBuilder;
pub use transition::TransitionBuilder;

use crate::core::StateId;

/// Pair two states; bind the trigger with [`TransitionBuilder::on`].
///
/// # Example
///
/// ```
/// use featherstate::builder::transition_between;
/// use featherstate::{Machine, State};
///
/// let mut machine: Machine<u8> = Machine::new();
/// let off = machine.add_state(State::named("off"));
/// let on = machine.add_state(State::named("on"));
///
/// let transition = transition_between(off, on).on(1);
/// assert_eq!(transition.from(), off);
/// assert_eq!(transition.to(), on);
/// ```
pub fn transition_between(from: StateId, to: StateId) -> TransitionBuilder {
    TransitionBuilder::new(from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::State;
    use crate::dispatch::{Dispatch, Machine};

    #[test]
    fn transition_between_builds_chain() {
        let mut machine: Machine<char> = Machine::new();
        let a = machine.add_state(State::new());
        let b = machine.add_state(State::new());

        let transition = transition_between(a, b)
            .on('q')
            .when(|c| *c == 'q')
            .with_action(|_| {});

        assert!(transition.has_guard());
        assert!(transition.check_guard());
        assert_eq!(transition.action_count(), 1);

        machine.register(transition);
        machine.start(a);
        assert_eq!(machine.notify('q'), Dispatch::Fired { from: a, to: b });
    }
}
