//! Builder for constructing validated machines.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{Event, State, StateId};
use crate::dispatch::{Machine, Transition};

/// Collects states, transitions and the initial state, then checks them
/// together in [`build`](MachineBuilder::build).
///
/// # Example
///
/// ```rust
/// use featherstate::{transition_between, MachineBuilder, State};
///
/// let mut builder = MachineBuilder::<char>::new();
/// let idle = builder.state(State::named("idle"));
/// let busy = builder.state(State::named("busy"));
///
/// builder
///     .initial(idle)
///     .transition(transition_between(idle, busy).on('w'))
///     .transition(transition_between(busy, idle).on('d'));
///
/// let mut machine = builder.build().unwrap();
/// machine.start_initial();
/// machine.notify('w');
/// assert!(machine.is_in(busy));
/// ```
pub struct MachineBuilder<E: Event> {
    config: MachineConfig,
    states: Vec<State<E>>,
    initial: Option<StateId>,
    transitions: Vec<Transition<E>>,
}

impl<E: Event> MachineBuilder<E> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create a builder whose machine uses `config`.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            config,
            states: Vec::new(),
            initial: None,
            transitions: Vec::new(),
        }
    }

    /// Declare a state and return the handle it will have in the machine.
    pub fn state(&mut self, state: State<E>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    /// Set the initial state (required).
    pub fn initial(&mut self, state: StateId) -> &mut Self {
        self.initial = Some(state);
        self
    }

    /// Add a transition.
    pub fn transition(&mut self, transition: Transition<E>) -> &mut Self {
        self.transitions.push(transition);
        self
    }

    /// Add multiple transitions at once, in iteration order.
    pub fn transitions<I>(&mut self, transitions: I) -> &mut Self
    where
        I: IntoIterator<Item = Transition<E>>,
    {
        self.transitions.extend(transitions);
        self
    }

    /// Build the machine.
    /// Returns an error if the initial state is missing or a handle is unknown.
    pub fn build(self) -> Result<Machine<E>, BuildError> {
        let declared = self.states.len();
        let known = |id: StateId| id.index() < declared;

        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        if !known(initial) {
            return Err(BuildError::UnknownInitialState(initial));
        }
        for transition in &self.transitions {
            if !known(transition.from()) {
                return Err(BuildError::UnknownSource(transition.from()));
            }
            if !known(transition.to()) {
                return Err(BuildError::UnknownTarget(transition.to()));
            }
        }

        let mut machine = Machine::with_config(self.config);
        for state in self.states {
            machine.add_state(state);
        }
        machine.set_initial(initial);
        for transition in self.transitions {
            machine.register(transition);
        }

        Ok(machine)
    }
}

impl<E: Event> Default for MachineBuilder<E> {
    fn default() -> Self {
        Self::new()
    }
}
