//! State machine that dispatches events to registered transitions.

use crate::config::{AfterStop, MachineConfig};
use crate::core::{Event, Hook, State, StateId};
use crate::dispatch::error::MachineError;
use crate::dispatch::table::DispatchTable;
use crate::dispatch::transition::Transition;
use std::fmt;

/// Lifecycle of a machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Built but `start` not called yet
    NotStarted,

    /// Started and dispatching events
    Running,

    /// Stopped; the current state is retained
    Stopped,
}

/// Outcome of delivering one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dispatch {
    /// A transition fired from `from` to `to`
    Fired { from: StateId, to: StateId },

    /// No candidate for the event in the current state, or every guard failed
    Unhandled,

    /// The machine is not started, or stopped with [`AfterStop::Ignore`]
    Inactive,
}

impl Dispatch {
    /// Check whether a transition fired
    pub fn fired(&self) -> bool {
        matches!(self, Dispatch::Fired { .. })
    }
}

/// Finite state machine over one event type.
///
/// The machine owns its states (addressed by [`StateId`]) and its
/// transitions. Every callback runs synchronously on the calling thread,
/// inside the `start`, `stop` or `notify` call that triggered it, and may
/// call back into the machine.
///
/// # Example
///
/// ```rust
/// use featherstate::{transition_between, Dispatch, Machine, State};
///
/// let mut machine: Machine<char> = Machine::new();
/// let locked = machine.add_state(State::named("locked"));
/// let open = machine.add_state(State::named("open"));
///
/// machine
///     .register(transition_between(locked, open).on('c'))
///     .register(transition_between(open, locked).on('p'));
///
/// machine.start(locked);
/// assert_eq!(machine.notify('c'), Dispatch::Fired { from: locked, to: open });
/// assert_eq!(machine.notify('c'), Dispatch::Unhandled);
/// assert_eq!(machine.current_state(), Some(open));
/// ```
///
/// Transitions are typed by the machine's event, so mixing event types does
/// not compile:
///
/// ```compile_fail
/// use featherstate::{transition_between, Machine, State};
///
/// let mut machine: Machine<char> = Machine::new();
/// let a = machine.add_state(State::new());
/// let b = machine.add_state(State::new());
/// machine.register(transition_between(a, b).on(7u8));
/// ```
pub struct Machine<E: Event> {
    states: Vec<State<E>>,
    table: DispatchTable<E>,
    initial: Option<StateId>,
    current: Option<StateId>,
    // Current state entered and not yet left
    entered: bool,
    lifecycle: Lifecycle,
    config: MachineConfig,
}

impl<E: Event> Machine<E> {
    /// Create an empty machine with the default configuration.
    pub fn new() -> Self {
        Self::with_config(MachineConfig::default())
    }

    /// Create an empty machine with `config`.
    pub fn with_config(config: MachineConfig) -> Self {
        Self {
            states: Vec::new(),
            table: DispatchTable::new(),
            initial: None,
            current: None,
            entered: false,
            lifecycle: Lifecycle::NotStarted,
            config,
        }
    }

    /// Get the machine configuration
    pub fn config(&self) -> &MachineConfig {
        &self.config
    }

    /// Add a state to the arena and return its handle.
    ///
    /// Adding the same (or an equal) state twice yields two distinct handles.
    pub fn add_state(&mut self, state: State<E>) -> StateId {
        let id = StateId(self.states.len());
        self.states.push(state);
        id
    }

    /// Look up a state by handle
    pub fn state(&self, id: StateId) -> Option<&State<E>> {
        self.states.get(id.0)
    }

    /// Number of states added so far
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Number of registered transitions
    pub fn transition_count(&self) -> usize {
        self.table.len()
    }

    /// Register a transition. Transitions sharing a trigger are tried in
    /// registration order.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint was not issued by this machine.
    pub fn register(&mut self, transition: Transition<E>) -> &mut Self {
        self.try_register(transition)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Register a transition, rejecting endpoints this machine never issued.
    pub fn try_register(&mut self, transition: Transition<E>) -> Result<&mut Self, MachineError> {
        self.ensure_known(transition.from())?;
        self.ensure_known(transition.to())?;
        self.table.insert(transition);
        Ok(self)
    }

    /// Declare the state `start_initial` enters.
    ///
    /// # Panics
    ///
    /// Panics if an initial state was already declared or `state` is unknown.
    pub fn set_initial(&mut self, state: StateId) -> &mut Self {
        self.try_set_initial(state)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Declare the initial state, reporting misuse as an error.
    pub fn try_set_initial(&mut self, state: StateId) -> Result<&mut Self, MachineError> {
        if self.initial.is_some() {
            return Err(MachineError::InitialStateAlreadySet);
        }
        self.ensure_known(state)?;
        self.initial = Some(state);
        Ok(self)
    }

    /// Get the declared initial state
    pub fn initial_state(&self) -> Option<StateId> {
        self.initial
    }

    /// Enter `initial` and start dispatching.
    ///
    /// # Panics
    ///
    /// Panics if the machine was already started or `initial` is unknown.
    pub fn start(&mut self, initial: StateId) {
        self.try_start(initial)
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Enter `initial` and start dispatching.
    ///
    /// The machine is running before the enter hook fires, so the hook may
    /// already feed events.
    pub fn try_start(&mut self, initial: StateId) -> Result<(), MachineError> {
        if self.lifecycle != Lifecycle::NotStarted {
            return Err(MachineError::AlreadyStarted);
        }
        self.ensure_known(initial)?;

        tracing::debug!(
            machine = self.config.display_name(),
            state = %self.label(initial),
            "starting machine"
        );

        self.lifecycle = Lifecycle::Running;
        self.current = Some(initial);
        self.fire_enter(initial);
        Ok(())
    }

    /// Start in the declared initial state.
    ///
    /// # Panics
    ///
    /// Panics if no initial state was declared or the machine was already
    /// started.
    pub fn start_initial(&mut self) {
        self.try_start_initial()
            .unwrap_or_else(|err| panic!("{err}"))
    }

    /// Start in the declared initial state, reporting misuse as an error.
    pub fn try_start_initial(&mut self) -> Result<(), MachineError> {
        let initial = self.initial.ok_or(MachineError::NoInitialState)?;
        self.try_start(initial)
    }

    /// Leave the current state and stop the machine.
    ///
    /// The leave hook fires only if the current state was entered since it
    /// was last left, so calling `stop` again (also from inside the hook) does
    /// not leave twice. A machine stopped under [`AfterStop::Dispatch`] that
    /// entered another state leaves it on the next `stop`. The current state
    /// is kept. Before `start` this does nothing.
    pub fn stop(&mut self) {
        if self.lifecycle == Lifecycle::NotStarted {
            tracing::trace!(
                machine = self.config.display_name(),
                "stop ignored: machine not started"
            );
            return;
        }

        self.lifecycle = Lifecycle::Stopped;
        match self.current {
            Some(current) if self.entered => {
                tracing::debug!(
                    machine = self.config.display_name(),
                    state = %self.label(current),
                    "stopping machine"
                );
                self.fire_leave(current);
            }
            _ => tracing::trace!(
                machine = self.config.display_name(),
                "stop ignored: current state already left"
            ),
        }
    }

    /// Deliver `event` to the current state.
    ///
    /// The first registered candidate whose guard passes fires: the source is
    /// left, the transition's actions run in order, the destination becomes
    /// current and is entered. Candidates after it are not evaluated.
    pub fn notify(&mut self, event: E) -> Dispatch {
        let Some(from) = self.current else {
            tracing::trace!(
                machine = self.config.display_name(),
                event = ?event,
                "event ignored: machine not started"
            );
            return Dispatch::Inactive;
        };

        if self.lifecycle == Lifecycle::Stopped && self.config.after_stop == AfterStop::Ignore {
            tracing::trace!(
                machine = self.config.display_name(),
                event = ?event,
                "event ignored: machine stopped"
            );
            return Dispatch::Inactive;
        }

        let Some(transition) = self.table.select(from, &event) else {
            tracing::trace!(
                machine = self.config.display_name(),
                state = %self.label(from),
                event = ?event,
                "no transition"
            );
            return Dispatch::Unhandled;
        };

        let to = transition.to();
        tracing::debug!(
            machine = self.config.display_name(),
            from = %self.label(from),
            to = %self.label(to),
            event = ?event,
            "transition fired"
        );

        self.fire_leave(from);
        transition.invoke_actions(self);
        self.current = Some(to);
        self.fire_enter(to);

        Dispatch::Fired { from, to }
    }

    /// Get the current state (`None` before `start`)
    pub fn current_state(&self) -> Option<StateId> {
        self.current
    }

    /// Check whether `state` is the current state.
    pub fn is_in(&self, state: StateId) -> bool {
        self.current == Some(state)
    }

    /// Get the lifecycle phase
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Check whether the machine is started and not stopped
    pub fn is_running(&self) -> bool {
        self.lifecycle == Lifecycle::Running
    }

    /// Check whether `stop` was called.
    ///
    /// Unlike `!is_running()`, this is false for a machine that was never
    /// started; use [`Machine::lifecycle`] to tell the phases apart.
    pub fn is_stopped(&self) -> bool {
        self.lifecycle == Lifecycle::Stopped
    }

    fn ensure_known(&self, state: StateId) -> Result<(), MachineError> {
        if state.0 < self.states.len() {
            Ok(())
        } else {
            Err(MachineError::UnknownState(state))
        }
    }

    fn fire_enter(&mut self, state: StateId) {
        self.entered = true;
        let hook = self.states[state.0].enter_hook();
        self.run_hook(hook);
    }

    fn fire_leave(&mut self, state: StateId) {
        self.entered = false;
        let hook = self.states[state.0].leave_hook();
        self.run_hook(hook);
    }

    fn run_hook(&mut self, hook: Option<Hook<E>>) {
        if let Some(hook) = hook {
            hook(self);
        }
    }

    fn label(&self, state: StateId) -> StateLabel<'_> {
        StateLabel {
            id: state,
            name: self.states.get(state.0).and_then(State::name),
        }
    }
}

impl<E: Event> Default for Machine<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> fmt::Debug for Machine<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("name", &self.config.display_name())
            .field("lifecycle", &self.lifecycle)
            .field("current", &self.current)
            .field("states", &self.states.len())
            .field("transitions", &self.table.len())
            .finish()
    }
}

/// State name for log records, falling back to the handle.
struct StateLabel<'a> {
    id: StateId,
    name: Option<&'a str>,
}

impl fmt::Display for StateLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.id),
        }
    }
}
