//! Machine lifecycle errors.

use crate::core::StateId;
use thiserror::Error;

/// Misuse of a machine's lifecycle or of foreign state handles.
///
/// These are programming errors. The `try_*` methods of
/// [`Machine`](crate::Machine) return them; the plain methods panic with
/// the same message.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MachineError {
    #[error("Machine already started. A machine can only be started once")]
    AlreadyStarted,

    #[error("Initial state not declared. Call .set_initial(state) before .start_initial()")]
    NoInitialState,

    #[error("Initial state already declared")]
    InitialStateAlreadySet,

    #[error("State {0} was not issued by this machine")]
    UnknownState(StateId),
}
