//! Build errors for the machine builder.

use crate::core::StateId;
use thiserror::Error;

/// Errors that can occur when building a machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    #[error("Initial state {0} was not declared with .state()")]
    UnknownInitialState(StateId),

    #[error("Transition source state {0} was not declared with .state()")]
    UnknownSource(StateId),

    #[error("Transition target state {0} was not declared with .state()")]
    UnknownTarget(StateId),
}
