//! Event dispatch.
//!
//! This module holds the runtime half of the crate: transitions, the
//! dispatch table that indexes them, and the machine that resolves each
//! event against the current state.
//!
//! # Dispatch order
//!
//! For the first candidate whose guard passes:
//! 1. the source state's leave hook runs,
//! 2. the transition's actions run in attachment order,
//! 3. the destination becomes the current state,
//! 4. the destination's enter hook runs.
//!
//! Later candidates for the same trigger are neither evaluated nor fired.

mod error;
mod machine;
mod table;
mod transition;

pub use error::MachineError;
pub use machine::{Dispatch, Lifecycle, Machine};
pub use transition::Transition;
