//! Core state machine types.
//!
//! This module contains the building blocks shared by the dispatch engine
//! and the builders:
//! - The `Event` bound every trigger type satisfies
//! - `State` declarations and their `StateId` handles
//! - `Guard` predicates for transition control

mod event;
mod guard;
mod state;

pub use event::Event;
pub use guard::Guard;
pub use state::{Action, Hook, State, StateId};
