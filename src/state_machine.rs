//! Query state machine
//!
//! Implements the Elm Architecture pattern with pure state transitions. The
//! runtime feeds events in and executes the returned effects.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{FailureReason, QueryContext, QueryState};
pub use transition::{transition, TransitionError};
