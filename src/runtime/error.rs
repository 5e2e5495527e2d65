//! Query error types

use crate::state_machine::TransitionError;
use crate::llm::LlmError;
use thiserror::Error;

/// Why a query produced no trace
#[derive(Debug, Error)]
pub enum QueryError {
    /// The model requested an action outside the closed set
    #[error("Unknown action: {name}: {argument}")]
    UnknownAction { name: String, argument: String },

    /// The model client or an action handler failed; the backend error is
    /// passed through as-is
    #[error(transparent)]
    Backend(#[from] LlmError),

    /// The state machine rejected an event the runtime produced
    #[error(transparent)]
    Transition(#[from] TransitionError),
}
