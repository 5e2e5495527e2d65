//! Effects produced by state transitions

use crate::agent::{Action, Role};

/// Effects to be executed after state transition, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a message to the transcript
    AppendMessage { role: Role, content: String },

    /// Append text to the trace returned to the caller
    AppendTrace { text: String },

    /// Send the rendered transcript to the model client
    RequestCompletion,

    /// Invoke an action handler
    Dispatch { action: Action, argument: String },
}

impl Effect {
    pub fn user_message(content: impl Into<String>) -> Self {
        Effect::AppendMessage {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant_message(content: impl Into<String>) -> Self {
        Effect::AppendMessage {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Trace entries are separated by a blank line
    pub fn trace(entry: &str) -> Self {
        Effect::AppendTrace {
            text: format!("{entry}\n\n"),
        }
    }
}
