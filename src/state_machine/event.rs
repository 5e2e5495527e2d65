//! Events that can occur during a query

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// The user's question opens the query
    Start { question: String },

    /// Raw completion text returned by the model client
    Completion { text: String },

    /// Result text of the dispatched action
    Observation { text: String },

    /// The model client or an action handler returned an error
    BackendFailure { message: String },
}
