//! Query state types

use crate::agent::Action;

/// Turn limit used when the caller does not pick one
pub const DEFAULT_MAX_TURNS: u32 = 5;

/// Immutable per-query context
#[derive(Debug, Clone)]
pub struct QueryContext {
    pub query_id: String,
    /// Hard bound on model round-trips for this query
    pub max_turns: u32,
}

impl QueryContext {
    pub fn new(query_id: impl Into<String>, max_turns: u32) -> Self {
        Self {
            query_id: query_id.into(),
            max_turns,
        }
    }
}

/// Why a query failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureReason {
    /// The model asked for an action outside the closed set
    UnknownAction { name: String, argument: String },
    /// The model client or an action handler failed
    Backend { message: String },
}

/// State of one query
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QueryState {
    /// Not started
    #[default]
    Idle,

    /// Waiting for the completion of turn `turn` (1-based)
    Requesting { turn: u32 },

    /// Waiting for the observation of the action requested on turn `turn`
    Acting {
        turn: u32,
        action: Action,
        argument: String,
    },

    /// Finished normally after `turns` model calls
    Done { turns: u32 },

    /// Finished with an error on turn `turn`
    Failed { turn: u32, reason: FailureReason },
}

impl QueryState {
    /// Model calls issued so far, counting the one in flight
    pub fn turn(&self) -> u32 {
        match self {
            QueryState::Idle => 0,
            QueryState::Requesting { turn }
            | QueryState::Acting { turn, .. }
            | QueryState::Failed { turn, .. } => *turn,
            QueryState::Done { turns } => *turns,
        }
    }

    /// Short name for logs
    pub fn label(&self) -> &'static str {
        match self {
            QueryState::Idle => "idle",
            QueryState::Requesting { .. } => "requesting",
            QueryState::Acting { .. } => "acting",
            QueryState::Done { .. } => "done",
            QueryState::Failed { .. } => "failed",
        }
    }
}
