//! Pure state transition function
//!
//! Given the same state, context and event this always produces the same
//! new state and effects, with no I/O.

use super::{Effect, Event, FailureReason, QueryContext, QueryState};
use crate::agent::{parse_directives, Action};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_state: QueryState,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(state: QueryState) -> Self {
        Self {
            new_state: state,
            effects: vec![],
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    pub fn with_effects(mut self, effects: impl IntoIterator<Item = Effect>) -> Self {
        self.effects.extend(effects);
        self
    }
}

/// Errors that can occur during transition
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("Query already finished")]
    AlreadyFinished,
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),
}

/// Pure transition function
pub fn transition(
    state: &QueryState,
    context: &QueryContext,
    event: Event,
) -> Result<TransitionResult, TransitionError> {
    match (state, event) {
        // Idle + Start -> Requesting turn 1
        (QueryState::Idle, Event::Start { question }) => {
            Ok(next_turn(0, context, vec![Effect::user_message(question)]))
        }

        // Requesting + Completion -> Done | Acting | Failed
        (QueryState::Requesting { turn }, Event::Completion { text }) => {
            let turn = *turn;
            let effects = [Effect::trace(&text), Effect::assistant_message(text.clone())];

            // At most one action per turn: the first directive in line order
            let Some(directive) = parse_directives(&text).into_iter().next() else {
                // No directive: the completion is the final answer
                return Ok(TransitionResult::new(QueryState::Done { turns: turn })
                    .with_effects(effects));
            };

            match Action::from_name(&directive.name) {
                Some(action) => Ok(TransitionResult::new(QueryState::Acting {
                    turn,
                    action,
                    argument: directive.argument.clone(),
                })
                .with_effects(effects)
                .with_effect(Effect::Dispatch {
                    action,
                    argument: directive.argument,
                })),
                None => Ok(TransitionResult::new(QueryState::Failed {
                    turn,
                    reason: FailureReason::UnknownAction {
                        name: directive.name,
                        argument: directive.argument,
                    },
                })
                .with_effects(effects)),
            }
        }

        // Acting + Observation -> Requesting next turn | Done at the turn limit
        (QueryState::Acting { turn, .. }, Event::Observation { text }) => {
            let observation = format!("Observation: {text}");
            let effects = vec![
                Effect::trace(&observation),
                Effect::user_message(observation),
            ];
            Ok(next_turn(*turn, context, effects))
        }

        // Any in-flight state + BackendFailure -> Failed
        (
            QueryState::Requesting { turn } | QueryState::Acting { turn, .. },
            Event::BackendFailure { message },
        ) => Ok(TransitionResult::new(QueryState::Failed {
            turn: *turn,
            reason: FailureReason::Backend { message },
        })),

        (QueryState::Done { .. } | QueryState::Failed { .. }, _) => {
            Err(TransitionError::AlreadyFinished)
        }

        (state, event) => Err(TransitionError::InvalidTransition(format!(
            "No transition from {state:?} with event {event:?}"
        ))),
    }
}

/// Start the turn after `completed`, or finish when the limit is reached.
///
/// This is the only place a model request is issued, so the number of
/// `RequestCompletion` effects per query can never exceed `max_turns`.
fn next_turn(completed: u32, context: &QueryContext, effects: Vec<Effect>) -> TransitionResult {
    if completed >= context.max_turns {
        return TransitionResult::new(QueryState::Done { turns: completed }).with_effects(effects);
    }
    TransitionResult::new(QueryState::Requesting {
        turn: completed + 1,
    })
    .with_effects(effects)
    .with_effect(Effect::RequestCompletion)
}
