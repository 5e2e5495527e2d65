//! Query executor

use super::traits::{ActionDispatcher, ModelClient};
use super::QueryError;

use crate::agent::Conversation;
use crate::llm::LlmError;
use crate::state_machine::state::DEFAULT_MAX_TURNS;
use crate::state_machine::{transition, Effect, Event, FailureReason, QueryContext, QueryState};
use std::sync::Arc;
use tracing::Instrument;

/// Runs queries against a model client and a set of action handlers.
///
/// Holds no per-query state: each call to [`QueryRuntime::query`] gets its
/// own transcript, trace and turn counter, so one runtime can serve many
/// concurrent queries.
pub struct QueryRuntime<M, A>
where
    M: ModelClient + 'static,
    A: ActionDispatcher + 'static,
{
    model: Arc<M>,
    actions: Arc<A>,
    system_prompt: String,
}

/// Mutable state of a single query
struct QuerySession {
    context: QueryContext,
    state: QueryState,
    conversation: Conversation,
    trace: String,
}

impl<M, A> QueryRuntime<M, A>
where
    M: ModelClient + 'static,
    A: ActionDispatcher + 'static,
{
    pub fn new(model: M, actions: A, system_prompt: String) -> Self {
        Self {
            model: Arc::new(model),
            actions: Arc::new(actions),
            system_prompt,
        }
    }

    /// Answer `question` with the default turn limit
    pub async fn ask(&self, question: &str) -> Result<String, QueryError> {
        self.query(question, DEFAULT_MAX_TURNS).await
    }

    /// Answer `question`, making at most `max_turns` model calls.
    ///
    /// Returns the trace of every completion and observation, each followed
    /// by a blank line.
    pub async fn query(&self, question: &str, max_turns: u32) -> Result<String, QueryError> {
        let context = QueryContext::new(uuid::Uuid::new_v4().to_string(), max_turns);
        let span = tracing::info_span!("query", query_id = %context.query_id, max_turns);

        let session = QuerySession {
            context,
            state: QueryState::Idle,
            conversation: Conversation::new(Some(&self.system_prompt)),
            trace: String::new(),
        };

        self.run(
            session,
            Event::Start {
                question: question.to_string(),
            },
        )
        .instrument(span)
        .await
    }

    async fn run(&self, mut session: QuerySession, start: Event) -> Result<String, QueryError> {
        let mut pending = Some(start);

        // One event at a time: each effect that performs I/O yields the next event
        while let Some(event) = pending.take() {
            let result = transition(&session.state, &session.context, event)?;
            let old_state = std::mem::replace(&mut session.state, result.new_state);
            tracing::debug!(
                from = old_state.label(),
                to = session.state.label(),
                turn = session.state.turn(),
                "Query transition"
            );

            for effect in result.effects {
                if let Some(next) = self.execute_effect(&mut session, effect).await? {
                    pending = Some(next);
                }
            }
        }

        match session.state {
            QueryState::Done { turns } => {
                tracing::info!(turns, trace_len = session.trace.len(), "Query finished");
                Ok(session.trace)
            }
            QueryState::Failed {
                turn,
                reason: FailureReason::UnknownAction { name, argument },
            } => {
                tracing::warn!(turn, action = %name, %argument, "Model requested unknown action");
                Err(QueryError::UnknownAction { name, argument })
            }
            other => Err(crate::state_machine::TransitionError::InvalidTransition(format!(
                "Query stalled in {other:?}"
            ))
            .into()),
        }
    }

    /// Execute one effect, returning the event it produced, if any
    async fn execute_effect(
        &self,
        session: &mut QuerySession,
        effect: Effect,
    ) -> Result<Option<Event>, QueryError> {
        match effect {
            Effect::AppendMessage { role, content } => {
                session.conversation.append(role, content);
                Ok(None)
            }

            Effect::AppendTrace { text } => {
                session.trace.push_str(&text);
                Ok(None)
            }

            Effect::RequestCompletion => {
                let turn = session.state.turn();
                tracing::info!(
                    turn,
                    model = %self.model.model_id(),
                    messages = session.conversation.messages().len(),
                    "Requesting completion"
                );
                let prompt = session.conversation.render();
                match self.model.complete(&prompt).await {
                    Ok(text) => Ok(Some(Event::Completion { text })),
                    Err(e) => Err(Self::fail(session, e)),
                }
            }

            Effect::Dispatch { action, argument } => {
                tracing::info!(
                    turn = session.state.turn(),
                    %action,
                    %argument,
                    "Dispatching action"
                );
                match self.actions.dispatch(action, &argument).await {
                    Ok(text) => Ok(Some(Event::Observation { text })),
                    Err(e) => Err(Self::fail(session, e)),
                }
            }
        }
    }

    /// Record a backend failure and hand the original error back unchanged
    fn fail(session: &mut QuerySession, error: LlmError) -> QueryError {
        let event = Event::BackendFailure {
            message: error.message.clone(),
        };
        match transition(&session.state, &session.context, event) {
            Ok(result) => session.state = result.new_state,
            Err(e) => tracing::error!(error = %e, "Failed to record backend failure"),
        }
        tracing::error!(
            turn = session.state.turn(),
            kind = ?error.kind,
            error = %error.message,
            "Query failed"
        );
        QueryError::Backend(error)
    }
}
