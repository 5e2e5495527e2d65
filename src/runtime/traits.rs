//! Trait abstractions for runtime I/O
//!
//! These traits enable testing the executor with mock implementations.

use crate::agent::Action;
use crate::llm::{LlmError, LlmRequest, LlmService};
use async_trait::async_trait;
use std::sync::Arc;

/// Client for the agent's own completions
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Complete a rendered transcript
    async fn complete(&self, transcript: &str) -> Result<String, LlmError>;

    /// Get the model ID
    fn model_id(&self) -> &str;
}

/// Handlers for the closed action set
///
/// Implementations are shared between concurrent queries and must not
/// change after construction.
#[async_trait]
pub trait ActionDispatcher: Send + Sync {
    /// Run one action and return its observation text
    async fn dispatch(&self, action: Action, argument: &str) -> Result<String, LlmError>;
}

// ============================================================================
// Arc implementations for trait objects
// ============================================================================

#[async_trait]
impl<T: ModelClient + ?Sized> ModelClient for Arc<T> {
    async fn complete(&self, transcript: &str) -> Result<String, LlmError> {
        (**self).complete(transcript).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

#[async_trait]
impl<T: ActionDispatcher + ?Sized> ActionDispatcher for Arc<T> {
    async fn dispatch(&self, action: Action, argument: &str) -> Result<String, LlmError> {
        (**self).dispatch(action, argument).await
    }
}

// ============================================================================
// Production Adapters
// ============================================================================

/// Adapter to use an `LlmService` as the agent's `ModelClient`
pub struct LlmModelClient {
    service: Arc<dyn LlmService>,
}

impl LlmModelClient {
    pub fn new(service: Arc<dyn LlmService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ModelClient for LlmModelClient {
    async fn complete(&self, transcript: &str) -> Result<String, LlmError> {
        // The whole transcript travels as one user turn
        let response = self.service.complete(&LlmRequest::prompt(transcript)).await?;
        Ok(response.text())
    }

    fn model_id(&self) -> &str {
        self.service.model_id()
    }
}

/// Action handlers backed by one backend call each
pub struct LlmActionDispatcher {
    service: Arc<dyn LlmService>,
}

impl LlmActionDispatcher {
    pub fn new(service: Arc<dyn LlmService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl ActionDispatcher for LlmActionDispatcher {
    async fn dispatch(&self, action: Action, argument: &str) -> Result<String, LlmError> {
        let response = self
            .service
            .complete(&LlmRequest::prompt(action.prompt(argument)))
            .await?;
        Ok(response.text())
    }
}
