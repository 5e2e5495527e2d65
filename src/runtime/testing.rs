//! Mock implementations for testing
//!
//! These mocks enable integration testing without real I/O.

use super::traits::{ActionDispatcher, ModelClient};
use crate::agent::Action;
use crate::llm::LlmError;
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

// ============================================================================
// Mock Model Client
// ============================================================================

/// Mock model client that returns queued completions
pub struct MockModelClient {
    responses: Mutex<VecDeque<Result<String, LlmError>>>,
    /// Returned once the queue is drained
    fallback: Option<String>,
    /// Record of every rendered transcript received
    prompts: Mutex<Vec<String>>,
}

impl MockModelClient {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            fallback: None,
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// A client that answers every request with `text`
    pub fn repeating(text: impl Into<String>) -> Self {
        Self {
            fallback: Some(text.into()),
            ..Self::new()
        }
    }

    /// Queue a successful completion
    pub fn queue_response(&self, text: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(text.into()));
    }

    /// Queue an error
    pub fn queue_error(&self, error: LlmError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn recorded_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

impl Default for MockModelClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModelClient for MockModelClient {
    async fn complete(&self, transcript: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(transcript.to_string());
        let queued = self.responses.lock().unwrap().pop_front();
        match (queued, &self.fallback) {
            (Some(result), _) => result,
            (None, Some(text)) => Ok(text.clone()),
            (None, None) => Err(LlmError::network("No mock response queued")),
        }
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}

// ============================================================================
// Scripted Action Dispatcher
// ============================================================================

/// Dispatcher with a fixed result per action
pub struct ScriptedDispatcher {
    outputs: HashMap<Action, Result<String, LlmError>>,
    /// Record of dispatches
    dispatches: Mutex<Vec<(Action, String)>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self {
            outputs: HashMap::new(),
            dispatches: Mutex::new(Vec::new()),
        }
    }

    pub fn with_output(mut self, action: Action, output: impl Into<String>) -> Self {
        self.outputs.insert(action, Ok(output.into()));
        self
    }

    pub fn with_error(mut self, action: Action, error: LlmError) -> Self {
        self.outputs.insert(action, Err(error));
        self
    }

    pub fn recorded_dispatches(&self) -> Vec<(Action, String)> {
        self.dispatches.lock().unwrap().clone()
    }
}

impl Default for ScriptedDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ActionDispatcher for ScriptedDispatcher {
    async fn dispatch(&self, action: Action, argument: &str) -> Result<String, LlmError> {
        self.dispatches
            .lock()
            .unwrap()
            .push((action, argument.to_string()));
        self.outputs
            .get(&action)
            .cloned()
            .unwrap_or_else(|| Err(LlmError::unknown(format!("No output scripted for {action}"))))
    }
}
