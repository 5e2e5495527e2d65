//! Runtime for executing queries
//!
//! Drives the pure state machine: every effect that needs I/O (a model call
//! or an action dispatch) is executed here, one at a time.

mod error;
mod executor;
pub mod traits;

#[cfg(test)]
pub mod testing;

pub use error::QueryError;
pub use executor::QueryRuntime;
pub use traits::*;

use crate::llm::LlmService;
use crate::system_prompt::build_system_prompt;
use std::sync::Arc;

/// Type alias for production runtime with concrete implementations
pub type ProductionRuntime = QueryRuntime<LlmModelClient, LlmActionDispatcher>;

impl ProductionRuntime {
    /// Runtime whose model client and action handlers share one backend
    pub fn from_service(service: Arc<dyn LlmService>) -> Self {
        QueryRuntime::new(
            LlmModelClient::new(service.clone()),
            LlmActionDispatcher::new(service),
            build_system_prompt(),
        )
    }
}
