//! HTTP API for the fitness assistant
//!
//! A single-page form plus one JSON endpoint that runs a query.

mod assets;
mod handlers;
mod question;
mod types;

pub use handlers::create_router;

use crate::llm::{self, LlmConfig};
use crate::runtime::ProductionRuntime;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<LlmConfig>,
    /// Runtime built from the process-wide configuration, if it has credentials
    pub runtime: Option<Arc<ProductionRuntime>>,
}

impl AppState {
    pub fn new(config: LlmConfig) -> Self {
        let runtime = llm::service_from_config(&config)
            .map(|service| Arc::new(ProductionRuntime::from_service(service)));
        Self {
            config: Arc::new(config),
            runtime,
        }
    }

    /// Runtime for one request.
    ///
    /// A key supplied with the request gets its own backend for the duration
    /// of that request; nothing process-wide is modified.
    pub fn runtime_for(&self, api_key: Option<&str>) -> Option<Arc<ProductionRuntime>> {
        match api_key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => {
                let scoped = self.config.with_api_key(Some(key));
                llm::service_from_config(&scoped)
                    .map(|service| Arc::new(ProductionRuntime::from_service(service)))
            }
            None => self.runtime.clone(),
        }
    }
}
