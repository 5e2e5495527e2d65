//! Backend configuration, read once at process start

/// Default Gemini model for both the agent loop and the action handlers
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Configuration for the text-generation backend
#[derive(Debug, Clone)]
pub struct LlmConfig {
    pub google_api_key: Option<String>,
    /// Gateway URL (e.g., `http://169.254.169.254/gateway/llm`); the gateway
    /// handles authentication.
    pub gateway: Option<String>,
    pub model: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            google_api_key: None,
            gateway: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl LlmConfig {
    pub fn from_env() -> Self {
        Self {
            google_api_key: std::env::var("GOOGLE_API_KEY").ok(),
            gateway: std::env::var("LLM_GATEWAY").ok(),
            model: std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string()),
        }
    }

    /// Copy of this configuration with a caller-supplied API key.
    ///
    /// Blank keys are ignored so an empty form field falls back to the
    /// process-wide key.
    pub fn with_api_key(&self, api_key: Option<&str>) -> Self {
        let mut config = self.clone();
        if let Some(key) = api_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.google_api_key = Some(key.to_string());
        }
        config
    }

    /// API key to send, or `"implicit"` in gateway mode.
    pub(super) fn effective_api_key(&self) -> Option<String> {
        if self.gateway.is_some() {
            return Some("implicit".to_string());
        }
        self.google_api_key
            .as_ref()
            .filter(|k| !k.is_empty())
            .cloned()
    }
}
