//! Application state and service initialization
//!
//! Builds the LLM client and the classifier once at startup so that every
//! request shares them.

use std::sync::Arc;

use crate::model::Config;
use crate::service::{ClassifierService, LlmClient};

const ENV_OPENAI_API_KEY: &str = "OPENAI_API_KEY";

/// Application state containing all services and shared resources
pub struct AppState {
    /// Email classification service
    pub classifier: Arc<ClassifierService>,
    /// Maximum accepted request body size
    pub max_payload_bytes: usize,
}

impl AppState {
    /// Initialize all services and build application state
    ///
    /// Requires OPENAI_API_KEY.
    pub fn new(config: Config) -> Result<Self, AppError> {
        let api_key = std::env::var(ENV_OPENAI_API_KEY)
            .map_err(|_| AppError::MissingConfig(ENV_OPENAI_API_KEY))?;

        if api_key.trim().is_empty() {
            return Err(AppError::InvalidConfig("OPENAI_API_KEY is empty"));
        }

        let llm_client = LlmClient::new(&api_key);

        let classifier = Arc::new(ClassifierService::new(
            Arc::new(llm_client),
            config.classifier,
        ));

        Ok(Self {
            classifier,
            max_payload_bytes: config.max_payload_bytes,
        })
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AppError {
    /// Missing required configuration
    #[error("Missing required configuration: {0}")]
    MissingConfig(&'static str),

    /// Invalid configuration value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(&'static str),
}
