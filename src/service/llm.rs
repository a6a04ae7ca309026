//! Shared LLM client and interaction utilities
//!
//! Provides the provider seam used by the classifier and its OpenAI-backed implementation.

use async_trait::async_trait;
use rig::client::CompletionClient;
use rig::completion::Prompt;
use rig::extractor::ExtractionError;
use rig::providers::openai;

use crate::model::ExtractedVerdict;

/// Errors raised while talking to the LLM provider
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProviderError {
    /// Network, authentication or API-level failure
    #[error("LLM request failed: {0}")]
    Request(String),

    /// The provider answered but the reply could not be used
    #[error("Malformed LLM reply: {0}")]
    MalformedReply(String),
}

impl From<ExtractionError> for ProviderError {
    fn from(err: ExtractionError) -> Self {
        match err {
            ExtractionError::CompletionError(e) => ProviderError::Request(e.to_string()),
            other => ProviderError::MalformedReply(other.to_string()),
        }
    }
}

/// Two-turn prompt: system preamble plus the user content
#[derive(Debug, Clone, Copy)]
pub struct PromptRequest<'a> {
    pub model: &'a str,
    pub preamble: &'a str,
    pub content: &'a str,
}

/// Model provider used by the classifier
#[async_trait]
pub trait VerdictProvider: Send + Sync {
    /// Ask for a verdict constrained to the `ExtractedVerdict` schema
    async fn extract_verdict(
        &self,
        request: PromptRequest<'_>,
    ) -> Result<ExtractedVerdict, ProviderError>;

    /// Ask for a free-text answer
    async fn complete(&self, request: PromptRequest<'_>) -> Result<String, ProviderError>;
}

/// Shared LLM client wrapper
#[derive(Clone)]
pub struct LlmClient {
    client: openai::Client,
}

impl LlmClient {
    /// Create a new LLM client with the provided API key
    pub fn new(api_key: &str) -> Self {
        Self {
            client: openai::Client::new(api_key),
        }
    }
}

#[async_trait]
impl VerdictProvider for LlmClient {
    async fn extract_verdict(
        &self,
        request: PromptRequest<'_>,
    ) -> Result<ExtractedVerdict, ProviderError> {
        let extractor = self
            .client
            .extractor::<ExtractedVerdict>(request.model)
            .preamble(request.preamble)
            .build();

        Ok(extractor.extract(request.content).await?)
    }

    async fn complete(&self, request: PromptRequest<'_>) -> Result<String, ProviderError> {
        let agent = self
            .client
            .agent(request.model)
            .preamble(request.preamble)
            .build();

        agent
            .prompt(request.content)
            .await
            .map_err(|e| ProviderError::Request(e.to_string()))
    }
}
