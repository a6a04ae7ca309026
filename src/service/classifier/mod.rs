//! Email classification service using LLM
//!
//! Turns raw email text into a fraud verdict by delegating the judgment to the model.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::model::{ClassificationMode, ClassificationResult, ClassifierConfig};
use crate::service::classifier::converters::{decode_keyword_reply, decode_verdict};
use crate::service::classifier::prompts::{KEYWORD_FRAUD_PROMPT, PHISHING_ANALYST_PROMPT};
use crate::service::classifier::validation::validate_verdict;
use crate::service::llm::{PromptRequest, ProviderError, VerdictProvider};

pub mod converters;
pub mod error;
pub mod prompts;
pub mod validation;

pub use error::ClassificationError;

/// Service for classifying emails as phishing or legitimate
pub struct ClassifierService {
    provider: Arc<dyn VerdictProvider>,
    config: ClassifierConfig,
}

impl ClassifierService {
    /// Creates a new classifier service around a shared provider
    pub fn new(provider: Arc<dyn VerdictProvider>, config: ClassifierConfig) -> Self {
        tracing::info!(
            model = %config.model,
            mode = %config.mode,
            timeout_secs = config.timeout_secs,
            "Email classifier service initialized"
        );

        if config.mode == ClassificationMode::Keyword {
            tracing::warn!("Keyword classification mode is a legacy fallback, prefer structured");
        }

        Self { provider, config }
    }

    /// Classify an email
    pub async fn classify(
        &self,
        email_content: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        if email_content.trim().is_empty() {
            return Err(ClassificationError::InvalidInput(
                "emailContent is empty".to_string(),
            ));
        }

        match self.config.mode {
            ClassificationMode::Structured => self.classify_structured(email_content).await,
            ClassificationMode::Keyword => self.classify_keyword(email_content).await,
        }
    }

    async fn classify_structured(
        &self,
        email_content: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        let request = self.prompt_request(PHISHING_ANALYST_PROMPT, email_content);
        let verdict = self
            .timed("structured", self.provider.extract_verdict(request))
            .await?;

        let validation = validate_verdict(&verdict);
        if !validation.is_clean() {
            for warning in &validation.warnings {
                tracing::warn!(warning = %warning, "Verdict consistency warning");
            }
        }

        let result = decode_verdict(verdict)?;

        tracing::debug!(
            fraud_detected = result.fraud_detected,
            phishing_score = ?result.phishing_score,
            "Decoded structured verdict"
        );

        Ok(result)
    }

    async fn classify_keyword(
        &self,
        email_content: &str,
    ) -> Result<ClassificationResult, ClassificationError> {
        let request = self.prompt_request(KEYWORD_FRAUD_PROMPT, email_content);
        let reply = self.timed("keyword", self.provider.complete(request)).await?;

        let result = decode_keyword_reply(reply)?;

        if result.fraud_detected == 1 {
            tracing::info!("Potential fraud detected");
        } else {
            tracing::info!("No fraud detected");
        }

        Ok(result)
    }

    fn prompt_request<'a>(&'a self, preamble: &'a str, content: &'a str) -> PromptRequest<'a> {
        PromptRequest {
            model: &self.config.model,
            preamble,
            content,
        }
    }

    /// Run a provider call under the configured timeout, logging its outcome
    async fn timed<T>(
        &self,
        mode: &'static str,
        call: impl Future<Output = Result<T, ProviderError>>,
    ) -> Result<T, ClassificationError> {
        let start_time = Instant::now();
        let timeout = Duration::from_secs(self.config.timeout_secs);

        let outcome = match tokio::time::timeout(timeout, call).await {
            Ok(result) => result.map_err(ClassificationError::from),
            Err(_) => Err(ClassificationError::ProviderFailure(format!(
                "timed out after {}s",
                self.config.timeout_secs
            ))),
        };

        let elapsed = start_time.elapsed();
        match &outcome {
            Ok(_) => tracing::info!(
                model = %self.config.model,
                mode = mode,
                elapsed_ms = elapsed.as_millis(),
                "OpenAI API call for email classification completed successfully"
            ),
            Err(e) => tracing::error!(
                model = %self.config.model,
                mode = mode,
                elapsed_ms = elapsed.as_millis(),
                error = %e,
                "OpenAI API call for email classification failed"
            ),
        }

        outcome
    }
}
