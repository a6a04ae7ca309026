//! Error types for email classification

use thiserror::Error;

use crate::service::llm::ProviderError;

/// Error type for email classification
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ClassificationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("LLM provider failure: {0}")]
    ProviderFailure(String),

    #[error("Failed to decode LLM verdict: {0}")]
    DecodeFailure(String),
}

impl From<ProviderError> for ClassificationError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Request(msg) => ClassificationError::ProviderFailure(msg),
            ProviderError::MalformedReply(msg) => ClassificationError::DecodeFailure(msg),
        }
    }
}
