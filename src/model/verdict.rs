//! Request, LLM verdict and response models for email classification

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /detect-fraud`
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct ClassificationRequest {
    /// Raw email text, headers included when available
    #[serde(rename = "emailContent")]
    pub email_content: String,
}

/// Verdict flag as requested from the model ("true" / "false")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum PhishingFlag {
    #[serde(rename = "true")]
    True,
    #[serde(rename = "false")]
    False,
}

impl PhishingFlag {
    pub fn is_phishing(self) -> bool {
        matches!(self, PhishingFlag::True)
    }
}

/// LLM-extractable verdict structure
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct ExtractedVerdict {
    /// Whether the email is phishing ("true") or legitimate ("false")
    pub is_phishing: PhishingFlag,
    /// Phishing risk confidence score as an integer from 0 to 10.
    /// 0 to 5 means legitimate, 6 to 10 means phishing
    #[schemars(range(min = 0, max = 10))]
    pub phishing_score: u8,
    /// Brand the email claims to come from, if any
    pub brand_impersonated: Option<String>,
    /// Detailed rationale for the determination, up to 500 words
    pub rationale: String,
    /// Brief reason for the determination
    pub brief_reason: String,
}

/// Classification returned to API callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct ClassificationResult {
    /// 1 when the email was judged fraudulent, 0 otherwise
    #[serde(rename = "fraudDetected")]
    pub fraud_detected: u8,
    /// Score in 0..=10; null when the keyword mode produced the verdict
    pub phishing_score: Option<u8>,
    /// Model rationale (raw model reply in keyword mode)
    pub result_rationale: String,
}
