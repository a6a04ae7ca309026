//! Converters from model replies to API results

use crate::model::{ClassificationResult, ExtractedVerdict};
use crate::service::classifier::error::ClassificationError;

/// Highest score on the phishing scale
pub const MAX_PHISHING_SCORE: u8 = 10;

/// Scores above this value fall in the phishing band
pub const LEGITIMATE_BAND_MAX: u8 = 5;

const FRAUD_KEYWORD: &str = "fraud";

/// Convert an extracted verdict to the API result
///
/// `fraudDetected` follows `is_phishing`. The score is passed through unchanged
/// and must lie within 0..=10.
pub fn decode_verdict(verdict: ExtractedVerdict) -> Result<ClassificationResult, ClassificationError> {
    let score = verdict.phishing_score;
    if score > MAX_PHISHING_SCORE {
        return Err(ClassificationError::DecodeFailure(format!(
            "phishing_score {} outside 0..={}",
            score, MAX_PHISHING_SCORE
        )));
    }

    if verdict.rationale.trim().is_empty() {
        return Err(ClassificationError::DecodeFailure(
            "rationale is empty".to_string(),
        ));
    }

    Ok(ClassificationResult {
        fraud_detected: u8::from(verdict.is_phishing.is_phishing()),
        phishing_score: Some(score),
        result_rationale: verdict.rationale,
    })
}

/// Whether a free-text reply mentions fraud (case-insensitive)
pub fn detect_fraud_keyword(reply: &str) -> bool {
    reply.to_lowercase().contains(FRAUD_KEYWORD)
}

/// Convert a free-text reply to the API result
pub fn decode_keyword_reply(reply: String) -> Result<ClassificationResult, ClassificationError> {
    if reply.trim().is_empty() {
        return Err(ClassificationError::DecodeFailure(
            "empty reply from model".to_string(),
        ));
    }

    Ok(ClassificationResult {
        fraud_detected: u8::from(detect_fraud_keyword(&reply)),
        phishing_score: None,
        result_rationale: reply,
    })
}
