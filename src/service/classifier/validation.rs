//! Consistency checks for LLM-extracted verdicts
//!
//! These never reject a verdict. Hard failures (score out of range, empty
//! rationale) are handled during decoding.

use crate::model::ExtractedVerdict;
use crate::service::classifier::converters::LEGITIMATE_BAND_MAX;

/// Word limit the prompt asks the model to respect for the rationale
const MAX_RATIONALE_WORDS: usize = 500;

/// Result of verdict validation
#[derive(Debug, Default)]
pub struct VerdictValidationResult {
    /// Warnings that indicate potential quality issues
    pub warnings: Vec<String>,
}

impl VerdictValidationResult {
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Validate an extracted verdict for internal consistency
///
/// Checks:
/// 1. `is_phishing` agrees with the score band (0-5 legitimate, 6-10 phishing)
/// 2. The rationale stays within the requested word limit
/// 3. A brief reason is present
pub fn validate_verdict(verdict: &ExtractedVerdict) -> VerdictValidationResult {
    let mut result = VerdictValidationResult::default();

    let score_says_phishing = verdict.phishing_score > LEGITIMATE_BAND_MAX;
    if verdict.is_phishing.is_phishing() != score_says_phishing {
        result.add_warning(format!(
            "is_phishing={} disagrees with phishing_score {}",
            verdict.is_phishing.is_phishing(),
            verdict.phishing_score
        ));
    }

    let word_count = verdict.rationale.split_whitespace().count();
    if word_count > MAX_RATIONALE_WORDS {
        result.add_warning(format!(
            "Rationale has {} words, limit is {}",
            word_count, MAX_RATIONALE_WORDS
        ));
    }

    if verdict.brief_reason.trim().is_empty() {
        result.add_warning("Verdict has no brief_reason".to_string());
    }

    result
}
