pub mod config;
pub mod verdict;

pub use config::{ClassificationMode, ClassifierConfig, Config};
pub use verdict::{ClassificationRequest, ClassificationResult, ExtractedVerdict};
