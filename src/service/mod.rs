pub mod classifier;
pub mod llm;

pub use classifier::{ClassificationError, ClassifierService};
pub use llm::LlmClient;
