use std::sync::Arc;
use fd_core::{Error, Result, TopicClassifier};
use crate::Config;

pub mod huggingface;
pub mod keyword;

pub use huggingface::HuggingFaceClassifier;
pub use keyword::KeywordClassifier;

/// Build a classifier from a CLI-style model name.
pub fn create_classifier(model: &str, config: Config) -> Result<Arc<dyn TopicClassifier>> {
    match model {
        "huggingface" => Ok(Arc::new(HuggingFaceClassifier::new(config)?)),
        "keyword" => Ok(Arc::new(KeywordClassifier::new())),
        other => Err(Error::Classification(format!("Unknown classifier: {}", other))),
    }
}
