pub mod models;

pub use models::create_classifier;

/// Classifier construction options.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// API token for the hosted inference endpoint; anonymous when absent
    pub api_token: Option<String>,
    /// Model id override
    pub model_name: Option<String>,
}

pub mod prelude {
    pub use super::models::create_classifier;
    pub use super::Config;
    pub use fd_core::{Result, TopicClassifier};
}
