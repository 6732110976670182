use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait TopicClassifier: Send + Sync {
    /// Name of the backing model
    fn name(&self) -> &str;

    /// Pick the best-fitting label for the given text out of the candidates
    async fn classify(&self, text: &str, labels: &[String]) -> Result<String>;
}
