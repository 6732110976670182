use async_trait::async_trait;
use crate::Result;

#[async_trait]
pub trait SeenStore: Send + Sync {
    /// Whether a link was already delivered
    async fn contains(&self, link: &str) -> Result<bool>;

    /// Record links as delivered
    async fn insert(&self, links: &[String]) -> Result<()>;

    /// Number of links on record
    async fn count(&self) -> Result<usize>;
}
