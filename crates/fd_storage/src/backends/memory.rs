use std::collections::HashSet;
use async_trait::async_trait;
use tokio::sync::RwLock;
use fd_core::{Result, SeenStore};

/// Non-persistent store, used in tests and dry runs.
#[derive(Debug, Default)]
pub struct MemorySeenStore {
    links: RwLock<HashSet<String>>,
}

impl MemorySeenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SeenStore for MemorySeenStore {
    async fn contains(&self, link: &str) -> Result<bool> {
        Ok(self.links.read().await.contains(link))
    }

    async fn insert(&self, links: &[String]) -> Result<()> {
        let mut set = self.links.write().await;
        for link in links {
            set.insert(link.clone());
        }
        Ok(())
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.links.read().await.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_store() {
        let store = MemorySeenStore::new();
        assert!(!store.contains("http://test.com/a").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 0);

        store
            .insert(&["http://test.com/a".to_string(), "http://test.com/b".to_string()])
            .await
            .unwrap();

        assert!(store.contains("http://test.com/a").await.unwrap());
        assert!(store.contains("http://test.com/b").await.unwrap());
        assert!(!store.contains("http://test.com/c").await.unwrap());
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_is_idempotent() {
        let store = MemorySeenStore::new();
        let links = vec!["http://test.com/a".to_string()];
        store.insert(&links).await.unwrap();
        store.insert(&links).await.unwrap();
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
