use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use fd_core::{Article, Config, FeedSource, Result, SeenStore};
use crate::fetcher::FeedFetcher;

/// The fetch stage of the pipeline. Implementations must return only
/// articles whose links the store has not seen.
#[async_trait]
pub trait FeedCollector: Send + Sync {
    async fn collect_new(&self, seen: &dyn SeenStore) -> Result<Vec<Article>>;
}

/// Polls every configured feed and applies the recency window, the
/// seen-link exclusion and the per-feed cap.
pub struct FeedManager {
    fetcher: FeedFetcher,
    sources: Vec<FeedSource>,
    window: Duration,
    max_per_feed: usize,
}

impl FeedManager {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            fetcher: FeedFetcher::new()?,
            sources: config.feeds.clone(),
            window: Duration::hours(config.window_hours),
            max_per_feed: config.max_per_feed,
        })
    }

    pub fn sources(&self) -> &[FeedSource] {
        &self.sources
    }

    /// Keep articles inside the window and unknown to the store, up to the
    /// per-feed cap. Expects input newest first, as the fetcher returns it.
    async fn select_new(
        &self,
        articles: Vec<Article>,
        cutoff: DateTime<Utc>,
        seen: &dyn SeenStore,
    ) -> Result<Vec<Article>> {
        let mut kept = Vec::new();
        for article in articles {
            if article.published_at < cutoff {
                continue;
            }
            if seen.contains(&article.link).await? {
                continue;
            }
            kept.push(article);
            if kept.len() >= self.max_per_feed {
                break;
            }
        }
        Ok(kept)
    }
}

#[async_trait]
impl FeedCollector for FeedManager {
    async fn collect_new(&self, seen: &dyn SeenStore) -> Result<Vec<Article>> {
        let cutoff = Utc::now() - self.window;
        let mut fresh = Vec::new();

        for source in &self.sources {
            let articles = match self.fetcher.fetch(source).await {
                Ok(articles) => articles,
                Err(e) => {
                    tracing::warn!("Skipping feed {}: {}", source.name, e);
                    continue;
                }
            };

            let mut new = self.select_new(articles, cutoff, seen).await?;
            tracing::info!("📰 {}: {} new article(s)", source.name, new.len());
            fresh.append(&mut new);
        }

        Ok(fresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fd_storage::MemorySeenStore;

    fn manager() -> FeedManager {
        let mut config = Config::default();
        config.max_per_feed = 2;
        FeedManager::new(&config).unwrap()
    }

    fn article(link: &str, age_hours: i64) -> Article {
        Article {
            title: format!("Article {}", link),
            link: link.to_string(),
            summary: None,
            published_at: Utc::now() - Duration::hours(age_hours),
            source: "test".to_string(),
            topic: None,
        }
    }

    fn cutoff() -> DateTime<Utc> {
        Utc::now() - Duration::hours(24)
    }

    #[tokio::test]
    async fn test_select_new_applies_window() {
        let seen = MemorySeenStore::new();
        let articles = vec![article("http://t/recent", 1), article("http://t/stale", 48)];

        let kept = manager().select_new(articles, cutoff(), &seen).await.unwrap();
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].link, "http://t/recent");
    }

    #[tokio::test]
    async fn test_select_new_excludes_seen_links() {
        let seen = MemorySeenStore::new();
        seen.insert(&["http://t/old-news".to_string()]).await.unwrap();

        let articles = vec![article("http://t/old-news", 1), article("http://t/fresh", 2)];
        let kept = manager().select_new(articles, cutoff(), &seen).await.unwrap();

        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].link, "http://t/fresh");
    }

    #[tokio::test]
    async fn test_select_new_caps_per_feed() {
        let seen = MemorySeenStore::new();
        let articles = vec![
            article("http://t/1", 1),
            article("http://t/2", 2),
            article("http://t/3", 3),
        ];

        let kept = manager().select_new(articles, cutoff(), &seen).await.unwrap();
        assert_eq!(kept.len(), 2);
        // Newest-first order preserved under the cap
        assert_eq!(kept[0].link, "http://t/1");
        assert_eq!(kept[1].link, "http://t/2");
    }

    #[tokio::test]
    async fn test_second_pass_is_empty_after_marking_seen() {
        let seen = MemorySeenStore::new();
        let articles = vec![article("http://t/a", 1), article("http://t/b", 2)];

        let m = manager();
        let first = m.select_new(articles.clone(), cutoff(), &seen).await.unwrap();
        assert_eq!(first.len(), 2);

        let links: Vec<String> = first.iter().map(|a| a.link.clone()).collect();
        seen.insert(&links).await.unwrap();

        let second = m.select_new(articles, cutoff(), &seen).await.unwrap();
        assert!(second.is_empty());
    }
}
