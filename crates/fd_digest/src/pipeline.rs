use std::sync::Arc;
use fd_core::{Article, Result, SeenStore, TopicClassifier};
use fd_feeds::FeedCollector;
use crate::chunk::chunk_message;
use crate::format::render_digest;

/// One delivery cycle's worth of output.
pub struct Digest {
    pub articles: Vec<Article>,
    pub chunks: Vec<String>,
}

impl Digest {
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

/// Runs the pipeline: collect new articles, classify each, render, chunk.
/// Building never touches the seen store; callers `commit` after the digest
/// was actually delivered, so a failed delivery is retried next cycle.
pub struct DigestService {
    collector: Arc<dyn FeedCollector>,
    classifier: Arc<dyn TopicClassifier>,
    store: Arc<dyn SeenStore>,
    labels: Vec<String>,
    message_limit: usize,
}

impl DigestService {
    pub fn new(
        collector: Arc<dyn FeedCollector>,
        classifier: Arc<dyn TopicClassifier>,
        store: Arc<dyn SeenStore>,
        labels: Vec<String>,
        message_limit: usize,
    ) -> Self {
        Self {
            collector,
            classifier,
            store,
            labels,
            message_limit,
        }
    }

    pub async fn build(&self) -> Result<Digest> {
        let mut articles = self.collector.collect_new(self.store.as_ref()).await?;

        for article in &mut articles {
            tracing::info!("🤖 Classifying topic for article: {}", article.title);
            match self
                .classifier
                .classify(article.classification_text(), &self.labels)
                .await
            {
                Ok(topic) => {
                    tracing::info!("✨ Predicted topic: {}", topic);
                    article.topic = Some(topic);
                }
                // An unlabeled article still makes the digest
                Err(e) => {
                    tracing::warn!("Classification failed for {}: {}", article.link, e);
                }
            }
        }

        let chunks = match render_digest(&articles) {
            Some(text) => chunk_message(&text, self.message_limit),
            None => Vec::new(),
        };

        Ok(Digest { articles, chunks })
    }

    /// Record delivered links so the next cycle skips them.
    pub async fn commit(&self, articles: &[Article]) -> Result<()> {
        let links: Vec<String> = articles.iter().map(|a| a.link.clone()).collect();
        self.store.insert(&links).await
    }
}
