use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub link: String,
    pub summary: Option<String>,
    pub published_at: DateTime<Utc>,
    pub source: String,
    pub topic: Option<String>,
}

impl Article {
    /// Text submitted to the topic classifier: the summary when present,
    /// the title otherwise.
    pub fn classification_text(&self) -> &str {
        self.summary.as_deref().unwrap_or(&self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(summary: Option<&str>) -> Article {
        Article {
            title: "Test Article".to_string(),
            link: "http://test.com/a".to_string(),
            summary: summary.map(|s| s.to_string()),
            published_at: Utc::now(),
            source: "test".to_string(),
            topic: None,
        }
    }

    #[test]
    fn test_classification_text_prefers_summary() {
        assert_eq!(
            article(Some("A longer summary")).classification_text(),
            "A longer summary"
        );
    }

    #[test]
    fn test_classification_text_falls_back_to_title() {
        assert_eq!(article(None).classification_text(), "Test Article");
    }
}
