use std::path::Path;
use serde::{Deserialize, Serialize};
use url::Url;
use crate::{Error, Result};

const DEFAULT_FEEDS: &[(&str, &str)] = &[
    ("Hugging Face Blog", "https://huggingface.co/blog/feed.xml"),
];

const DEFAULT_LABELS: &[&str] = &[
    "AI",
    "Technology",
    "Health",
    "Business",
    "Sports",
    "Entertainment",
    "Politics",
];

/// Telegram rejects messages longer than this
pub const TELEGRAM_MESSAGE_LIMIT: usize = 4096;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedSource {
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Feeds to poll each cycle
    pub feeds: Vec<FeedSource>,
    /// Candidate topic labels handed to the classifier
    pub labels: Vec<String>,
    /// UTC wall-clock hour of the scheduled daily digest
    pub digest_hour: u32,
    /// UTC wall-clock minute of the scheduled daily digest
    pub digest_minute: u32,
    /// Trailing recency window: entries older than this are ignored
    pub window_hours: i64,
    /// Cap on new items taken from a single feed per cycle
    pub max_per_feed: usize,
    /// Upper bound on a single outgoing message
    pub message_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            feeds: DEFAULT_FEEDS
                .iter()
                .map(|(name, url)| FeedSource {
                    name: name.to_string(),
                    url: url.to_string(),
                })
                .collect(),
            labels: DEFAULT_LABELS.iter().map(|l| l.to_string()).collect(),
            digest_hour: 10,
            digest_minute: 0,
            window_hours: 24,
            max_per_feed: 5,
            message_limit: TELEGRAM_MESSAGE_LIMIT,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file. A missing path or missing file
    /// falls back to the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        if !path.exists() {
            tracing::warn!("Config file {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&raw)
            .map_err(|e| Error::Config(format!("Failed to parse {}: {}", path.display(), e)))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.feeds.is_empty() {
            return Err(Error::Config("At least one feed is required".to_string()));
        }
        for feed in &self.feeds {
            Url::parse(&feed.url)
                .map_err(|e| Error::Config(format!("Invalid feed URL {}: {}", feed.url, e)))?;
        }
        if self.labels.is_empty() {
            return Err(Error::Config("At least one topic label is required".to_string()));
        }
        if self.digest_hour > 23 || self.digest_minute > 59 {
            return Err(Error::Config(format!(
                "Invalid schedule time {:02}:{:02}",
                self.digest_hour, self.digest_minute
            )));
        }
        if self.message_limit == 0 {
            return Err(Error::Config("message_limit must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.digest_hour, 10);
        assert_eq!(config.labels.len(), 7);
        assert_eq!(config.feeds[0].url, "https://huggingface.co/blog/feed.xml");
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let config = Config::load(Some(Path::new("/nonexistent/fd.toml"))).unwrap();
        assert_eq!(config.max_per_feed, Config::default().max_per_feed);
    }

    #[test]
    fn test_parse_toml() {
        let raw = r#"
            labels = ["Rust", "AI"]
            window_hours = 48

            [[feeds]]
            name = "Example"
            url = "https://example.com/feed.xml"
        "#;
        let config: Config = toml::from_str(raw).unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.feeds.len(), 1);
        assert_eq!(config.labels, vec!["Rust", "AI"]);
        assert_eq!(config.window_hours, 48);
        // Unspecified fields keep their defaults
        assert_eq!(config.digest_hour, 10);
    }

    #[test]
    fn test_rejects_invalid_feed_url() {
        let mut config = Config::default();
        config.feeds[0].url = "not a url".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_labels() {
        let mut config = Config::default();
        config.labels.clear();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_invalid_schedule() {
        let mut config = Config::default();
        config.digest_hour = 24;
        assert!(config.validate().is_err());
    }
}
