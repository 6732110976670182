use std::time::Duration;
use chrono::Utc;
use feed_rs::parser;
use scraper::Html;
use fd_core::{Article, Error, FeedSource, Result};

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads and parses a single feed.
pub struct FeedFetcher {
    client: reqwest::Client,
}

impl FeedFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("fd/", env!("CARGO_PKG_VERSION")))
            .timeout(FETCH_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    pub async fn fetch(&self, source: &FeedSource) -> Result<Vec<Article>> {
        let resp = self.client.get(&source.url).send().await?;
        if !resp.status().is_success() {
            return Err(Error::Feed(format!("{}: HTTP {}", source.url, resp.status())));
        }
        let bytes = resp.bytes().await?;
        parse_feed(&bytes, source)
    }
}

/// Map parsed entries to articles, newest first. Entries without a link
/// carry nothing we could deliver or deduplicate, so they are dropped.
pub fn parse_feed(bytes: &[u8], source: &FeedSource) -> Result<Vec<Article>> {
    let parsed = parser::parse(bytes)
        .map_err(|e| Error::Feed(format!("{}: {}", source.url, e)))?;

    let mut articles = Vec::new();
    for entry in parsed.entries {
        let Some(link) = entry.links.first().map(|l| l.href.clone()) else {
            tracing::debug!("Skipping entry without link in {}", source.name);
            continue;
        };

        let title = entry
            .title
            .as_ref()
            .map(|t| t.content.clone())
            .unwrap_or_else(|| "(no title)".to_string());

        let summary = entry
            .summary
            .as_ref()
            .map(|s| strip_html(&s.content))
            .filter(|s| !s.is_empty());

        // An entry without any timestamp is treated as just published;
        // the seen store keeps it from being delivered twice.
        let published_at = entry.published.or(entry.updated).unwrap_or_else(Utc::now);

        articles.push(Article {
            title,
            link,
            summary,
            published_at,
            source: source.name.clone(),
            topic: None,
        });
    }

    articles.sort_by(|a, b| b.published_at.cmp(&a.published_at));
    Ok(articles)
}

/// Flatten an HTML fragment to its text content. Feed summaries are
/// frequently HTML even when the feed declares them as plain text.
pub fn strip_html(fragment: &str) -> String {
    let document = Html::parse_fragment(fragment);
    document
        .root_element()
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn source() -> FeedSource {
        FeedSource {
            name: "Test Feed".to_string(),
            url: "https://example.com/feed.xml".to_string(),
        }
    }

    const RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
        <rss version="2.0"><channel>
            <title>Test Feed</title>
            <item>
                <title>Older entry</title>
                <link>https://example.com/older</link>
                <description>&lt;p&gt;An &lt;b&gt;HTML&lt;/b&gt; summary.&lt;/p&gt;</description>
                <pubDate>Mon, 03 Aug 2026 08:00:00 GMT</pubDate>
            </item>
            <item>
                <title>Newer entry</title>
                <link>https://example.com/newer</link>
                <pubDate>Tue, 04 Aug 2026 09:30:00 GMT</pubDate>
            </item>
            <item>
                <title>No link here</title>
                <pubDate>Tue, 04 Aug 2026 10:00:00 GMT</pubDate>
            </item>
        </channel></rss>"#;

    #[test]
    fn test_parse_feed() {
        let articles = parse_feed(RSS.as_bytes(), &source()).unwrap();

        // Linkless entry dropped, remainder newest first
        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].title, "Newer entry");
        assert_eq!(articles[1].title, "Older entry");
        assert_eq!(articles[0].link, "https://example.com/newer");
        assert_eq!(articles[0].source, "Test Feed");
        assert!(articles[0].topic.is_none());
    }

    #[test]
    fn test_parse_feed_strips_html_summaries() {
        let articles = parse_feed(RSS.as_bytes(), &source()).unwrap();
        assert_eq!(articles[1].summary.as_deref(), Some("An HTML summary."));
        assert_eq!(articles[0].summary, None);
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed(b"definitely not xml", &source()).is_err());
    }

    #[test]
    fn test_strip_html() {
        assert_eq!(strip_html("<p>Hello <b>world</b></p>"), "Hello world");
        assert_eq!(strip_html("plain text"), "plain text");
        assert_eq!(strip_html("  spaced\n\nout  "), "spaced out");
    }
}
