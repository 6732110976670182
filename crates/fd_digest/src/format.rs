use fd_core::Article;

/// One digest block per article. The topic line is omitted when
/// classification failed.
pub fn render_article(article: &Article) -> String {
    match &article.topic {
        Some(topic) => format!(
            "Title: {}\nTopic: {}\nRead more: {}\n",
            article.title, topic, article.link
        ),
        None => format!("Title: {}\nRead more: {}\n", article.title, article.link),
    }
}

/// The full digest text, blocks separated by a blank line. None when there
/// is nothing to report.
pub fn render_digest(articles: &[Article]) -> Option<String> {
    if articles.is_empty() {
        return None;
    }
    Some(
        articles
            .iter()
            .map(render_article)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
