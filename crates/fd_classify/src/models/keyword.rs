use std::fmt;
use async_trait::async_trait;
use fd_core::{Error, Result, TopicClassifier};

/// Offline fallback: scores each label by how often its words occur in the
/// text. Ties and zero hits resolve to the first candidate.
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for KeywordClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeywordClassifier").finish()
    }
}

#[async_trait]
impl TopicClassifier for KeywordClassifier {
    fn name(&self) -> &str {
        "Keyword"
    }

    async fn classify(&self, text: &str, labels: &[String]) -> Result<String> {
        if labels.is_empty() {
            return Err(Error::Classification("No candidate labels".to_string()));
        }

        let haystack = text.to_lowercase();
        let mut best_score = 0;
        let mut best_index = 0;

        for (i, label) in labels.iter().enumerate() {
            let score: usize = label
                .to_lowercase()
                .split_whitespace()
                .map(|word| haystack.matches(word).count())
                .sum();
            if score > best_score {
                best_score = score;
                best_index = i;
            }
        }

        Ok(labels[best_index].clone())
    }
}
