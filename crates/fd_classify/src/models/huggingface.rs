use std::fmt;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use fd_core::{Error, Result, TopicClassifier};
use crate::Config;

const DEFAULT_MODEL: &str = "facebook/bart-large-mnli";

/// Cap on the text submitted to the hosted endpoint
const MAX_INPUT_CHARS: usize = 512;

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
    parameters: ClassifyParameters<'a>,
}

#[derive(Serialize)]
struct ClassifyParameters<'a> {
    candidate_labels: &'a [String],
}

/// Labels come back ranked best first, scores aligned by index.
#[derive(Deserialize)]
struct ClassifyResponse {
    labels: Vec<String>,
    #[allow(dead_code)]
    scores: Vec<f32>,
}

/// Zero-shot classification against the Hugging Face Inference API.
pub struct HuggingFaceClassifier {
    client: Client,
    api_token: Option<String>,
    base_url: String,
    model: String,
}

impl HuggingFaceClassifier {
    pub fn new(config: Config) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_token: config.api_token,
            base_url: "https://api-inference.huggingface.co/models".to_string(),
            model: config.model_name.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        })
    }
}

impl fmt::Debug for HuggingFaceClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HuggingFaceClassifier")
            .field("api_token", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl TopicClassifier for HuggingFaceClassifier {
    fn name(&self) -> &str {
        "HuggingFace"
    }

    async fn classify(&self, text: &str, labels: &[String]) -> Result<String> {
        if labels.is_empty() {
            return Err(Error::Classification("No candidate labels".to_string()));
        }

        let input = truncate_chars(text, MAX_INPUT_CHARS);
        let request = ClassifyRequest {
            inputs: input,
            parameters: ClassifyParameters {
                candidate_labels: labels,
            },
        };

        let mut builder = self
            .client
            .post(format!("{}/{}", self.base_url, self.model))
            .json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.header("Authorization", format!("Bearer {}", token));
        }

        let response = builder.send().await?;
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Classification(format!(
                "{} returned {}: {}",
                self.model, status, body
            )));
        }

        let ranked = response.json::<ClassifyResponse>().await?;
        ranked
            .labels
            .into_iter()
            .next()
            .ok_or_else(|| Error::Classification("Empty label ranking in response".to_string()))
    }
}

fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
