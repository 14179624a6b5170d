//! Gemini `generateContent` REST client.

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::provider::{HeadlineError, HeadlineProvider};

const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Headline provider backed by the Gemini HTTP API.
pub struct GeminiHeadlineProvider {
    /// Base URL up to and excluding `/models`
    endpoint: String,

    model: String,

    /// `None` short-circuits every call with [`HeadlineError::MissingApiKey`]
    api_key: Option<String>,

    http_client: reqwest::Client,
}

impl GeminiHeadlineProvider {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            http_client: reqwest::Client::new(),
        }
    }

    /// Reads the key from `API_KEY`.
    pub fn from_env() -> Self {
        Self::new(std::env::var("API_KEY").ok())
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }
}

fn prompt(summary: &str) -> String {
    format!(
        "You are a satirical news ticker for a game called \"Steak Inc.\" where the player \
         runs a massive industrial cow farm.\n\
         \n\
         Current Game State Context: {summary}\n\
         \n\
         Generate ONE short, funny, satirical news headline (max 10 words) about the steak \
         industry, cows, or the economy.\n\
         Examples:\n\
         - \"Cows demand union representation, farmer offers extra hay.\"\n\
         - \"Steak prices soar as vegetarians convert en masse.\"\n\
         - \"Scientists discover 5th stomach dedicated to profit.\"\n\
         \n\
         Output ONLY the headline text."
    )
}

#[async_trait]
impl HeadlineProvider for GeminiHeadlineProvider {
    async fn headline(&self, summary: &str) -> Result<String, HeadlineError> {
        let api_key = self.api_key.as_deref().ok_or(HeadlineError::MissingApiKey)?;

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt(summary),
                }],
            }],
        };

        tracing::debug!(model = %self.model, "Requesting headline");

        let response = self
            .http_client
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .context("Failed to send headline request")?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(HeadlineError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response
            .text()
            .await
            .context("Failed to read headline response body")?;

        parse_headline(&response_text)
    }
}

fn parse_headline(body: &str) -> Result<String, HeadlineError> {
    let parsed: GenerateContentResponse = serde_json::from_str(body)
        .with_context(|| format!("Failed to parse headline response. Raw response: {}", body))?;

    let text: String = parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| content.parts.into_iter().map(|part| part.text).collect())
        .unwrap_or_default();

    let headline = text.trim();
    if headline.is_empty() {
        return Err(HeadlineError::EmptyResponse);
    }
    Ok(headline.to_string())
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
