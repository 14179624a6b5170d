use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

/// Shown before the first headline arrives.
pub const INITIAL_HEADLINE: &str = "Welcome to Steak Inc. Start clicking to build your empire!";

/// Shown when no API key is configured.
pub const OFFLINE_HEADLINE: &str = "Steak Inc. stocks remain stable despite lack of AI oversight.";

/// Shown when a provider call fails for any other reason.
pub const FAILURE_HEADLINE: &str = "Breaking: Local cow jumps over the moon, astronomers baffled.";

#[derive(Debug, Error)]
pub enum HeadlineError {
    #[error("headline API key missing")]
    MissingApiKey,

    #[error("headline request timed out after {0:?}")]
    Timeout(Duration),

    #[error("headline service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("headline service returned no text")]
    EmptyResponse,

    #[error(transparent)]
    Transport(#[from] anyhow::Error),
}

impl HeadlineError {
    /// Canned headline to show in place of a failed request.
    pub fn fallback_headline(&self) -> &'static str {
        match self {
            Self::MissingApiKey => OFFLINE_HEADLINE,
            _ => FAILURE_HEADLINE,
        }
    }
}

/// Source of news headlines.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    /// Produces one headline for the given ranch summary.
    async fn headline(&self, summary: &str) -> Result<String, HeadlineError>;
}

/// Provider that cycles through a fixed list. Used offline and in tests.
#[derive(Debug, Clone)]
pub struct StaticHeadlineProvider {
    headlines: Vec<String>,
    next: std::sync::Arc<std::sync::atomic::AtomicUsize>,
}

impl StaticHeadlineProvider {
    pub fn new<I, S>(headlines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headlines: headlines.into_iter().map(Into::into).collect(),
            next: Default::default(),
        }
    }
}

#[async_trait]
impl HeadlineProvider for StaticHeadlineProvider {
    async fn headline(&self, _summary: &str) -> Result<String, HeadlineError> {
        if self.headlines.is_empty() {
            return Err(HeadlineError::EmptyResponse);
        }
        let index = self
            .next
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        Ok(self.headlines[index % self.headlines.len()].clone())
    }
}
