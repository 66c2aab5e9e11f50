use std::time::Duration;

use reqwest::Client;

mod source;

pub use source::{HttpLaunchSource, LaunchSource};

/// Shared HTTP client with the app's user agent and request timeout.
pub fn default_http_client() -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(launchlens_config::USER_AGENT)
        .timeout(Duration::from_secs(launchlens_config::HTTP_TIMEOUT_SECS))
        .build()
}

#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub base_url: String,
    /// Client-side request budget. `None` disables throttling.
    pub requests_per_minute: Option<u32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: launchlens_config::DEFAULT_API_BASE_URL.to_string(),
            requests_per_minute: None,
        }
    }
}

impl SourceConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("API request failed with status {status}")]
    Status { status: u16 },
    #[error("response body did not match the launch schema: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid base url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceErrorKind {
    Transport,
    NotFound,
    Parse,
    Config,
}

impl SourceError {
    pub fn kind(&self) -> SourceErrorKind {
        match self {
            SourceError::Request(_) => SourceErrorKind::Transport,
            SourceError::Status { status: 404 } => SourceErrorKind::NotFound,
            SourceError::Status { .. } => SourceErrorKind::Transport,
            SourceError::Parse(_) => SourceErrorKind::Parse,
            SourceError::InvalidUrl { .. } => SourceErrorKind::Config,
        }
    }
}
