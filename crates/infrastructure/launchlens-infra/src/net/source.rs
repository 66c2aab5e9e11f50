use std::num::NonZeroU32;
use std::sync::Arc;

use governor::clock::DefaultClock;
use governor::middleware::NoOpMiddleware;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use launchlens_core::{Launch, LaunchPage};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::{SourceConfig, SourceError};

type DirectLimiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock, NoOpMiddleware>;

/// Read-only access to the remote launch catalogue.
///
/// Every call is one fresh request; implementations do not retry or cache.
#[async_trait::async_trait]
pub trait LaunchSource: Send + Sync {
    async fn list_upcoming(&self, limit: u32, offset: u32) -> Result<LaunchPage, SourceError>;
    async fn get_by_id(&self, id: &str) -> Result<Launch, SourceError>;
    /// Server-side keyword search over upcoming launches. `query` must be non-empty.
    async fn search(&self, query: &str, limit: u32) -> Result<LaunchPage, SourceError>;
}

/// Launch Library 2 client over plain HTTP GETs in `mode=detailed`.
pub struct HttpLaunchSource {
    client: Client,
    base: Url,
    limiter: Option<Arc<DirectLimiter>>,
}

/// Parse the configured base URL and force a trailing slash so relative
/// joins stay under its path (`https://host/2.2.0` + `launch/` must not drop `2.2.0`).
fn normalize_base(base_url: &str) -> Result<Url, SourceError> {
    let mut url = Url::parse(base_url).map_err(|e| SourceError::InvalidUrl {
        url: base_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(SourceError::InvalidUrl {
            url: base_url.to_string(),
            reason: "not a hierarchical url".into(),
        });
    }
    if !url.path().ends_with('/') {
        url.set_path(&format!("{}/", url.path()));
    }
    Ok(url)
}

impl HttpLaunchSource {
    pub fn new(client: Client, config: &SourceConfig) -> Result<Self, SourceError> {
        let base = normalize_base(&config.base_url)?;
        let limiter = config
            .requests_per_minute
            .and_then(NonZeroU32::new)
            .map(|nz| Arc::new(RateLimiter::direct(Quota::per_minute(nz))));
        Ok(Self {
            client,
            base,
            limiter,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, SourceError> {
        let mut url = self.base.clone();
        {
            let mut segs = url.path_segments_mut().map_err(|_| SourceError::InvalidUrl {
                url: self.base.to_string(),
                reason: "cannot mutate url segments".into(),
            })?;
            segs.pop_if_empty();
            segs.extend(segments);
            // API paths end with a slash; without it the server answers with a redirect.
            segs.push("");
        }
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<T, SourceError> {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }

        debug!("GET {} {:?}", url, query);
        let resp = self.client.get(url.clone()).query(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            warn!("{} answered with status {}", url, status);
            return Err(SourceError::Status {
                status: status.as_u16(),
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("{} returned an unparseable body: {}", url, e);
            SourceError::Parse(e)
        })
    }
}

#[async_trait::async_trait]
impl LaunchSource for HttpLaunchSource {
    async fn list_upcoming(&self, limit: u32, offset: u32) -> Result<LaunchPage, SourceError> {
        let url = self.endpoint(&["launch", "upcoming"])?;
        self.get_json(
            url,
            &[
                ("limit", limit.to_string()),
                ("offset", offset.to_string()),
                ("mode", "detailed".to_string()),
            ],
        )
        .await
    }

    async fn get_by_id(&self, id: &str) -> Result<Launch, SourceError> {
        let url = self.endpoint(&["launch", id])?;
        self.get_json(url, &[("mode", "detailed".to_string())]).await
    }

    async fn search(&self, query: &str, limit: u32) -> Result<LaunchPage, SourceError> {
        let url = self.endpoint(&["launch", "upcoming"])?;
        self.get_json(
            url,
            &[
                ("search", query.to_string()),
                ("limit", limit.to_string()),
                ("mode", "detailed".to_string()),
            ],
        )
        .await
    }
}
