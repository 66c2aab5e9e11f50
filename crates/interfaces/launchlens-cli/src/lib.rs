pub mod commands;

use std::sync::Arc;

use anyhow::{Context, Result};
use camino::Utf8PathBuf;
use launchlens_infra::{HttpLaunchSource, SourceConfig};
use launchlens_persistence::{FavoritesStore, RedbKeyValueStore};

/// Everything a subcommand needs to reach the API and the favorites file.
#[derive(Debug, Clone)]
pub struct CliEnv {
    pub base_url: String,
    /// Overrides the platform data directory.
    pub data_dir: Option<Utf8PathBuf>,
    pub requests_per_minute: Option<u32>,
}

impl Default for CliEnv {
    fn default() -> Self {
        Self {
            base_url: launchlens_config::DEFAULT_API_BASE_URL.to_string(),
            data_dir: None,
            requests_per_minute: None,
        }
    }
}

impl CliEnv {
    pub fn source(&self) -> Result<Arc<HttpLaunchSource>> {
        let client = launchlens_infra::default_http_client()
            .context("Failed to build HTTP client")?;
        let config = SourceConfig {
            base_url: self.base_url.clone(),
            requests_per_minute: self.requests_per_minute,
        };
        let source = HttpLaunchSource::new(client, &config)
            .with_context(|| format!("Invalid API base URL: {}", self.base_url))?;
        Ok(Arc::new(source))
    }

    pub fn favorites(&self) -> Result<FavoritesStore<RedbKeyValueStore>> {
        let backend = match &self.data_dir {
            Some(dir) => RedbKeyValueStore::new(dir.clone()),
            None => RedbKeyValueStore::open_default().context("No usable data directory")?,
        };
        Ok(FavoritesStore::new(Arc::new(backend)))
    }
}
