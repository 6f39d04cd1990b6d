use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;
use tokio::task;
use tracing::info;

use crate::core::persistence::config::config_api_repository_trait::ConfigApiRepository;

/// Config document use cases. Filesystem calls run on the blocking pool.
pub struct ConfigService<R: ConfigApiRepository> {
    repo: Arc<R>,
}

impl<R: ConfigApiRepository + 'static> ConfigService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Raw on-disk text, unparsed.
    pub async fn read_config(&self) -> Result<String> {
        let repo = Arc::clone(&self.repo);
        task::spawn_blocking(move || repo.read())
            .await
            .context("Config read task failed")?
    }

    /// Replace the document with `value`, pretty-printed with 2-space indent.
    pub async fn write_config(&self, value: &Value) -> Result<()> {
        let contents = serde_json::to_string_pretty(value).context("Failed to serialize config")?;
        let bytes = contents.len();

        let repo = Arc::clone(&self.repo);
        task::spawn_blocking(move || repo.update(&contents))
            .await
            .context("Config write task failed")??;

        info!(bytes, "Config document replaced");
        Ok(())
    }
}
