use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::task;
use tracing::debug;

use crate::core::persistence::logs::log_repository::LogRepository;
use crate::domain::logs::log_name::{is_log_file, validate_log_name};

/// Log use cases. Filesystem calls run on the blocking pool.
pub struct LogService<R: LogRepository> {
    repo: Arc<R>,
}

impl<R: LogRepository + 'static> LogService<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(repo),
        }
    }

    /// Names of `.txt` entries, in directory order.
    pub async fn list_logs(&self) -> Result<Vec<String>> {
        let repo = Arc::clone(&self.repo);
        let entries = task::spawn_blocking(move || repo.get_entries())
            .await
            .context("Log listing task failed")??;

        let total = entries.len();
        let logs: Vec<String> = entries.into_iter().filter(|n| is_log_file(n)).collect();
        debug!(total, listed = logs.len(), "Listed logs directory");
        Ok(logs)
    }

    pub async fn read_log(&self, name: &str) -> Result<String> {
        validate_log_name(name)?;

        let repo = Arc::clone(&self.repo);
        let name = name.to_string();
        task::spawn_blocking(move || repo.get_log(&name))
            .await
            .context("Log read task failed")?
    }
}
