use std::path::PathBuf;

use super::log_fs_adapter::LogFsAdapter;
use super::log_fs_adapter_trait::LogFsAdapterTrait;

/// API-facing repository abstraction for log files.
pub trait LogRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait;

    fn get_entries(&self) -> anyhow::Result<Vec<String>> {
        self.fs_adapter().list_entries()
    }

    fn get_log(&self, name: &str) -> anyhow::Result<String> {
        self.fs_adapter().read_text(name)
    }
}

pub struct LogRepositoryImpl {
    adapter: LogFsAdapter,
}

impl LogRepositoryImpl {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            adapter: LogFsAdapter::new(dir),
        }
    }
}

impl LogRepository for LogRepositoryImpl {
    fn fs_adapter(&self) -> &dyn LogFsAdapterTrait {
        &self.adapter
    }
}
