use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::log_fs_adapter_trait::LogFsAdapterTrait;

/// FS adapter over a directory of externally produced log files.
///
/// Read-only: nothing here creates, rotates or deletes files.
pub struct LogFsAdapter {
    dir: PathBuf,
}

impl LogFsAdapter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl LogFsAdapterTrait for LogFsAdapter {
    fn list_entries(&self) -> Result<Vec<String>> {
        let entries = fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read logs directory {}", self.dir.display()))?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.context("Failed to read logs directory entry")?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        Ok(names)
    }

    fn read_text(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        let bytes =
            fs::read(&path).with_context(|| format!("Failed to read log {}", path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}
