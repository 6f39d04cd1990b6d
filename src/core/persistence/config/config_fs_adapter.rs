use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use super::config_fs_adapter_trait::ConfigFsAdapterTrait;

/// FS adapter for the single JSON config document.
///
/// Each write fills its own temp file next to the target and renames it
/// into place, so readers see either the old or the new document.
pub struct ConfigFsAdapter {
    path: PathBuf,
}

impl ConfigFsAdapter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parent_dir(&self) -> &Path {
        self.path
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
    }
}

impl ConfigFsAdapterTrait for ConfigFsAdapter {
    fn read_raw(&self) -> Result<String> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read config file {}", self.path.display()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    fn replace(&self, contents: &str) -> Result<()> {
        let dir = self.parent_dir();
        fs::create_dir_all(dir).context("Failed to create config directory")?;

        // removed on drop if anything below fails
        let mut tmp = NamedTempFile::new_in(dir).context("Failed to create temp config file")?;
        tmp.write_all(contents.as_bytes())
            .context("Failed to write temp config file")?;
        tmp.flush()?;
        tmp.as_file()
            .sync_all()
            .context("Failed to sync temp config file")?;
        tmp.persist(&self.path)
            .map_err(|e| e.error)
            .context("Failed to finalize config file")?;

        Ok(())
    }
}
