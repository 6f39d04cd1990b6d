use std::path::PathBuf;

use super::config_api_repository_trait::ConfigApiRepository;
use super::config_fs_adapter::ConfigFsAdapter;
use super::config_fs_adapter_trait::ConfigFsAdapterTrait;

pub struct ConfigRepository {
    adapter: ConfigFsAdapter,
}

impl ConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            adapter: ConfigFsAdapter::new(path),
        }
    }
}

impl ConfigApiRepository for ConfigRepository {
    fn fs_adapter(&self) -> &dyn ConfigFsAdapterTrait {
        &self.adapter
    }
}
