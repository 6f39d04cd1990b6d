use super::config_fs_adapter_trait::ConfigFsAdapterTrait;

/// API-facing repository abstraction for the config document.
pub trait ConfigApiRepository: Send + Sync {
    fn fs_adapter(&self) -> &dyn ConfigFsAdapterTrait;

    fn read(&self) -> anyhow::Result<String> {
        self.fs_adapter().read_raw()
    }

    fn update(&self, contents: &str) -> anyhow::Result<()> {
        self.fs_adapter().replace(contents)
    }
}
