use anyhow::Result;

/// Raw filesystem access to the config document.
pub trait ConfigFsAdapterTrait: Send + Sync {
    fn read_raw(&self) -> Result<String>;

    /// Replace the whole file with `contents`.
    fn replace(&self, contents: &str) -> Result<()>;
}
