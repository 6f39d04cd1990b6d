use anyhow::Result;

/// Raw filesystem access to the logs directory.
pub trait LogFsAdapterTrait: Send + Sync {
    /// Entry names of the directory, in enumeration order.
    fn list_entries(&self) -> Result<Vec<String>>;

    fn read_text(&self, name: &str) -> Result<String>;
}
