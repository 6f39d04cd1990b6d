use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde_json::Value;

use crate::ui::client::GatewayApi;

/// In-memory gateway recording every write it receives.
#[derive(Default)]
pub struct MockGateway {
    pub logs: Vec<String>,
    pub contents: HashMap<String, String>,
    pub config: Option<String>,
    pub fail_writes: bool,
    pub writes: Mutex<Vec<Value>>,
}

#[async_trait]
impl GatewayApi for MockGateway {
    async fn list_logs(&self) -> Result<Vec<String>> {
        Ok(self.logs.clone())
    }

    async fn read_log(&self, name: &str) -> Result<String> {
        self.contents
            .get(name)
            .cloned()
            .ok_or_else(|| anyhow!("Gateway returned 500: no such log {name}"))
    }

    async fn read_config(&self) -> Result<String> {
        self.config
            .clone()
            .ok_or_else(|| anyhow!("Gateway returned 500: no config"))
    }

    async fn write_config(&self, config: &Value) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("Gateway returned 500: disk full"));
        }
        self.writes.lock().unwrap().push(config.clone());
        Ok(())
    }
}
