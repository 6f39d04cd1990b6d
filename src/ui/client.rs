//! HTTP client the Editor UI uses to reach the File Gateway.

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

/// The four gateway operations, as seen from the UI.
#[async_trait]
pub trait GatewayApi: Send + Sync {
    async fn list_logs(&self) -> Result<Vec<String>>;

    async fn read_log(&self, name: &str) -> Result<String>;

    /// Raw config text, already decoded from the gateway's JSON string.
    async fn read_config(&self) -> Result<String>;

    async fn write_config(&self, config: &Value) -> Result<()>;
}

pub struct GatewayClient {
    http: Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Turn non-2xx answers into errors carrying the gateway's message.
    async fn check(resp: Response) -> Result<Response> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(anyhow!("Gateway returned {status}: {body}"))
    }
}

#[async_trait]
impl GatewayApi for GatewayClient {
    async fn list_logs(&self) -> Result<Vec<String>> {
        let resp = self
            .http
            .get(self.url("/api/logs"))
            .send()
            .await
            .context("Error fetching logs")?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn read_log(&self, name: &str) -> Result<String> {
        let path = format!("/api/logs/{}", urlencoding::encode(name));
        let resp = self
            .http
            .get(self.url(&path))
            .send()
            .await
            .context("Error fetching log content")?;
        Ok(Self::check(resp).await?.text().await?)
    }

    async fn read_config(&self) -> Result<String> {
        let resp = self
            .http
            .get(self.url("/api/config"))
            .send()
            .await
            .context("Error fetching config")?;
        let body: Value = Self::check(resp).await?.json().await?;
        Ok(match body {
            Value::String(raw) => raw,
            other => other.to_string(),
        })
    }

    async fn write_config(&self, config: &Value) -> Result<()> {
        let resp = self
            .http
            .post(self.url("/api/config"))
            .json(config)
            .send()
            .await
            .context("Error saving config")?;
        Self::check(resp).await?;
        Ok(())
    }
}
