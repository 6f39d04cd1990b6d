//! Process configuration, read from the environment (and `.env` via dotenvy).

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_LOGS_DIR: &str = "logs";
pub const DEFAULT_CONFIG_FILE: &str = "config.json";
pub const DEFAULT_GATEWAY_ADDR: &str = "0.0.0.0:4000";
pub const DEFAULT_UI_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_GATEWAY_URL: &str = "http://127.0.0.1:4000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub logs_dir: PathBuf,
    pub config_file: PathBuf,
    pub gateway_addr: SocketAddr,
    pub ui_addr: SocketAddr,
    pub cors_origin: String,
    pub gateway_url: String,
    /// When set, the process also writes its own daily `.txt` log here.
    pub self_log_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let gateway_addr = get("LOGDESK_GATEWAY_ADDR", DEFAULT_GATEWAY_ADDR);
        let ui_addr = get("LOGDESK_UI_ADDR", DEFAULT_UI_ADDR);

        Ok(Self {
            logs_dir: PathBuf::from(get("LOGDESK_LOGS_DIR", DEFAULT_LOGS_DIR)),
            config_file: PathBuf::from(get("LOGDESK_CONFIG_FILE", DEFAULT_CONFIG_FILE)),
            gateway_addr: gateway_addr
                .parse()
                .with_context(|| format!("Invalid LOGDESK_GATEWAY_ADDR: {gateway_addr}"))?,
            ui_addr: ui_addr
                .parse()
                .with_context(|| format!("Invalid LOGDESK_UI_ADDR: {ui_addr}"))?,
            cors_origin: get("LOGDESK_CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            gateway_url: get("LOGDESK_GATEWAY_URL", DEFAULT_GATEWAY_URL)
                .trim_end_matches('/')
                .to_string(),
            self_log_dir: lookup("LOGDESK_SELF_LOG_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
