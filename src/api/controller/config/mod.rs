//! Config controller: connects routes to the config service

use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::api::util::json::{map_error, to_json};
use crate::app_state::AppState;
use crate::errors::AppError;

pub const CONFIG_SAVED: &str = "Config saved";

pub struct ConfigController;

impl ConfigController {
    /// The raw file text, encoded as a JSON string literal.
    pub async fn get_config(
        State(state): State<AppState>,
    ) -> Result<Json<String>, AppError> {
        to_json(state.config_service.read_config().await)
    }

    pub async fn save_config(
        State(state): State<AppState>,
        Json(payload): Json<Value>,
    ) -> Result<&'static str, AppError> {
        state
            .config_service
            .write_config(&payload)
            .await
            .map_err(map_error)?;
        Ok(CONFIG_SAVED)
    }
}
