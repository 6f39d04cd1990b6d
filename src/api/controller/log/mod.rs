//! Log controller: connects routes to the log service

use axum::extract::{Path, State};
use axum::Json;

use crate::api::util::json::{to_json, to_text};
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct LogController;

impl LogController {
    pub async fn list_logs(
        State(state): State<AppState>,
    ) -> Result<Json<Vec<String>>, AppError> {
        to_json(state.log_service.list_logs().await)
    }

    pub async fn read_log(
        State(state): State<AppState>,
        Path(log): Path<String>,
    ) -> Result<String, AppError> {
        to_text(state.log_service.read_log(&log).await)
    }
}
