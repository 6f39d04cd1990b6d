//! Log routes (/api/logs, /api/logs/{log})

use axum::{routing::get, Router};

use crate::api::controller::log::LogController;
use crate::app_state::AppState;

pub fn log_routes() -> Router<AppState> {
    Router::new()
        .route("/logs", get(LogController::list_logs))
        .route("/logs/{log}", get(LogController::read_log))
}
