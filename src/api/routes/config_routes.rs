//! Config routes (/api/config)

use axum::{routing::get, Router};

use crate::api::controller::config::ConfigController;
use crate::app_state::AppState;

pub fn config_routes() -> Router<AppState> {
    Router::new().route(
        "/config",
        get(ConfigController::get_config).post(ConfigController::save_config),
    )
}
