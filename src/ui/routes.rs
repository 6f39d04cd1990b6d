use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::ui::pages::{config_editor, log_viewer};
use crate::ui::state::UiState;

pub fn ui_router(state: UiState) -> Router {
    Router::new()
        .route("/", get(config_editor::config_editor_page))
        .route("/config", post(config_editor::save_config))
        .route("/logs", get(log_viewer::log_viewer_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
