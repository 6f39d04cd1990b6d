//! Config editor page: raw JSON in a textarea, validated before saving.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use serde_json::Value;
use tracing::error;

use super::layout::{escape_html, render_layout};
use crate::ui::state::UiState;

pub const INVALID_JSON: &str = "Invalid JSON format";
pub const SAVED_NOTICE: &str = "Config saved successfully!";

#[derive(Deserialize)]
pub struct SaveConfigForm {
    pub config: String,
}

#[derive(Debug, PartialEq)]
pub enum EditorStatus {
    Loaded,
    Saved,
    Invalid(String),
}

/// GET / — load the config text and show it raw
pub async fn config_editor_page(State(state): State<UiState>) -> Html<String> {
    let text = match state.gateway.read_config().await {
        Ok(text) => text,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Error fetching config");
            String::new()
        }
    };
    Html(render_config_editor(&text, &EditorStatus::Loaded))
}

/// POST /config — parse locally, then hand the parsed value to the gateway
pub async fn save_config(
    State(state): State<UiState>,
    Form(form): Form<SaveConfigForm>,
) -> Html<String> {
    let status = save_text(&state, &form.config).await;
    Html(render_config_editor(&form.config, &status))
}

async fn save_text(state: &UiState, text: &str) -> EditorStatus {
    let parsed: Value = match serde_json::from_str(text) {
        Ok(v) => v,
        Err(_) => return EditorStatus::Invalid(INVALID_JSON.to_string()),
    };

    match state.gateway.write_config(&parsed).await {
        Ok(()) => EditorStatus::Saved,
        Err(e) => {
            // not shown to the user
            error!(error = %format!("{e:#}"), "Error saving config");
            EditorStatus::Loaded
        }
    }
}

pub fn render_config_editor(text: &str, status: &EditorStatus) -> String {
    let notice = match status {
        EditorStatus::Saved => format!(
            r#"<div class="alert alert-success" role="alert">{}</div>"#,
            SAVED_NOTICE
        ),
        _ => String::new(),
    };
    let error = match status {
        EditorStatus::Invalid(message) => {
            format!(r#"<p class="text-danger">{}</p>"#, escape_html(message))
        }
        _ => String::new(),
    };

    let body = format!(
        r#"        <h1 class="mb-3">Edit Configuration</h1>
        {}
        <form method="POST" action="/config">
            <textarea name="config" class="form-control mb-3" rows="10">{}</textarea>
            {}
            <button type="submit" class="btn btn-primary">Save Config</button>
        </form>"#,
        notice,
        escape_html(text),
        error
    );
    render_layout("Edit Configuration", &body)
}
