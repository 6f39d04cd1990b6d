//! Log viewer page: list of logs, selected log shown verbatim.

use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;
use tracing::error;

use super::layout::{escape_html, render_layout};
use crate::ui::state::UiState;

#[derive(Deserialize, Debug, Default)]
pub struct LogViewQuery {
    pub view: Option<String>,
}

#[derive(Debug, PartialEq)]
pub enum LogViewerState {
    List(Vec<String>),
    Viewing {
        names: Vec<String>,
        name: String,
        content: String,
    },
}

/// GET /logs[?view=name]
pub async fn log_viewer_page(
    State(state): State<UiState>,
    Query(query): Query<LogViewQuery>,
) -> Html<String> {
    let view = load_view(&state, query.view).await;
    Html(render_log_viewer(&view))
}

async fn load_view(state: &UiState, selected: Option<String>) -> LogViewerState {
    let names = match state.gateway.list_logs().await {
        Ok(names) => names,
        Err(e) => {
            error!(error = %format!("{e:#}"), "Error fetching logs");
            Vec::new()
        }
    };

    let Some(name) = selected else {
        return LogViewerState::List(names);
    };

    match state.gateway.read_log(&name).await {
        Ok(content) => LogViewerState::Viewing {
            names,
            name,
            content,
        },
        Err(e) => {
            error!(error = %format!("{e:#}"), log = %name, "Error fetching log content");
            LogViewerState::List(names)
        }
    }
}

pub fn render_log_viewer(view: &LogViewerState) -> String {
    let (names, selected, content) = match view {
        LogViewerState::List(names) => (names, None, ""),
        LogViewerState::Viewing {
            names,
            name,
            content,
        } => (names, Some(name.as_str()), content.as_str()),
    };

    let items: String = names
        .iter()
        .map(|log| {
            let (class, aria) = if selected == Some(log.as_str()) {
                (" active", r#" aria-current="true""#)
            } else {
                ("", "")
            };
            format!(
                r#"            <li class="list-group-item d-flex justify-content-between align-items-center{}"{}>
                {}
                <a class="btn btn-secondary btn-sm" href="/logs?view={}">View Log</a>
            </li>
"#,
                class,
                aria,
                escape_html(log),
                urlencoding::encode(log)
            )
        })
        .collect();

    let body = format!(
        r#"        <h1 class="mb-3">Log Viewer</h1>
        <ul class="list-group mb-3">
{}        </ul>
        <pre class="bg-light p-3 border rounded">{}</pre>"#,
        items,
        escape_html(content)
    );
    render_layout("Log Viewer", &body)
}
