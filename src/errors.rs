use axum::{http::StatusCode, response::IntoResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Any failed filesystem call, whatever the cause.
    #[error("{0}")]
    Filesystem(String),

    #[error("Invalid log name: {0}")]
    InvalidLogName(String),
}

/// Helper for mapping a domain error into a filesystem error,
/// keeping the whole context chain in the message.
pub fn internal_error(err: anyhow::Error) -> AppError {
    AppError::Filesystem(format!("{err:#}"))
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            AppError::Filesystem(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidLogName(_) => StatusCode::BAD_REQUEST,
        };

        // Plain text body carrying the underlying message
        (status, self.to_string()).into_response()
    }
}
