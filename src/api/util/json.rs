use anyhow::Result;
use axum::Json;
use tracing::warn;

use crate::domain::logs::log_name::InvalidLogName;
use crate::errors::{internal_error, AppError};

/// Map a domain error onto the HTTP error taxonomy.
pub fn map_error(err: anyhow::Error) -> AppError {
    let app_err = match err.downcast_ref::<InvalidLogName>() {
        Some(InvalidLogName(name)) => AppError::InvalidLogName(name.clone()),
        None => internal_error(err),
    };
    warn!(error = %app_err, "Request failed");
    app_err
}

pub fn to_json<T: serde::Serialize>(result: Result<T>) -> Result<Json<T>, AppError> {
    result.map(Json).map_err(map_error)
}

pub fn to_text(result: Result<String>) -> Result<String, AppError> {
    result.map_err(map_error)
}
