//! HTTP handlers

mod health;
mod line;
mod shabad;

pub use health::health;
pub use line::get_line;
pub use shabad::get_shabad;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Handler-facing error: collaborator failures map onto status codes here,
/// never inside the assembly core
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl From<gurbani_common::Error> for ApiError {
    fn from(err: gurbani_common::Error) -> Self {
        match err {
            gurbani_common::Error::NotFound(what) => ApiError::NotFound(what),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(what) => (StatusCode::NOT_FOUND, format!("Not found: {}", what)),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
