use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::loader::LoadError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    /// The data document could not be loaded. `page` is the skeleton with the
    /// blocking failure notice and nothing else changed.
    #[error("Resume data unavailable: {source}")]
    ResumeUnavailable {
        #[source]
        source: LoadError,
        page: String,
    },

    #[error("Page template error: {0}")]
    Template(#[from] std::io::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::ResumeUnavailable { source, page } => {
                tracing::error!("Serving failure notice: {source}");
                (StatusCode::BAD_GATEWAY, Html(page)).into_response()
            }
            AppError::Template(e) => {
                tracing::error!("Page template error: {e}");
                let body = Json(json!({
                    "error": {
                        "code": "TEMPLATE_ERROR",
                        "message": "The page template could not be read"
                    }
                }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
