use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::api::nbrb::NbrbError;

/// Failures surfaced by the services
///
/// Every error propagates untouched to the HTTP boundary, where the
/// `IntoResponse` impl below maps it to a status code and a `{title, detail}`
/// body. Nothing is retried and nothing falls back to a default value.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    NotFound(String),
    #[error("a stored currency rate is missing or not positive")]
    InvalidRate,
    #[error(transparent)]
    Upstream(#[from] NbrbError),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// JSON body rendered for every error response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub title: String,
    pub detail: String,
}

impl ServiceError {
    fn status_and_title(&self) -> (StatusCode, &'static str) {
        match self {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, "Validation error"),
            ServiceError::NotFound(_) => (StatusCode::NOT_FOUND, "Not found"),
            ServiceError::InvalidRate => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            ServiceError::Upstream(NbrbError::Client { .. }) => {
                (StatusCode::BAD_REQUEST, "Upstream API error")
            }
            ServiceError::Upstream(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Upstream API error")
            }
            ServiceError::Database(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, title) = self.status_and_title();
        error!("{}: {}", title, self);

        let body = ErrorBody {
            title: title.to_string(),
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
