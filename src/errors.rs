use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// When set (non-production only), internal error text is returned to the
/// caller instead of a generic message.
static EXPOSE_DETAILS: AtomicBool = AtomicBool::new(false);

pub fn set_expose_details(expose: bool) {
    EXPOSE_DETAILS.store(expose, Ordering::Relaxed);
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg.clone()),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg.clone()),
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                let message = if EXPOSE_DETAILS.load(Ordering::Relaxed) {
                    e.to_string()
                } else {
                    "Internal server error".into()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, "internal", message)
            }
        };

        (status, Json(ErrorBody { error, message })).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Internal(e.into())
    }
}
