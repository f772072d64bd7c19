use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Failure taxonomy of the API. Variants stay distinguishable internally;
/// the wire contract collapses everything except bad requests and unmatched
/// routes into 422.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request")]
    BadRequest,
    #[error("not found")]
    NotFound,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("category {0} does not exist")]
    UnknownCategory(i64),
    #[error("question {0} does not exist")]
    UnknownQuestion(i64),
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: u16,
    message: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest => (StatusCode::BAD_REQUEST, "bad request"),
            ApiError::NotFound => (StatusCode::NOT_FOUND, "not found"),
            ApiError::MissingField(_)
            | ApiError::UnknownCategory(_)
            | ApiError::UnknownQuestion(_)
            | ApiError::Database(_) => (StatusCode::UNPROCESSABLE_ENTITY, "unprocessable"),
        };
        match &self {
            ApiError::Database(cause) => tracing::error!(%cause, "query failed"),
            ApiError::BadRequest | ApiError::NotFound => {}
            rejected => tracing::warn!(%rejected, "rejecting request"),
        }
        let body = ErrorBody {
            success: false,
            error: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}
