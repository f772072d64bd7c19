mod categories;
mod questions;
mod quizzes;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quiz_router;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use axum::Json;

use super::error::ApiError;

pub(crate) type ApiResponse<T> = Result<Json<T>, ApiError>;

/// The `?page=N` query parameter shared by the question listings.
pub(crate) struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Non-numeric values fall back to the first page; numeric values keep
    /// their 1-based meaning, so zero and negatives land out of range.
    pub fn page(&self) -> usize {
        match self.page.as_deref() {
            None => 1,
            Some(raw) => match raw.parse::<i64>() {
                Ok(n) if n >= 1 => n as usize,
                Ok(_) => 0,
                Err(_) => 1,
            },
        }
    }
}

impl<S> FromRequestParts<S> for PageQuery
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(%rejection, "rejecting malformed query string");
                ApiError::BadRequest
            })?;
        // repeated keys are served, the first value wins
        let page = pairs
            .into_iter()
            .find(|(key, _)| key == "page")
            .map(|(_, value)| value);
        Ok(PageQuery { page })
    }
}

/// Path ids are plain digit strings; anything else never names a resource,
/// ids too large for the id column included.
pub(crate) fn parse_path_id(raw: &str) -> Result<i64, ApiError> {
    if !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::NotFound);
    }
    raw.parse().map_err(|_| ApiError::NotFound)
}
