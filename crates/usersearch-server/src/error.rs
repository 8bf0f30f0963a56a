//! HTTP mapping for request failures.
//!
//! Handlers return [`ApiError`]; this is the only place that picks a status
//! code and decides what a failure body looks like.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use usersearch_core::codec;
use usersearch_core::SearchError;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("bad access token")]
    Unauthorized,
    #[error(transparent)]
    BadRequest(#[from] SearchError),
    /// The query string itself could not be decoded.
    #[error("{0}")]
    MalformedQuery(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::BadRequest(_) | ApiError::MalformedQuery(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::BadRequest(_) | ApiError::MalformedQuery(_) => (
                self.status(),
                [(header::CONTENT_TYPE, "application/json")],
                codec::encode_error(&self),
            )
                .into_response(),
            // Credential and internal failures carry no body.
            ApiError::Unauthorized | ApiError::Internal(_) => self.status().into_response(),
        }
    }
}
