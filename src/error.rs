//! Error types for the employee service
//!
//! Service-layer and HTTP-layer errors, built with thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;
use crate::store::StoreError;

// == Service Error ==
/// Failures raised by the cache-aside layer.
///
/// There is no typed "not found": an update of a missing employee is a plain
/// runtime failure, same as any other.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// Store backend failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Generic runtime failure
    #[error("{0}")]
    Runtime(String),
}

/// Convenience Result type for the service layer.
pub type Result<T> = std::result::Result<T, ServiceError>;

// == API Error ==
/// Errors returned by HTTP handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Employee lookup by id found nothing
    #[error("Not found")]
    NotFound,

    /// Anything the service raised; not translated further
    #[error(transparent)]
    Service(#[from] ServiceError),
}

/// Result type for HTTP handlers.
pub type ApiResult<T> = std::result::Result<T, ApiError>;

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Service(err) => {
                tracing::error!(error = %err, "request failed");
                let body = Json(ErrorResponse::new(err.to_string()));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
