//! Error types for fyyur-web
//!
//! Store and view-model failures are caught here and turned into pages.
//! Causes are logged; the user only ever sees the generic 404 or 500 page.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use crate::pages;

/// Handler error type
#[derive(Debug, Error)]
pub enum WebError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),

    /// fyyur-common error
    #[error(transparent)]
    Common(#[from] fyyur_common::Error),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        match self {
            WebError::NotFound(what) | WebError::Common(fyyur_common::Error::NotFound(what)) => {
                warn!("Not found: {}", what);
                (StatusCode::NOT_FOUND, Html(pages::errors::not_found())).into_response()
            }
            other => {
                error!("Request failed: {}", other);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::errors::server_error())).into_response()
            }
        }
    }
}

/// Result type for handlers
pub type WebResult<T> = Result<T, WebError>;

/// Status for a rejected write that is reported inline with a flash message
pub fn write_failure_status(err: &fyyur_common::Error) -> StatusCode {
    use fyyur_common::Error;
    match err {
        Error::NotFound(_) => StatusCode::NOT_FOUND,
        Error::InvalidInput(_) | Error::ForeignKeyViolation(_) => StatusCode::BAD_REQUEST,
        Error::PersistenceConflict(_) => StatusCode::CONFLICT,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Parse an id from the URL path; anything but an integer is a 404
pub fn path_id(raw: &str) -> WebResult<i64> {
    raw.parse()
        .map_err(|_| WebError::NotFound(format!("invalid id {:?}", raw)))
}
