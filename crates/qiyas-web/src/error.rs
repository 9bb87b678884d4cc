//! Page-level error response.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use qiyas_common::QiyasError;

/// Raised when a page cannot be produced at all, e.g. a template fails to
/// render. Relay and backend failures never get here; they are shown
/// inside the page.
#[derive(Debug)]
pub struct PageError(pub QiyasError);

impl From<QiyasError> for PageError {
    fn from(e: QiyasError) -> Self {
        Self(e)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!("Page rendering failed: {}", self.0);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html("<!DOCTYPE html><p>The page could not be rendered.</p>".to_string()),
        )
            .into_response()
    }
}
