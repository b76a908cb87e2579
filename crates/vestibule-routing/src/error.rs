use crate::Locator;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use thiserror::Error;
use vestibule_error::NOT_FOUND_BODY;

#[derive(Debug, Error)]
pub enum RoutingError {
    #[error("method {0:?} is not allowed")]
    MethodNotAllowed(String),

    #[error("no handler registered for {0}")]
    NotFound(Locator),
}

// Unsupported methods answer 404 as well, not 405
impl IntoResponse for RoutingError {
    fn into_response(self) -> Response {
        debug!(error = %self, "routing failed");
        (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
    }
}
