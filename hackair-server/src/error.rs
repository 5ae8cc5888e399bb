use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hackair::HackairError;

use crate::protocol::ErrorBody;

/// Failure of a dashboard request, rendered as `{"error": ...}`.
#[derive(Debug)]
pub enum ApiError {
    /// The query itself failed.
    Hackair(HackairError),
    /// The request body was not a valid query.
    Body(JsonRejection),
}

impl From<HackairError> for ApiError {
    fn from(e: HackairError) -> Self {
        Self::Hackair(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(e: JsonRejection) -> Self {
        Self::Body(e)
    }
}

/// HTTP status for a query error.
///
/// Bad input maps to 400, an expired request deadline to 504, and anything
/// coming back from the remote side to 502.
#[must_use]
pub fn status_for(e: &HackairError) -> StatusCode {
    if e.is_client_error() {
        StatusCode::BAD_REQUEST
    } else if matches!(e, HackairError::RequestTimeout { .. }) {
        StatusCode::GATEWAY_TIMEOUT
    } else {
        StatusCode::BAD_GATEWAY
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            Self::Hackair(e) => (status_for(&e), e.to_string()),
            Self::Body(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
        };
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %error, "query failed");
        } else {
            tracing::warn!(status = status.as_u16(), %error, "query rejected");
        }
        (status, Json(ErrorBody { error })).into_response()
    }
}
