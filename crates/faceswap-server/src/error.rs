//! HTTP mapping of relay errors.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use faceswap_core::{Error, RelayResponse};

/// Relay error rendered as a `{success:false, error, details?}` envelope.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = RelayResponse::failure(self.0.to_string(), self.0.details().map(str::to_string));
        (status, Json(body)).into_response()
    }
}
