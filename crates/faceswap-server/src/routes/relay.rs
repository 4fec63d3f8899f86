//! The relay handler: `POST /` with `{image_url, gif_url}`.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::State;
use axum::http::{Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::{Json, Router};
use faceswap_core::config::API_KEY_VAR;
use faceswap_core::data_uri::{self, RESULT_MIME};
use faceswap_core::{Error, RelayRequest, RelayResponse, Result, SwapParams, VendorFailure};
use tracing::{debug, error, info, info_span, Instrument};
use uuid::Uuid;

use crate::error::ApiError;
use crate::state::AppState;

/// Upper bound on a request body. Photos arrive inline as data URIs.
pub const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", any(relay))
        .route("/faceswap-segmind", any(relay))
}

async fn relay(State(state): State<Arc<AppState>>, method: Method, body: Body) -> Response {
    if method == Method::OPTIONS {
        return (StatusCode::OK, "ok").into_response();
    }

    let span = info_span!("relay", request_id = %Uuid::new_v4());
    match handle(&state, &method, body).instrument(span).await {
        Ok(response) => (StatusCode::OK, Json(response)).into_response(),
        Err(e) => {
            if !matches!(e, Error::Validation(_) | Error::MethodNotAllowed) {
                error!("Relay request failed: {}", e);
            }
            ApiError(e).into_response()
        }
    }
}

async fn handle(state: &AppState, method: &Method, body: Body) -> Result<RelayResponse> {
    if method != Method::POST {
        return Err(Error::MethodNotAllowed);
    }

    let bytes = axum::body::to_bytes(body, MAX_BODY_BYTES)
        .await
        .map_err(|e| Error::Transport(format!("Failed to read request body: {}", e)))?;
    let request: RelayRequest = serde_json::from_slice(&bytes)?;

    info!("Relay received request");
    debug!(
        "Image URL: {}",
        request.image_url.as_deref().map(preview).unwrap_or_else(|| "null".into())
    );
    debug!("GIF URL: {}", request.gif_url.as_deref().unwrap_or("null"));

    if request.is_probe() {
        info!("Connectivity probe answered");
        return Ok(RelayResponse::online());
    }

    let (image_url, gif_url) = request
        .urls()
        .ok_or_else(|| Error::Validation("Both image_url and gif_url are required".into()))?;

    let api_key = state.config.api_key().ok_or_else(|| {
        Error::Config(format!("{} not configured in relay environment", API_KEY_VAR))
    })?;

    info!("Calling Segmind API");
    let reply = state
        .vendor
        .face_swap(api_key, SwapParams::new(image_url, gif_url))
        .await?;
    info!("Segmind response status: {}", reply.status);

    if !reply.is_success() {
        let details = String::from_utf8_lossy(&reply.body).into_owned();
        error!("Segmind API error {}: {}", reply.status, details);
        return Err(VendorFailure::from_status(reply.status).into_error(reply.status, details));
    }

    let image = data_uri::encode(RESULT_MIME, &reply.body);
    info!("Face swap completed, result size {} characters", image.len());

    Ok(RelayResponse::swapped(image, chrono::Utc::now().timestamp_millis()))
}

/// First 50 characters of a possibly huge data URI, for logs.
fn preview(s: &str) -> String {
    let mut out: String = s.chars().take(50).collect();
    if out.len() < s.len() {
        out.push_str("...");
    }
    out
}
