//! Relay contract tests — drive the router in-process and check status
//! codes, envelopes and headers against vendor doubles.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::Router;
use faceswap_core::data_uri;
use faceswap_core::{Error, RelayConfig, Result, SwapParams};
use faceswap_server::{build_router, AppState, FaceSwapVendor, VendorReply};
use futures::future::BoxFuture;
use serde_json::Value;
use tower::ServiceExt;

/// Answers every call with a fixed reply and records what it was sent.
struct StubVendor {
    status: u16,
    body: Vec<u8>,
    calls: AtomicUsize,
    last: Mutex<Option<(String, SwapParams)>>,
}

impl StubVendor {
    fn new(status: u16, body: &[u8]) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_vec(),
            calls: AtomicUsize::new(0),
            last: Mutex::new(None),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl FaceSwapVendor for StubVendor {
    fn face_swap<'a>(
        &'a self,
        api_key: &'a str,
        params: SwapParams,
    ) -> BoxFuture<'a, Result<VendorReply>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last.lock().unwrap() = Some((api_key.to_string(), params));
        let reply = VendorReply {
            status: self.status,
            body: self.body.clone(),
        };
        Box::pin(async move { Ok(reply) })
    }
}

/// Fails the test if the relay reaches the vendor.
struct UnreachableVendor;

impl FaceSwapVendor for UnreachableVendor {
    fn face_swap<'a>(&'a self, _: &'a str, _: SwapParams) -> BoxFuture<'a, Result<VendorReply>> {
        panic!("vendor must not be called");
    }
}

struct BrokenTransport;

impl FaceSwapVendor for BrokenTransport {
    fn face_swap<'a>(&'a self, _: &'a str, _: SwapParams) -> BoxFuture<'a, Result<VendorReply>> {
        Box::pin(async { Err(Error::Transport("connection refused".into())) })
    }
}

fn app_with(vendor: Arc<dyn FaceSwapVendor>, api_key: Option<&str>) -> Router {
    let config = RelayConfig::new(api_key.map(str::to_string));
    build_router(Arc::new(AppState::with_vendor(config, vendor)))
}

async fn send(app: Router, method: Method, uri: &str, body: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, bytes.to_vec())
}

async fn post_json(app: Router, body: &str) -> (StatusCode, Value) {
    let (status, _, bytes) = send(app, Method::POST, "/", body).await;
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn swap_body() -> String {
    serde_json::json!({
        "image_url": "data:image/png;base64,iVBORw0KGgo=",
        "gif_url": "https://example.com/a.gif",
    })
    .to_string()
}

fn assert_cors(headers: &HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");
    assert_eq!(
        headers["access-control-allow-headers"],
        "authorization, x-client-info, apikey, content-type"
    );
    assert_eq!(headers["access-control-allow-methods"], "POST, OPTIONS");
}

#[tokio::test]
async fn test_options_preflight() {
    let app = app_with(Arc::new(UnreachableVendor), Some("key"));
    let (status, headers, _) = send(app, Method::OPTIONS, "/", "").await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
}

#[tokio::test]
async fn test_other_methods_rejected() {
    for method in [Method::GET, Method::PUT, Method::DELETE, Method::PATCH] {
        let app = app_with(Arc::new(UnreachableVendor), Some("key"));
        let (status, headers, bytes) = send(app, method, "/", "").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_cors(&headers);
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"success": false, "error": "Method not allowed"}));
    }
}

#[tokio::test]
async fn test_probe_short_circuits() {
    // No API key either: the probe must not depend on vendor configuration.
    let app = app_with(Arc::new(UnreachableVendor), None);
    let (status, body) = post_json(app, r#"{"image_url":"test","gif_url":"test"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["function_status"], "online");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_missing_fields_rejected() {
    let cases = [
        r#"{}"#,
        r#"{"image_url":"https://example.com/me.jpg"}"#,
        r#"{"gif_url":"https://example.com/a.gif"}"#,
        r#"{"image_url":"","gif_url":"https://example.com/a.gif"}"#,
        r#"{"image_url":"test"}"#,
        r#"{"image_url":null,"gif_url":"test"}"#,
    ];
    for case in cases {
        let app = app_with(Arc::new(UnreachableVendor), Some("key"));
        let (status, body) = post_json(app, case).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "case {}", case);
        assert_eq!(body["success"], false);
        assert_eq!(body["error"], "Both image_url and gif_url are required");
    }
}

#[tokio::test]
async fn test_missing_api_key_is_configuration_error() {
    let app = app_with(Arc::new(UnreachableVendor), None);
    let (status, body) = post_json(app, &swap_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].as_str().unwrap().contains("SEGMIND_API_KEY"));
}

#[tokio::test]
async fn test_malformed_body_is_server_error() {
    let app = app_with(Arc::new(UnreachableVendor), Some("key"));
    let (status, body) = post_json(app, "not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_vendor_success_becomes_data_uri() {
    let payload = [0xFF, 0xD8, 0xFF, 0x00, 0x10, 0x7F];
    let vendor = StubVendor::new(200, &payload);
    let app = app_with(vendor.clone(), Some("secret-key"));

    let (status, headers, bytes) = send(app, Method::POST, "/", &swap_body()).await;
    assert_eq!(status, StatusCode::OK);
    assert_cors(&headers);
    assert_eq!(headers["content-type"], "application/json");

    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Face swap completed successfully");
    assert!(body["processing_time"].is_i64());

    let image = body["image"].as_str().unwrap();
    assert!(image.starts_with("data:image/jpeg;base64,"));
    assert_eq!(data_uri::decode(image).unwrap().bytes, payload);

    assert_eq!(vendor.calls(), 1);
    let (key, params) = vendor.last.lock().unwrap().clone().unwrap();
    assert_eq!(key, "secret-key");
    assert_eq!(params, SwapParams::new("data:image/png;base64,iVBORw0KGgo=", "https://example.com/a.gif"));
}

#[tokio::test]
async fn test_vendor_errors_are_translated() {
    let cases: [(u16, &str); 5] = [
        (401, "Invalid Segmind API key"),
        (402, "Insufficient credits"),
        (422, "clear faces"),
        (429, "Rate limit"),
        (500, "Face swap processing failed"),
    ];
    for (code, expected) in cases {
        let vendor = StubVendor::new(code, br#"{"error":"vendor says no"}"#);
        let app = app_with(vendor.clone(), Some("key"));
        let (status, body) = post_json(app, &swap_body()).await;

        assert_eq!(status.as_u16(), code);
        assert_eq!(body["success"], false);
        assert!(
            body["error"].as_str().unwrap().contains(expected),
            "status {} gave {}",
            code,
            body["error"]
        );
        assert_eq!(body["details"], r#"{"error":"vendor says no"}"#);
        assert_eq!(vendor.calls(), 1, "no retry for {}", code);
    }
}

#[tokio::test]
async fn test_transport_failure_is_server_error() {
    let app = app_with(Arc::new(BrokenTransport), Some("key"));
    let (status, body) = post_json(app, &swap_body()).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "connection refused");
}

#[tokio::test]
async fn test_function_name_alias() {
    let app = app_with(Arc::new(UnreachableVendor), None);
    let (status, _, bytes) = send(
        app,
        Method::POST,
        "/faceswap-segmind",
        r#"{"image_url":"test","gif_url":"test"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["function_status"], "online");
}
