use super::*;

use axum::body::{Body, to_bytes};
use axum::http::Request;
use axum::Router;
use axum::routing::post;
use client::state::catalog::DetectorStatus;
use tower::ServiceExt;

use crate::config::{ServerConfig, UpstreamTimeouts};

const BOUNDARY: &str = "scanboundary";

fn state_with_upstream(upstream_url: Option<String>) -> AppState {
    let config = ServerConfig {
        port: 0,
        upstream_url,
        timeouts: UpstreamTimeouts { request_secs: 5, connect_secs: 1 },
    };
    AppState::new(config).unwrap()
}

fn multipart_request(detector: &str) -> Request<Body> {
    let body = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"scan.png\"\r\n\
         Content-Type: image/png\r\n\r\nPNGDATA\r\n--{BOUNDARY}--\r\n"
    );
    Request::builder()
        .method("POST")
        .uri(format!("/predict/{detector}"))
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(body))
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Serve a stand-in prediction backend on an ephemeral port.
async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });
    format!("http://{addr}")
}

// =============================================================
// Detector gating
// =============================================================

#[test]
fn resolve_detector_finds_catalog_entry() {
    let detector = resolve_detector("brain_tumor").unwrap();
    assert_eq!(detector.name, "Brain Tumor");
}

#[test]
fn resolve_detector_rejects_unknown_id() {
    let err = resolve_detector("spleen").unwrap_err();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
    assert_eq!(err.to_string(), "Unknown detector: spleen");
}

#[test]
fn check_available_rejects_pending_detector() {
    let pending = DetectorDescriptor {
        id: "liver",
        name: "Liver",
        description: "",
        status: DetectorStatus::Pending,
        link: None,
    };
    let err = check_available(&pending).unwrap_err();
    assert_eq!(err.status(), StatusCode::CONFLICT);
    assert_eq!(err.to_string(), "Detector not available: liver");
}

#[test]
fn check_available_accepts_ready_detector() {
    assert!(check_available(resolve_detector("oral_cancer").unwrap()).is_ok());
}

#[test]
fn upstream_url_appends_predict_path() {
    assert_eq!(upstream_url("http://models:5000", "all_cancer"), "http://models:5000/predict/all_cancer");
}

#[test]
fn forward_error_statuses() {
    assert_eq!(ForwardError::NotConfigured.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(ForwardError::DetectorUnavailable("x").status(), StatusCode::CONFLICT);
}

// =============================================================
// Router
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let app = crate::routes::api_routes(state_with_upstream(None));
    let response = app
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn unknown_detector_is_not_found() {
    let app = crate::routes::api_routes(state_with_upstream(Some("http://127.0.0.1:1".to_owned())));
    let response = app.oneshot(multipart_request("spleen")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Unknown detector: spleen");
}

#[tokio::test]
async fn missing_upstream_is_service_unavailable() {
    let app = crate::routes::api_routes(state_with_upstream(None));
    let response = app.oneshot(multipart_request("brain_tumor")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = json_body(response).await;
    assert_eq!(body["message"], "Prediction service not configured");
}

#[tokio::test]
async fn unreachable_upstream_is_bad_gateway() {
    let app = crate::routes::api_routes(state_with_upstream(Some("http://127.0.0.1:1".to_owned())));
    let response = app.oneshot(multipart_request("brain_tumor")).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Prediction service unavailable");
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let app = crate::routes::api_routes(state_with_upstream(None));
    let request = Request::builder()
        .method("POST")
        .uri("/predict/brain_tumor")
        .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
        .body(Body::from(vec![0u8; MAX_REQUEST_BYTES + 1]))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
}

#[tokio::test]
async fn relays_upstream_body_and_content_type() {
    let upstream = Router::new().route(
        "/predict/{detector}",
        post(|Path(detector): Path<String>, headers: HeaderMap, body: Bytes| async move {
            let content_type = headers
                .get(CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .to_owned();
            Json(serde_json::json!({
                "success": true,
                "prediction": detector,
                "confidence": 87.5,
                "all_predictions": { "Malignant": 87.5, "Benign": 12.5 },
                "message": content_type,
                "received": body.len(),
            }))
        }),
    );
    let base = spawn_upstream(upstream).await;

    let app = crate::routes::api_routes(state_with_upstream(Some(base)));
    let response = app.oneshot(multipart_request("brain_tumor")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        Some("application/json")
    );

    let body = json_body(response).await;
    assert_eq!(body["prediction"], "brain_tumor");
    assert_eq!(body["message"], format!("multipart/form-data; boundary={BOUNDARY}"));
    assert!(body["received"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn relays_upstream_error_status() {
    let upstream = Router::new().route(
        "/predict/{detector}",
        post(|| async {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "success": false, "message": "model unavailable" })),
            )
        }),
    );
    let base = spawn_upstream(upstream).await;

    let app = crate::routes::api_routes(state_with_upstream(Some(base)));
    let response = app.oneshot(multipart_request("lymphoma_cancer")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = json_body(response).await;
    assert_eq!(body["message"], "model unavailable");
}
