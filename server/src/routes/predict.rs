//! Prediction forwarding route.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser posts one multipart image to `/predict/{detector}` on this
//! server. The handler checks the detector against the catalog, then relays
//! the untouched body and its `Content-Type` to the configured prediction
//! backend. The backend's status, body and content type come back verbatim,
//! so the client parses exactly what the model service produced.

#[cfg(test)]
#[path = "predict_test.rs"]
mod predict_test;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::state::catalog::{self, DetectorDescriptor};

use crate::state::AppState;

/// Body limit for the route: a 16 MiB image plus multipart overhead.
pub const MAX_REQUEST_BYTES: usize = 17 * 1024 * 1024;

/// Reasons a prediction request never reaches, or never returns from, the
/// backend. Rendered as `{"success":false,"message":...}`.
#[derive(Debug, thiserror::Error)]
pub enum ForwardError {
    #[error("Unknown detector: {0}")]
    UnknownDetector(String),

    #[error("Detector not available: {0}")]
    DetectorUnavailable(&'static str),

    #[error("Prediction service not configured")]
    NotConfigured,

    #[error("Prediction service unavailable")]
    Upstream(#[source] reqwest::Error),
}

impl ForwardError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnknownDetector(_) => StatusCode::NOT_FOUND,
            Self::DetectorUnavailable(_) => StatusCode::CONFLICT,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ForwardError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "success": false, "message": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

/// Look up `id` in the detector catalog.
///
/// # Errors
///
/// `UnknownDetector` when no entry has that id.
pub fn resolve_detector(id: &str) -> Result<&'static DetectorDescriptor, ForwardError> {
    catalog::find(id).ok_or_else(|| ForwardError::UnknownDetector(id.to_owned()))
}

/// # Errors
///
/// `DetectorUnavailable` for entries that are not ready yet.
pub fn check_available(detector: &DetectorDescriptor) -> Result<(), ForwardError> {
    if detector.is_ready() { Ok(()) } else { Err(ForwardError::DetectorUnavailable(detector.id)) }
}

/// Backend URL for `detector`. `base` carries no trailing slash.
#[must_use]
pub fn upstream_url(base: &str, detector: &str) -> String {
    format!("{base}/predict/{detector}")
}

/// `POST /predict/{detector}`: relay one image to the prediction backend.
pub async fn forward_prediction(
    State(state): State<AppState>,
    Path(detector_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ForwardError> {
    let detector = resolve_detector(&detector_id)?;
    check_available(detector)?;
    let base = state.config.upstream_url.as_deref().ok_or(ForwardError::NotConfigured)?;
    let url = upstream_url(base, detector.id);

    tracing::info!(detector = detector.id, bytes = body.len(), "forwarding prediction");

    let mut request = state.http.post(&url).body(body);
    if let Some(content_type) = headers.get(CONTENT_TYPE) {
        request = request.header(CONTENT_TYPE, content_type.clone());
    }

    let upstream = request.send().await.map_err(|e| {
        tracing::warn!(detector = detector.id, error = %e, "prediction upstream unreachable");
        ForwardError::Upstream(e)
    })?;

    let status = upstream.status();
    let content_type = upstream.headers().get(CONTENT_TYPE).cloned();
    let payload = upstream.bytes().await.map_err(|e| {
        tracing::warn!(detector = detector.id, error = %e, "prediction upstream body failed");
        ForwardError::Upstream(e)
    })?;

    if status.is_success() {
        tracing::info!(detector = detector.id, %status, "prediction relayed");
    } else {
        tracing::warn!(detector = detector.id, %status, "prediction upstream returned error status");
    }

    let mut response = (status, payload).into_response();
    if let Some(content_type) = content_type {
        response.headers_mut().insert(CONTENT_TYPE, content_type);
    }
    Ok(response)
}
