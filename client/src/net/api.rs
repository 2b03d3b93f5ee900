//! HTTP helper for the prediction endpoint.
//!
//! Client-side (hydrate): a real multipart request via `gloo-net`.
//! Server-side (SSR): a stub error, since uploads only happen in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode collapses into `PredictError`, whose `Display` text is
//! exactly what the results pane shows. Transport details stay available for
//! logging through `PredictError::detail`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ImageUpload, PredictionResponse, PredictionResult};

/// Message shown when a failure carries no usable text of its own.
pub const FALLBACK_FAILURE_MESSAGE: &str = "Prediction failed";

/// Multipart field that carries the image.
pub const UPLOAD_FIELD: &str = "file";

/// Why a prediction could not be rendered.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum PredictError {
    /// The request body could not be assembled in the browser.
    #[error("{}", FALLBACK_FAILURE_MESSAGE)]
    Request(String),

    /// The request never produced a response.
    #[error("{}", FALLBACK_FAILURE_MESSAGE)]
    Transport(String),

    /// The response body was not a usable prediction document.
    #[error("{0}")]
    Parse(String),

    /// The backend answered with a non-2xx status or `success: false`.
    #[error("{}", .message.as_deref().unwrap_or(FALLBACK_FAILURE_MESSAGE))]
    Rejected { status: u16, message: Option<String> },
}

impl PredictError {
    /// Diagnostic text for logs; may differ from the user-facing message.
    #[must_use]
    pub fn detail(&self) -> String {
        match self {
            Self::Request(detail) | Self::Transport(detail) | Self::Parse(detail) => detail.clone(),
            Self::Rejected { status, message } => {
                format!("status {status}: {}", message.as_deref().unwrap_or("<no message>"))
            }
        }
    }
}

#[must_use]
pub fn predict_endpoint(detector: &str) -> String {
    format!("/predict/{detector}")
}

/// Turn a raw HTTP outcome into a renderable result.
///
/// Both a 2xx status and `success: true` are required. An empty `message`
/// counts as absent.
///
/// # Errors
///
/// Returns `Parse` for bodies that are not prediction JSON (or lack the top
/// label or confidence on success) and `Rejected` for server-reported failures.
pub fn interpret_response(http_ok: bool, status: u16, body: &str) -> Result<PredictionResult, PredictError> {
    let resp: PredictionResponse = serde_json::from_str(body).map_err(|e| PredictError::Parse(e.to_string()))?;

    if !(http_ok && resp.success) {
        let message = resp.message.filter(|m| !m.trim().is_empty());
        return Err(PredictError::Rejected { status, message });
    }

    let prediction = resp
        .prediction
        .ok_or_else(|| PredictError::Parse("missing field `prediction`".to_owned()))?;
    let confidence = resp
        .confidence
        .ok_or_else(|| PredictError::Parse("missing field `confidence`".to_owned()))?;

    Ok(PredictionResult { prediction, confidence, all_predictions: resp.all_predictions.unwrap_or_default() })
}

/// Submit one image to `POST /predict/{detector}`.
///
/// No timeout is applied; the call waits for a response or a transport error.
///
/// # Errors
///
/// See [`PredictError`].
pub async fn predict(detector: &str, upload: &ImageUpload) -> Result<PredictionResult, PredictError> {
    #[cfg(feature = "hydrate")]
    {
        let form = build_form(upload).map_err(PredictError::Request)?;
        let resp = gloo_net::http::Request::post(&predict_endpoint(detector))
            .body(form)
            .map_err(|e| PredictError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        let body = resp
            .text()
            .await
            .map_err(|e| PredictError::Transport(e.to_string()))?;
        interpret_response(resp.ok(), resp.status(), &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(PredictError::Transport(format!(
            "cannot upload {} to {} outside the browser",
            upload.file_name,
            predict_endpoint(detector)
        )))
    }
}

#[cfg(feature = "hydrate")]
fn build_form(upload: &ImageUpload) -> Result<web_sys::FormData, String> {
    use crate::util::browser::js_error_text;

    let bytes = js_sys::Uint8Array::from(upload.bytes.as_ref());
    let parts = js_sys::Array::of1(&bytes);
    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&upload.media_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_error_text)?;

    let form = web_sys::FormData::new().map_err(js_error_text)?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, &upload.file_name)
        .map_err(js_error_text)?;
    Ok(form)
}
