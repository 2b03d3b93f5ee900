//! Upload-and-predict state for the detect page.
//!
//! DESIGN
//! ======
//! One `UploadState` owns the selected file slot and the results pane. The
//! page keeps it in a single `RwSignal` and drives it from event handlers.
//!
//! Both asynchronous steps (file read, prediction request) capture a token at
//! start. Each token carries the sequence number current at that moment; a
//! completion whose token is behind the live sequence is dropped. A new
//! selection, a clear or a retry advances the sequences, so stale callbacks
//! can never touch the panes that replaced them.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use std::sync::Arc;

use crate::net::api::PredictError;
use crate::net::types::{ImageUpload, PredictionResult};
use crate::util::preview;

/// Largest accepted upload, in bytes (16 MiB).
pub const MAX_UPLOAD_BYTES: u64 = 16 * 1024 * 1024;

/// Declared media types accepted for upload.
pub const ACCEPTED_MEDIA_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// `accept` attribute for the file picker.
pub const ACCEPT_ATTR: &str = "image/png,image/jpeg,image/jpg";

/// Validation and precondition failures. `Display` is the user-facing notice.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    #[error("Please upload a PNG, JPG, or JPEG image.")]
    UnsupportedType { media_type: String },

    #[error("File size must be less than 16MB.")]
    TooLarge { size: u64 },

    #[error("Please select an image first.")]
    NoSelection,

    #[error("The selected image is still loading.")]
    NotReady,

    #[error("An analysis is already in progress.")]
    AnalysisInFlight,
}

/// Check a candidate file's declared type and size, in that order.
///
/// # Errors
///
/// `UnsupportedType` for media types outside [`ACCEPTED_MEDIA_TYPES`],
/// `TooLarge` above [`MAX_UPLOAD_BYTES`].
pub fn validate(media_type: &str, size: u64) -> Result<(), UploadError> {
    if !ACCEPTED_MEDIA_TYPES.contains(&media_type) {
        return Err(UploadError::UnsupportedType { media_type: media_type.to_owned() });
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge { size });
    }
    Ok(())
}

/// The user's chosen image.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub media_type: String,
    pub size: u64,
    /// File contents, present once the read has completed.
    pub contents: Option<Arc<[u8]>>,
    /// Inline `data:` URL. Until this file's read completes it still holds
    /// the previous selection's preview, if there was one.
    pub preview_url: Option<String>,
}

impl SelectedFile {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.contents.is_some()
    }
}

/// Visual state of the results section.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ResultsPane {
    #[default]
    Hidden,
    Loading,
    Success(PredictionResult),
    Failed { message: String },
}

impl ResultsPane {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }
}

/// Token for one file read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReadToken(u64);

/// Token for one prediction request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnalysisToken(u64);

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UploadState {
    pub selected: Option<SelectedFile>,
    pub results: ResultsPane,
    /// Drag-over highlight on the drop target.
    pub dragging: bool,
    read_seq: u64,
    analysis_seq: u64,
}

impl UploadState {
    /// Validate and adopt a new file, replacing any previous selection.
    ///
    /// The previous preview (if any) stays on screen until
    /// [`Self::complete_read`] delivers the new contents. Results from the
    /// previous image are hidden and any in-flight analysis is abandoned.
    ///
    /// # Errors
    ///
    /// See [`validate`]. On error the state is left untouched.
    pub fn select(&mut self, name: &str, media_type: &str, size: u64) -> Result<ReadToken, UploadError> {
        validate(media_type, size)?;
        self.read_seq += 1;
        self.analysis_seq += 1;
        let preview_url = self.selected.take().and_then(|previous| previous.preview_url);
        self.selected = Some(SelectedFile {
            name: name.to_owned(),
            media_type: media_type.to_owned(),
            size,
            contents: None,
            preview_url,
        });
        self.results = ResultsPane::Hidden;
        Ok(ReadToken(self.read_seq))
    }

    /// Store the read contents and build the preview.
    ///
    /// Returns `false` when the token is stale and nothing changed.
    pub fn complete_read(&mut self, token: ReadToken, bytes: Vec<u8>) -> bool {
        if token.0 != self.read_seq {
            return false;
        }
        let Some(file) = self.selected.as_mut() else {
            return false;
        };
        file.preview_url = Some(preview::data_url(&file.media_type, &bytes));
        file.contents = Some(Arc::from(bytes));
        true
    }

    /// Drop a selection whose read failed.
    ///
    /// Returns `false` when the token is stale and nothing changed.
    pub fn fail_read(&mut self, token: ReadToken) -> bool {
        if token.0 != self.read_seq || self.selected.is_none() {
            return false;
        }
        self.read_seq += 1;
        self.selected = None;
        true
    }

    /// Return to idle: no selection, no preview, results hidden.
    pub fn clear(&mut self) {
        self.read_seq += 1;
        self.analysis_seq += 1;
        self.selected = None;
        self.results = ResultsPane::Hidden;
        self.dragging = false;
    }

    /// Move the results pane to loading and hand back the request payload.
    ///
    /// # Errors
    ///
    /// `NoSelection` without a file, `NotReady` while the read is pending,
    /// `AnalysisInFlight` while a previous request is still loading. The state
    /// is unchanged on error.
    pub fn begin_analysis(&mut self) -> Result<(AnalysisToken, ImageUpload), UploadError> {
        let file = self.selected.as_ref().ok_or(UploadError::NoSelection)?;
        let bytes = file.contents.clone().ok_or(UploadError::NotReady)?;
        if self.results == ResultsPane::Loading {
            return Err(UploadError::AnalysisInFlight);
        }
        let upload = ImageUpload { file_name: file.name.clone(), media_type: file.media_type.clone(), bytes };
        self.analysis_seq += 1;
        self.results = ResultsPane::Loading;
        Ok((AnalysisToken(self.analysis_seq), upload))
    }

    /// Render the outcome of a request.
    ///
    /// Returns `false` when the token is stale and nothing changed.
    pub fn finish_analysis(&mut self, token: AnalysisToken, outcome: Result<PredictionResult, PredictError>) -> bool {
        if token.0 != self.analysis_seq || self.results != ResultsPane::Loading {
            return false;
        }
        self.results = match outcome {
            Ok(result) => ResultsPane::Success(result),
            Err(err) => ResultsPane::Failed { message: err.to_string() },
        };
        true
    }

    /// The drop zone prompt shows until a preview exists.
    #[must_use]
    pub fn upload_prompt_visible(&self) -> bool {
        self.preview_url().is_none()
    }

    #[must_use]
    pub fn preview_url(&self) -> Option<&str> {
        self.selected.as_ref().and_then(|f| f.preview_url.as_deref())
    }

    #[must_use]
    pub fn is_analyzing(&self) -> bool {
        self.results == ResultsPane::Loading
    }

    /// Analyze is offered once the selection is read and no request is loading.
    #[must_use]
    pub fn can_analyze(&self) -> bool {
        self.selected.as_ref().is_some_and(SelectedFile::is_loaded) && !self.is_analyzing()
    }
}
