//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog card is self-contained. Upload and results components read the
//! page's `RwSignal<UploadState>` from Leptos context.

pub mod confidence_bar;
pub mod detector_card;
pub mod results_panel;
pub mod upload_area;
