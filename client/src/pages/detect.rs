//! Detect page: upload one image and classify it with a detector's model.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route segment names the detector; its id is the `/predict/{id}` path
//! parameter. The page owns the `UploadState` signal, provides it to the
//! upload and results components, and runs the Analyze/Remove/Retry actions.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::results_panel::ResultsPanel;
use crate::components::upload_area::UploadArea;
use crate::state::catalog::{self, DetectorDescriptor};
use crate::state::upload::{UploadError, UploadState};
use crate::util::browser;

#[component]
pub fn DetectPage() -> impl IntoView {
    let params = use_params_map();
    let detector = move || params.read().get("detector").and_then(|id| catalog::find(&id));

    view! {
        {move || match detector() {
            Some(detector) => view! { <DetectorWorkspace detector=detector/> }.into_any(),
            None => view! {
                <div class="detect-page detect-page--missing">
                    <h1>"Unknown detector"</h1>
                    <a href="/" class="detect-page__back">"Back to all detectors"</a>
                </div>
            }
            .into_any(),
        }}
    }
}

/// Upload + results layout for one detector. A fresh `UploadState` is created
/// per mount, so switching detectors never carries a selection across.
#[component]
fn DetectorWorkspace(detector: &'static DetectorDescriptor) -> impl IntoView {
    let state = RwSignal::new(UploadState::default());
    provide_context(state);

    let file_input = NodeRef::<leptos::html::Input>::new();
    let upload_area = NodeRef::<leptos::html::Div>::new();

    let reset = Callback::new(move |()| {
        state.update(UploadState::clear);
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        }
    });

    let retry = Callback::new(move |()| {
        reset.run(());
        #[cfg(feature = "hydrate")]
        {
            if let Some(area) = upload_area.get_untracked() {
                browser::scroll_into_view(&area, web_sys::ScrollLogicalPosition::Start);
            }
        }
    });

    let analyze = Callback::new(move |()| start_analysis(state, detector.id));

    view! {
        <div class="detect-page">
            <header class="detect-page__header">
                <a href="/" class="detect-page__back">"← All detectors"</a>
                <h1>{detector.name}</h1>
                <p class="detect-page__description">{detector.description}</p>
            </header>

            <UploadArea file_input=file_input upload_area=upload_area on_remove=reset on_analyze=analyze/>
            <ResultsPanel on_retry=retry/>
        </div>
    }
}

/// Enter loading and submit the selected image to `/predict/{detector}`.
///
/// A click while a request is already loading is ignored.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
fn start_analysis(state: RwSignal<UploadState>, detector: &'static str) {
    match state.try_update(UploadState::begin_analysis) {
        Some(Ok((token, upload))) => {
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::predict(detector, &upload).await;
                if let Err(err) = &outcome {
                    log::error!("prediction for {detector} failed: {}", err.detail());
                }
                if state.try_update(|s| s.finish_analysis(token, outcome)) != Some(true) {
                    log::debug!("discarding stale prediction for {detector}");
                }
            });
        }
        Some(Err(UploadError::AnalysisInFlight)) | None => {}
        Some(Err(err)) => browser::notify(&err.to_string()),
    }
}
