//! Results section: loading spinner, prediction breakdown or failure notice.
//!
//! The section element is always mounted and hidden with `display: none`
//! while idle, so it can be scrolled into view the moment loading starts.

use leptos::prelude::*;

use crate::components::confidence_bar::ConfidenceBar;
use crate::net::types::PredictionResult;
use crate::state::upload::{ResultsPane, UploadState};
use crate::util::verdict::{format_percent, tone_for_label};

#[component]
pub fn ResultsPanel(on_retry: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<UploadState>>();
    let section = NodeRef::<leptos::html::Section>::new();
    let results = Memo::new(move |_| state.with(|s| s.results.clone()));

    // Scroll on the transition into loading only.
    Effect::new(move |was_loading: Option<bool>| {
        let loading = state.with(UploadState::is_analyzing);
        if loading && was_loading != Some(true) {
            #[cfg(feature = "hydrate")]
            {
                if let Some(el) = section.get_untracked() {
                    crate::util::browser::scroll_into_view(&el, web_sys::ScrollLogicalPosition::Nearest);
                }
            }
        }
        loading
    });

    view! {
        <section
            class="results-section"
            node_ref=section
            style:display=move || if results.with(ResultsPane::is_visible) { "block" } else { "none" }
        >
            {move || match results.get() {
                ResultsPane::Hidden => ().into_any(),
                ResultsPane::Loading => view! {
                    <div class="loading-state">
                        <div class="spinner"></div>
                        <p>"Analyzing image..."</p>
                    </div>
                }
                .into_any(),
                ResultsPane::Success(result) => view! { <PredictionView result=result/> }.into_any(),
                ResultsPane::Failed { message } => view! { <FailureView message=message on_retry=on_retry/> }.into_any(),
            }}
        </section>
    }
}

#[component]
fn PredictionView(result: PredictionResult) -> impl IntoView {
    let PredictionResult { prediction, confidence, all_predictions } = result;
    let tone = tone_for_label(&prediction);

    view! {
        <div class="results-content">
            <div class="prediction-card">
                <span class="prediction-card__label">"Prediction"</span>
                <h2 class=tone.css_class()>{prediction}</h2>
            </div>
            <ConfidenceBar confidence=confidence/>
            <div class="all-predictions">
                <h3>"Detailed Results"</h3>
                {all_predictions
                    .into_iter()
                    .map(|row| {
                        view! {
                            <div class="prediction-item">
                                <span>{row.class_name}</span>
                                <span class="prediction-item__value">{format_percent(row.percentage)}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[component]
fn FailureView(message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="analysis-error">
            <svg class="analysis-error__icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                <circle cx="12" cy="12" r="10" stroke="currentColor" stroke-width="2"></circle>
                <path d="M12 8v4M12 16h.01" stroke="currentColor" stroke-width="2" stroke-linecap="round"></path>
            </svg>
            <h3>"Analysis Failed"</h3>
            <p class="analysis-error__message">{message}</p>
            <button class="action-button primary" on:click=move |_| on_retry.run(())>
                "Try Again"
            </button>
        </div>
    }
}
