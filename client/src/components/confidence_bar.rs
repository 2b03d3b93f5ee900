//! Confidence label plus an animated fill bar.

use leptos::prelude::*;

use crate::util::verdict::{bar_width, format_percent};

/// The numeric label renders at once; the bar starts empty and grows to the
/// confidence after `CONFIDENCE_FILL_DELAY_MS` so the CSS transition is seen.
#[component]
pub fn ConfidenceBar(confidence: f64) -> impl IntoView {
    let fill = RwSignal::new(0.0_f64);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let delay = std::time::Duration::from_millis(crate::util::verdict::CONFIDENCE_FILL_DELAY_MS);
        gloo_timers::future::sleep(delay).await;
        if fill.try_set(confidence).is_some() {
            log::debug!("confidence bar unmounted before fill");
        }
    });

    view! {
        <div class="confidence">
            <div class="confidence__header">
                <span>"Confidence"</span>
                <span class="confidence__value">{format_percent(confidence)}</span>
            </div>
            <div class="confidence__track">
                <div class="confidence__fill" style:width=move || bar_width(fill.get())></div>
            </div>
        </div>
    }
}
