//! Card for one catalog entry on the landing page.
//!
//! DESIGN
//! ======
//! The image falls back to the placeholder from its own `error` event rather
//! than probing for the asset first. The handler is a plain `onerror`
//! attribute rendered by the server, so it is live before hydration.

use leptos::prelude::*;

use crate::state::catalog::{CardAction, DetectorDescriptor, image_fallback_handler};

#[component]
pub fn DetectorCard(detector: &'static DetectorDescriptor) -> impl IntoView {
    let status = detector.status;
    let card_class = if detector.is_ready() { "detector-card available" } else { "detector-card unavailable" };
    let badge_class = format!("status-badge {}", status.as_str());

    let action = match detector.action() {
        CardAction::Launch { href } => view! {
            <a href=href target="_blank" rel="noopener noreferrer" class="card-button">
                <span>"Start Detection"</span>
                <svg class="button-arrow" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                    <path d="M5 12h14M12 5l7 7-7 7" stroke="currentColor" stroke-width="2" stroke-linecap="round"></path>
                </svg>
            </a>
        }
        .into_any(),
        CardAction::Unavailable => view! {
            <button class="card-button disabled" disabled=true>
                <span>"Coming Soon"</span>
            </button>
        }
        .into_any(),
    };

    view! {
        <div class=card_class data-detector=detector.id data-status=status.as_str()>
            <div class="card-glow"></div>
            <div class="card-content">
                <div class=badge_class>
                    <span class="status-icon">{status.icon()}</span>
                    " "
                    {status.label()}
                </div>

                <div class="card-image">
                    <img src=detector.image_src() alt=detector.name onerror=image_fallback_handler()/>
                </div>

                <div class="card-info">
                    <h2 class="card-title">{detector.name}</h2>
                    <p class="card-description">{detector.description}</p>
                </div>

                {action}
            </div>
        </div>
    }
}
