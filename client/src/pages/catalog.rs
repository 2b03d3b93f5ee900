//! Landing page listing every detector in the catalog.

use leptos::prelude::*;

use crate::components::detector_card::DetectorCard;
use crate::state::catalog::{CATALOG, ready_count};

/// Catalog page: one card per detector, in catalog order, plus the count of
/// ready models.
#[component]
pub fn CatalogPage() -> impl IntoView {
    let ready = ready_count(CATALOG);

    view! {
        <div class="catalog-page">
            <header class="hero">
                <h1 class="hero__title">"OncoScan"</h1>
                <p class="hero__subtitle">"AI-assisted cancer detection from medical images"</p>
                <div class="hero__stat">
                    <span class="hero__stat-value" id="models-ready">{ready.to_string()}</span>
                    <span class="hero__stat-label">"Models Ready"</span>
                </div>
            </header>

            <section class="detector-grid" id="detector-grid">
                {CATALOG
                    .iter()
                    .map(|detector| view! { <DetectorCard detector=detector/> })
                    .collect::<Vec<_>>()}
            </section>
        </div>
    }
}
