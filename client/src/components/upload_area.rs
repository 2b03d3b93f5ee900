//! Drop zone, file picker and preview for the detect page.
//!
//! DESIGN
//! ======
//! File selection (picker or drop) is handled here because browser `File`
//! handles are not `Send` and cannot travel through `Callback`s. Remove and
//! Analyze are page-level actions passed in as callbacks.

use leptos::prelude::*;

use crate::state::upload::{ACCEPT_ATTR, UploadState};
#[cfg(feature = "hydrate")]
use crate::util::browser;

#[component]
pub fn UploadArea(
    file_input: NodeRef<leptos::html::Input>,
    upload_area: NodeRef<leptos::html::Div>,
    on_remove: Callback<()>,
    on_analyze: Callback<()>,
) -> impl IntoView {
    let state = expect_context::<RwSignal<UploadState>>();

    // Only open the picker while nothing is selected.
    let on_area_click = move |_| {
        if state.with_untracked(|s| s.selected.is_some()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            if let Some(input) = file_input.get_untracked() {
                input.click();
            }
        }
    };

    #[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input: web_sys::HtmlInputElement = event_target(&ev);
            if let Some(file) = browser::first_file(input.files()) {
                adopt_file(state, file);
            }
        }
    };

    let on_dragover = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        if !state.with_untracked(|s| s.dragging) {
            state.update(|s| s.dragging = true);
        }
    };

    let on_dragleave = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.update(|s| s.dragging = false);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        state.update(|s| s.dragging = false);
        #[cfg(feature = "hydrate")]
        {
            let files = ev.data_transfer().and_then(|dt| dt.files());
            if let Some(file) = browser::first_file(files) {
                adopt_file(state, file);
            }
        }
    };

    view! {
        <div
            class="upload-area"
            class:dragover=move || state.with(|s| s.dragging)
            node_ref=upload_area
            on:click=on_area_click
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
        >
            <input
                class="upload-area__input"
                type="file"
                accept=ACCEPT_ATTR
                node_ref=file_input
                on:change=on_change
                on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()
            />
            <Show
                when=move || state.with(UploadState::upload_prompt_visible)
                fallback=move || view! { <PreviewPane on_remove=on_remove on_analyze=on_analyze/> }
            >
                <div class="upload-content">
                    <svg class="upload-icon" viewBox="0 0 24 24" fill="none" aria-hidden="true">
                        <path
                            d="M12 16V4M12 4l-5 5M12 4l5 5M4 16v3a1 1 0 001 1h14a1 1 0 001-1v-3"
                            stroke="currentColor"
                            stroke-width="2"
                            stroke-linecap="round"
                        ></path>
                    </svg>
                    <h3>"Drop your image here"</h3>
                    <p>"or click to browse"</p>
                    <span class="upload-hint">"PNG, JPG or JPEG, up to 16MB"</span>
                </div>
            </Show>
        </div>
    }
}

/// Image preview with Remove and Analyze actions.
#[component]
fn PreviewPane(on_remove: Callback<()>, on_analyze: Callback<()>) -> impl IntoView {
    let state = expect_context::<RwSignal<UploadState>>();
    let preview_src = Memo::new(move |_| state.with(|s| s.preview_url().map(str::to_owned).unwrap_or_default()));
    let file_name = move || state.with(|s| s.selected.as_ref().map(|f| f.name.clone()).unwrap_or_default());

    view! {
        <div class="preview-container" on:click=move |ev: leptos::ev::MouseEvent| ev.stop_propagation()>
            <img class="image-preview" src=move || preview_src.get() alt="Selected image preview"/>
            <p class="preview-name">{file_name}</p>
            <div class="preview-actions">
                <button class="action-button secondary" on:click=move |_| on_remove.run(())>
                    "Remove"
                </button>
                <button
                    class="action-button primary"
                    disabled=move || !state.with(UploadState::can_analyze)
                    on:click=move |_| on_analyze.run(())
                >
                    "Analyze Image"
                </button>
            </div>
        </div>
    }
}

/// Validate `file`, make it the selection and read it for the preview.
#[cfg(feature = "hydrate")]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn adopt_file(state: RwSignal<UploadState>, file: web_sys::File) {
    let name = file.name();
    let media_type = file.type_();
    let size = file.size() as u64;

    let token = match state.try_update(|s| s.select(&name, &media_type, size)) {
        Some(Ok(token)) => token,
        Some(Err(err)) => {
            browser::notify(&err.to_string());
            return;
        }
        None => return,
    };

    leptos::task::spawn_local(async move {
        match browser::read_file_bytes(&file).await {
            Ok(bytes) => {
                if state.try_update(|s| s.complete_read(token, bytes)) != Some(true) {
                    log::debug!("discarding stale read of {name}");
                }
            }
            Err(err) => {
                log::error!("reading {name} failed: {err}");
                if state.try_update(|s| s.fail_read(token)) == Some(true) {
                    browser::notify("Could not read the selected image.");
                }
            }
        }
    });
}
