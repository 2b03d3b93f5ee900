//! Thin wrappers over browser APIs used by the upload flow.
//!
//! Every helper compiles on the server as a no-op so components can call them
//! unconditionally from event handlers.

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsValue;

/// Show a blocking notice via `window.alert`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn notify(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(err) = window.alert_with_message(message) {
                log::warn!("alert failed: {}", js_error_text(err));
            }
        }
    }
}

/// Smoothly scroll `el` into view.
#[cfg(feature = "hydrate")]
pub fn scroll_into_view(el: &web_sys::Element, block: web_sys::ScrollLogicalPosition) {
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    options.set_block(block);
    el.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Read the full contents of a browser file.
///
/// # Errors
///
/// Returns the browser's error text if the read is rejected.
#[cfg(feature = "hydrate")]
pub async fn read_file_bytes(file: &web_sys::File) -> Result<Vec<u8>, String> {
    let buffer = wasm_bindgen_futures::JsFuture::from(file.array_buffer())
        .await
        .map_err(js_error_text)?;
    Ok(js_sys::Uint8Array::new(&buffer).to_vec())
}

/// First file of a picker or drop list; extra files are ignored.
#[cfg(feature = "hydrate")]
pub fn first_file(files: Option<web_sys::FileList>) -> Option<web_sys::File> {
    files.and_then(|list| list.item(0))
}

#[cfg(feature = "hydrate")]
pub fn js_error_text(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}
