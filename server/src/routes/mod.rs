//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! One Axum router serves the prediction forwarder, a health probe, the
//! Leptos SSR pages, and the static bundle and image assets from the Leptos
//! site root.

pub mod predict;

use std::path::PathBuf;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::routing::{get, post};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// API routes, usable without a Leptos configuration.
pub fn api_routes(state: AppState) -> Router {
    Router::new()
        .route(
            "/predict/{detector}",
            post(predict::forward_prediction).layer(DefaultBodyLimit::max(predict::MAX_REQUEST_BYTES)),
        )
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full app: API routes + Leptos SSR + `/pkg` and `/static` assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[[workspace.metadata.leptos]]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    let site_root = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root.join("pkg")))
        .nest_service("/static", ServeDir::new(site_root.join("static")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
