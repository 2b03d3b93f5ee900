mod config;
mod routes;
mod state;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let port = config.port;

    match config.upstream_url.as_deref() {
        Some(url) => tracing::info!(upstream = url, "prediction upstream configured"),
        None => tracing::warn!("PREDICT_UPSTREAM_URL not set; /predict will answer 503"),
    }

    let state = state::AppState::new(config).expect("http client init failed");
    let app = routes::leptos_app(state).expect("leptos configuration failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "oncoscan listening");
    axum::serve(listener, app).await.expect("server failed");
}
