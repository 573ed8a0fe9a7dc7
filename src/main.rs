use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wordparty::{api, config::ServerConfig, reaper, state::AppState, ws};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present (before any env var reads)
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if .env doesn't exist, only log if it's a different issue
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wordparty=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Word Party...");

    let config = ServerConfig::from_env();
    let state = Arc::new(AppState::new(config.game.clone()));

    if config.game.room_idle_timeout.is_some() {
        reaper::spawn_idle_room_reaper(state.clone(), config.reaper_interval);
    }

    let app = Router::new()
        .route("/ws", get(ws::ws_handler))
        .merge(api::page_routes(config.static_dir.clone()))
        .fallback_service(ServeDir::new(&config.static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;

    let port = config.bind_addr.port();
    tracing::info!("Local access (host): http://localhost:{}", port);
    match api::local_ip() {
        Some(ip) => tracing::info!("Network access (players): http://{}:{}", ip, port),
        None => tracing::warn!("Could not determine LAN address; players need this machine's IP"),
    }

    axum::serve(listener, app).await
}
