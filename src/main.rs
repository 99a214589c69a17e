mod agent;
mod chart;
mod config;
mod error;
mod feed;
mod logger;
mod routes;
mod state;
mod style;

use std::net::SocketAddr;

use tokio::sync::{mpsc, watch};
use tower_http::cors::CorsLayer;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() {
    logger::setup(cfg!(debug_assertions)).expect("Failed to initialize logger");

    std::panic::set_hook(Box::new(|info| {
        let location = info.location().map_or_else(
            || "unknown location".to_string(),
            |loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()),
        );
        tracing::error!("PANIC at {location}: {info}");
        eprintln!("PANIC at {location}: {info}");
    }));

    let cfg = Config::from_env();

    // Poller and merge task communicate over a channel; the merge task is
    // the window's only writer and publishes complete snapshots.
    let (batch_tx, batch_rx) = mpsc::channel(8);
    let (snapshot_tx, snapshot_rx) = watch::channel(Vec::new());

    let _ = exchange::poller::spawn(cfg.api_base.clone(), cfg.poll_interval, batch_tx);
    let _ = feed::spawn_window_task(cfg.window_bound, batch_rx, snapshot_tx);

    let bind = cfg.bind.clone();
    let port = cfg.port;
    let state = AppState::new(cfg, snapshot_rx);

    let app = routes::api_router()
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr: SocketAddr = format!("{bind}:{port}").parse().expect("invalid bind address");
    tracing::info!("goldview listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("server error");
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
