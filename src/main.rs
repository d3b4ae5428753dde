//! Password strength checker HTTP server
//!
//! ```bash
//! PWD_STRENGTH_PORT=8000 cargo run --release
//! curl 'http://localhost:8000/api/v1/check-password/?password=Passw0rd!'
//! ```

use anyhow::Context;
use pwd_strength_api::{
    api::{AppState, create_router},
    config::ServerConfig,
    telemetry::Telemetry,
};
use tracing::info;
use tracing::instrument::WithSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env file is optional
    if let Ok(path) = dotenvy::dotenv() {
        eprintln!("Loaded .env from {:?}", path);
    }

    let config = ServerConfig::from_env()?;
    let telemetry = Telemetry::new(&config.log_filter);
    let dispatch = telemetry.dispatch().clone();

    run(config, telemetry).with_subscriber(dispatch).await
}

async fn run(config: ServerConfig, telemetry: Telemetry) -> anyhow::Result<()> {
    let app = create_router(AppState::new(telemetry));

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
