//! Server entry point.

use std::sync::Arc;

use showcase_api::AppState;
use showcase_api::config::{Config, LogFormat};
use showcase_api::shutdown::termination_signal;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    match config.log_format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json())
            .init(),
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

#[tokio::main]
async fn main() {
    // 1. Load configuration and initialize tracing
    let config = Config::from_env();
    init_tracing(&config);
    tracing::debug!(?config, "configuration loaded");

    // 2. Build probe, sampler and landing page
    let state = AppState::from_config(&config).expect("failed to build application state");

    // 3. Build the application
    let app = showcase_api::create_app(Arc::new(state));

    // 4. Start server
    let addr = config.addr();
    tracing::info!(%addr, "starting showcase server");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind address");
    let shutdown = async {
        let signal = termination_signal().await;
        tracing::info!(signal, "starting graceful shutdown");
    };
    showcase_api::serve(listener, app, shutdown)
        .await
        .expect("server error");

    tracing::info!("server shut down gracefully");
}
