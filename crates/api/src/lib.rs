//! HTTP surface for the showcase service.
//!
//! Serves a static landing page, a JSON health report combining a database
//! probe with a host sample, and the host gauges as plain-text metrics.
//! Everything is computed per request; the only shared state is the
//! immutable [`AppState`].

pub mod config;
pub mod error;
pub mod routes;
pub mod shutdown;

use std::future::Future;
use std::sync::Arc;

use axum::Router;
use axum::body::Bytes;
use axum::routing::get;
use db_probe::{DatabaseProbe, MySqlProbe};
use system_sampler::{HostSampler, SystemSampler};
use tower_http::cors::{Any, CorsLayer};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use config::Config;
use error::StartupError;

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub probe: Arc<dyn DatabaseProbe>,
    pub sampler: Arc<dyn SystemSampler>,
    pub index_html: Bytes,
}

impl AppState {
    /// Builds the production state: a MySQL probe and a `sysinfo` sampler.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let probe = MySqlProbe::from_settings(&config.database)?;
        let sampler = HostSampler::new(config.cpu_sample_interval);
        let index_html = routes::index::load_index_html(config.index_template.as_deref())?;

        Ok(Self {
            probe: Arc::new(probe),
            sampler: Arc::new(sampler),
            index_html,
        })
    }
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(routes::index::page))
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until `shutdown` resolves, then drains open
/// connections before returning.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}
