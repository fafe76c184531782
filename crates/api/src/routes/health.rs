//! Health check endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use chrono::{SecondsFormat, Utc};
use db_probe::DatabaseStatus;
use serde::{Deserialize, Serialize};
use system_sampler::SystemSnapshot;

use crate::AppState;
use crate::error::ApiError;

/// Overall verdict. Degraded exactly when the database check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Components {
    pub database: DatabaseStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub timestamp: String,
    pub components: Components,
    pub system: SystemSnapshot,
}

impl HealthReport {
    /// Assembles a report stamped with the current time.
    pub fn new(database: DatabaseStatus, system: SystemSnapshot) -> Self {
        let status = if database.is_connected() {
            HealthStatus::Healthy
        } else {
            HealthStatus::Degraded
        };

        Self {
            status,
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            components: Components { database },
            system,
        }
    }
}

/// GET /health — checks the database and samples the host.
///
/// Always 200 when the report can be built; degradation is only visible in
/// the body. The probe and the CPU measurement run concurrently.
pub async fn check(State(state): State<Arc<AppState>>) -> Result<Json<HealthReport>, ApiError> {
    let (database, system) = tokio::join!(state.probe.check(), super::sample_system(&state));
    let report = HealthReport::new(database, system?);

    if report.status == HealthStatus::Degraded {
        tracing::info!("health check degraded");
    }

    Ok(Json(report))
}
