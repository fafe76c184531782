//! Route handlers.

pub mod health;
pub mod index;
pub mod metrics;

use system_sampler::SystemSnapshot;

use crate::AppState;
use crate::error::ApiError;

/// Runs the blocking sampler off the async executor.
pub(crate) async fn sample_system(state: &AppState) -> Result<SystemSnapshot, ApiError> {
    let sampler = state.sampler.clone();
    let snapshot = tokio::task::spawn_blocking(move || sampler.sample()).await??;
    Ok(snapshot)
}
