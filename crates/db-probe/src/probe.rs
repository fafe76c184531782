use async_trait::async_trait;

use crate::DatabaseStatus;

/// A liveness check against a database.
///
/// Implementations must be infallible from the caller's point of view: every
/// failure is folded into [`DatabaseStatus::Error`].
#[async_trait]
pub trait DatabaseProbe: Send + Sync {
    /// Performs one check. No retries, no caching between calls.
    async fn check(&self) -> DatabaseStatus;
}
