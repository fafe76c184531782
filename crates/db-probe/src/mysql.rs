use async_trait::async_trait;
use sqlx::Connection;
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};

use crate::{DatabaseProbe, DatabaseSettings, DatabaseStatus, ProbeError, Result, ServerInfo};

/// Server clock and version in one round trip. The timestamp is cast to text
/// so it reads exactly as the server formats it.
const INTROSPECTION_QUERY: &str = "SELECT CAST(NOW() AS CHAR), VERSION()";

/// MySQL-backed probe. Holds connect options only; no pool, no open handles.
#[derive(Clone)]
pub struct MySqlProbe {
    options: MySqlConnectOptions,
}

impl MySqlProbe {
    /// Creates a probe from ready-made connect options.
    pub fn new(options: MySqlConnectOptions) -> Self {
        Self { options }
    }

    /// Creates a probe from configured settings.
    pub fn from_settings(settings: &DatabaseSettings) -> Result<Self> {
        Ok(Self::new(settings.connect_options()?))
    }

    /// Opens a connection, runs the introspection query and closes it again.
    ///
    /// The connection is released on every path: closed explicitly after the
    /// query, dropped if anything earlier fails.
    pub async fn server_info(&self) -> Result<ServerInfo> {
        let mut conn = MySqlConnection::connect_with(&self.options)
            .await
            .map_err(ProbeError::Connect)?;

        let row = sqlx::query_as::<_, (String, String)>(INTROSPECTION_QUERY)
            .fetch_one(&mut conn)
            .await;

        if let Err(e) = conn.close().await {
            tracing::debug!(error = %e, "failed to close probe connection cleanly");
        }

        let (server_time, version) = row.map_err(ProbeError::Query)?;
        Ok(ServerInfo {
            server_time,
            version,
        })
    }
}

#[async_trait]
impl DatabaseProbe for MySqlProbe {
    async fn check(&self) -> DatabaseStatus {
        match self.server_info().await {
            Ok(info) => {
                tracing::debug!(version = %info.version, "database reachable");
                info.into()
            }
            Err(err) => {
                tracing::warn!(error = %err, "database check failed");
                DatabaseStatus::error(err)
            }
        }
    }
}
