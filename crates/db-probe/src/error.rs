use thiserror::Error;

/// Errors that can occur while probing the database.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The configured connection URL could not be parsed.
    #[error("Invalid database URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),

    /// The connection could not be established (refused, auth, TLS, ...).
    #[error("Connection failed: {0}")]
    Connect(#[source] sqlx::Error),

    /// The introspection query failed on an open connection.
    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),
}

/// Result type for probe operations.
pub type Result<T> = std::result::Result<T, ProbeError>;
