use thiserror::Error;

/// Errors that can occur while sampling the host.
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The OS did not report a host name.
    #[error("Hostname unavailable")]
    HostnameUnavailable,

    /// No mounted filesystem could be found to measure.
    #[error("No filesystems available for disk usage")]
    NoFilesystems,

    /// The OS reported zero total memory.
    #[error("Memory statistics unavailable")]
    MemoryUnavailable,
}

/// Result type for sampler operations.
pub type Result<T> = std::result::Result<T, SamplerError>;
