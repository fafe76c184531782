//! Host identity and resource utilization sampling.
//!
//! A sample is a pure read of OS counters: hostname, a platform descriptor
//! and three percentage gauges (CPU, memory, root filesystem). CPU usage is
//! measured over an interval, so [`SystemSampler::sample`] blocks.

pub mod error;
pub mod exposition;
pub mod host;
pub mod snapshot;

pub use error::{Result, SamplerError};
pub use host::HostSampler;
pub use snapshot::SystemSnapshot;

/// Source of [`SystemSnapshot`]s.
pub trait SystemSampler: Send + Sync {
    /// Takes one sample. May block for the CPU measurement interval.
    fn sample(&self) -> Result<SystemSnapshot>;
}
