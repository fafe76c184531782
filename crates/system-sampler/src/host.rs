//! Sampler backed by the `sysinfo` crate.

use std::path::Path;
use std::thread;
use std::time::Duration;

use sysinfo::{Disks, MINIMUM_CPU_UPDATE_INTERVAL, System};

use crate::snapshot::{normalize_percent, percentage};
use crate::{Result, SamplerError, SystemSampler, SystemSnapshot};

/// Default CPU measurement window.
pub const DEFAULT_CPU_INTERVAL: Duration = Duration::from_secs(1);

/// Reads the local host through `sysinfo`.
///
/// Holds no OS handles between samples; every call builds fresh readers.
#[derive(Debug, Clone)]
pub struct HostSampler {
    cpu_interval: Duration,
}

impl HostSampler {
    /// Creates a sampler measuring CPU usage over `cpu_interval`.
    ///
    /// Intervals shorter than what `sysinfo` can resolve are raised to
    /// [`MINIMUM_CPU_UPDATE_INTERVAL`].
    pub fn new(cpu_interval: Duration) -> Self {
        Self {
            cpu_interval: cpu_interval.max(MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    /// The effective CPU measurement window.
    pub fn cpu_interval(&self) -> Duration {
        self.cpu_interval
    }

    fn cpu_usage(&self, sys: &mut System) -> f64 {
        sys.refresh_cpu_usage();
        thread::sleep(self.cpu_interval);
        sys.refresh_cpu_usage();
        normalize_percent(f64::from(sys.global_cpu_usage()))
    }

    fn memory_usage(sys: &mut System) -> Result<f64> {
        sys.refresh_memory();
        let total = sys.total_memory();
        let used = total.saturating_sub(sys.available_memory());
        percentage(used, total).ok_or(SamplerError::MemoryUnavailable)
    }
}

impl Default for HostSampler {
    fn default() -> Self {
        Self::new(DEFAULT_CPU_INTERVAL)
    }
}

impl SystemSampler for HostSampler {
    fn sample(&self) -> Result<SystemSnapshot> {
        let hostname = System::host_name().ok_or(SamplerError::HostnameUnavailable)?;

        let mut sys = System::new();
        let memory_usage = Self::memory_usage(&mut sys)?;
        let disks = Disks::new_with_refreshed_list();
        let disk_usage = root_disk_usage(
            disks
                .list()
                .iter()
                .map(|d| (d.mount_point(), d.total_space(), d.available_space())),
        )?;
        let cpu_usage = self.cpu_usage(&mut sys);

        Ok(SystemSnapshot {
            hostname,
            platform: platform(),
            cpu_usage,
            memory_usage,
            disk_usage,
        })
    }
}

/// `<os>-<kernel>-<arch>`, e.g. `Linux-6.1.0-x86_64`.
pub fn platform() -> String {
    let os = System::name().unwrap_or_else(|| std::env::consts::OS.to_string());
    match System::kernel_version() {
        Some(kernel) => format!("{os}-{kernel}-{}", std::env::consts::ARCH),
        None => format!("{os}-{}", std::env::consts::ARCH),
    }
}

/// Usage of the filesystem mounted at `/`, from `(mount point, total, available)`
/// entries in bytes.
///
/// Without a `/` entry every listed filesystem is summed instead. An empty
/// list (or one reporting zero capacity) is [`SamplerError::NoFilesystems`].
pub fn root_disk_usage<'a, I>(filesystems: I) -> Result<f64>
where
    I: IntoIterator<Item = (&'a Path, u64, u64)>,
{
    fn usage(&(_, total, available): &(&Path, u64, u64)) -> (u64, u64) {
        (total.saturating_sub(available), total)
    }

    let filesystems: Vec<_> = filesystems.into_iter().collect();

    let (used, total) = match filesystems
        .iter()
        .find(|(mount, _, _)| *mount == Path::new("/"))
    {
        Some(root) => usage(root),
        None => {
            tracing::warn!(
                filesystems = filesystems.len(),
                "no filesystem mounted at /, aggregating all filesystems"
            );
            filesystems
                .iter()
                .map(usage)
                .fold((0, 0), |(u, t), (du, dt)| (u + du, t + dt))
        }
    };

    percentage(used, total).ok_or(SamplerError::NoFilesystems)
}
