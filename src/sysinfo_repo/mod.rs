// Point-in-time host readings via sysinfo

mod linux;

use crate::error::{MetricKind, ReportError};
use crate::models::{CpuMetric, DiskMetric, HostInfo, MemoryMetric, NetworkMetric};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;
use sysinfo::{Disks, Networks, System};
use tracing::instrument;

pub struct SysinfoRepo {
    sys: Arc<Mutex<System>>,
    disks: Arc<Mutex<Disks>>,
    networks: Arc<Mutex<Networks>>,
    cpu_sample_interval: Duration,
}

impl Default for SysinfoRepo {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl SysinfoRepo {
    /// `cpu_sample_interval` is raised to sysinfo's minimum if shorter.
    pub fn new(cpu_sample_interval: Duration) -> Self {
        Self {
            sys: Arc::new(Mutex::new(System::new())),
            disks: Arc::new(Mutex::new(Disks::new_with_refreshed_list())),
            networks: Arc::new(Mutex::new(Networks::new_with_refreshed_list())),
            cpu_sample_interval: cpu_sample_interval.max(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL),
        }
    }

    pub fn cpu_sample_interval(&self) -> Duration {
        self.cpu_sample_interval
    }

    /// Usage over the sampling window; blocks the run for that long.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "collect_cpu"))]
    pub async fn collect_cpu(&self) -> Result<CpuMetric, ReportError> {
        ensure_supported(MetricKind::Cpu)?;
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            lock(&sys, MetricKind::Cpu)?.refresh_cpu_usage();
            Ok::<_, ReportError>(())
        })
        .await
        .map_err(|e| join_error(MetricKind::Cpu, e))??;

        tokio::time::sleep(self.cpu_sample_interval).await;

        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = lock(&sys, MetricKind::Cpu)?;
            sys.refresh_cpu_usage();
            let logical_cores = sys.cpus().len() as u32;
            if logical_cores == 0 {
                return Err(ReportError::collection(
                    MetricKind::Cpu,
                    "no CPUs reported by the OS",
                ));
            }
            let usage = sys.global_cpu_usage() as f64;
            if !usage.is_finite() {
                return Err(ReportError::collection(
                    MetricKind::Cpu,
                    format!("unusable CPU usage reading: {}", usage),
                ));
            }
            Ok(CpuMetric::new(usage, logical_cores))
        })
        .await
        .map_err(|e| join_error(MetricKind::Cpu, e))?
    }

    #[instrument(skip(self), fields(repo = "sysinfo", operation = "collect_memory"))]
    pub async fn collect_memory(&self) -> Result<MemoryMetric, ReportError> {
        ensure_supported(MetricKind::Memory)?;
        let sys = self.sys.clone();
        tokio::task::spawn_blocking(move || {
            let mut sys = lock(&sys, MetricKind::Memory)?;
            sys.refresh_memory();

            let total = sys.total_memory();
            if total == 0 {
                return Err(ReportError::collection(
                    MetricKind::Memory,
                    "OS reported zero physical memory",
                ));
            }
            let used = total.saturating_sub(sys.available_memory());
            Ok(MemoryMetric::from_bytes(total, used))
        })
        .await
        .map_err(|e| join_error(MetricKind::Memory, e))?
    }

    /// Usage of the filesystem holding `mount_point`; any existing path works.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "collect_disk"))]
    pub async fn collect_disk(&self, mount_point: &str) -> Result<DiskMetric, ReportError> {
        let requested = mount_point.to_string();
        let disks = self.disks.clone();
        tokio::task::spawn_blocking(move || {
            let path = std::fs::canonicalize(&requested).map_err(|e| {
                ReportError::collection(
                    MetricKind::Disk,
                    format!("mount point {} is not accessible: {}", requested, e),
                )
            })?;
            let mut disks = lock(&disks, MetricKind::Disk)?;
            disks.refresh(true);

            // Longest mount point containing the path wins, e.g. /home over / for /home/x.
            let disk = disks
                .list()
                .iter()
                .filter(|d| path.starts_with(d.mount_point()))
                .max_by_key(|d| d.mount_point().components().count())
                .ok_or_else(|| {
                    ReportError::collection(
                        MetricKind::Disk,
                        format!("no mounted filesystem contains {}", requested),
                    )
                })?;

            let total = disk.total_space();
            if total == 0 {
                return Err(ReportError::collection(
                    MetricKind::Disk,
                    format!(
                        "filesystem at {} reports zero size",
                        disk.mount_point().display()
                    ),
                ));
            }
            Ok(DiskMetric::from_bytes(
                requested.as_str(),
                total,
                disk.available_space(),
            ))
        })
        .await
        .map_err(|e| join_error(MetricKind::Disk, e))?
    }

    /// Totals across every interface since the counters were last reset.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "collect_network"))]
    pub async fn collect_network(&self) -> Result<NetworkMetric, ReportError> {
        ensure_supported(MetricKind::Network)?;
        let networks = self.networks.clone();
        tokio::task::spawn_blocking(move || {
            let mut networks = lock(&networks, MetricKind::Network)?;
            networks.refresh(true);
            let (bytes_sent, bytes_received) = networks
                .list()
                .values()
                .fold((0u64, 0u64), |(tx, rx), data| {
                    (
                        tx.saturating_add(data.total_transmitted()),
                        rx.saturating_add(data.total_received()),
                    )
                });
            Ok(NetworkMetric {
                bytes_sent,
                bytes_received,
            })
        })
        .await
        .map_err(|e| join_error(MetricKind::Network, e))?
    }

    /// Never fails; unknown fields stay empty.
    #[instrument(skip(self), fields(repo = "sysinfo", operation = "collect_host_info"))]
    pub async fn collect_host_info(&self) -> HostInfo {
        let sys = self.sys.clone();
        let result = tokio::task::spawn_blocking(move || {
            let processor_name = linux::read_cpu_model().or_else(|| {
                let mut sys = sys.lock().ok()?;
                sys.refresh_cpu_list(sysinfo::CpuRefreshKind::nothing());
                sys.cpus()
                    .first()
                    .map(|c| c.brand().trim().to_string())
                    .filter(|s| !s.is_empty() && s != "cpu0")
            });
            HostInfo {
                host_name: System::host_name().unwrap_or_default(),
                os_name: linux::read_os_pretty_name()
                    .or_else(System::name)
                    .unwrap_or_else(|| std::env::consts::OS.into()),
                os_version: System::os_version().unwrap_or_default(),
                processor_name: processor_name.unwrap_or_default(),
            }
        })
        .await;
        result.unwrap_or_else(|e| {
            tracing::warn!(error = %e, "host info task failed");
            HostInfo::default()
        })
    }
}

fn ensure_supported(metric: MetricKind) -> Result<(), ReportError> {
    if sysinfo::IS_SUPPORTED_SYSTEM {
        Ok(())
    } else {
        Err(ReportError::collection(
            metric,
            format!("unsupported platform: {}", std::env::consts::OS),
        ))
    }
}

fn lock<T>(handle: &Mutex<T>, metric: MetricKind) -> Result<MutexGuard<'_, T>, ReportError> {
    handle
        .lock()
        .map_err(|e| ReportError::collection(metric, format!("sysinfo lock poisoned: {}", e)))
}

fn join_error(metric: MetricKind, e: tokio::task::JoinError) -> ReportError {
    ReportError::collection(metric, format!("sysinfo task join: {}", e))
}
