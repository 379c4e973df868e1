// CPU, memory, disk and network readings. Constructors derive percentages and alert flags.

use crate::thresholds::{
    CPU_THRESHOLD, DISK_THRESHOLD, MEMORY_THRESHOLD, exceeds, percent_of, sanitize_percent,
};

#[derive(Debug, Clone, PartialEq)]
pub struct CpuMetric {
    pub usage_percent: f64,
    pub logical_cores: u32,
    pub alert: bool,
}

impl CpuMetric {
    pub fn new(usage_percent: f64, logical_cores: u32) -> Self {
        let usage_percent = sanitize_percent(usage_percent);
        Self {
            usage_percent,
            logical_cores,
            alert: exceeds(usage_percent, CPU_THRESHOLD),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryMetric {
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub usage_percent: f64,
    pub alert: bool,
}

impl MemoryMetric {
    pub fn from_bytes(total_bytes: u64, used_bytes: u64) -> Self {
        let usage_percent = percent_of(used_bytes, total_bytes);
        Self {
            total_bytes,
            used_bytes,
            usage_percent,
            alert: exceeds(usage_percent, MEMORY_THRESHOLD),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiskMetric {
    pub mount_point: String,
    pub total_bytes: u64,
    pub used_bytes: u64,
    pub free_bytes: u64,
    pub usage_percent: f64,
    pub alert: bool,
}

impl DiskMetric {
    /// `used` is whatever is not available to the caller, so `used + free == total`.
    ///
    /// Blocks reserved for root count as used. On ext4 with the usual 5% reserve this
    /// reads a few points above a `used / (used + free)` figure, where `used` only
    /// counts allocated blocks. sysinfo does not expose the free-block count, so that
    /// figure can't be reproduced.
    pub fn from_bytes(mount_point: impl Into<String>, total_bytes: u64, free_bytes: u64) -> Self {
        let used_bytes = total_bytes.saturating_sub(free_bytes);
        let usage_percent = percent_of(used_bytes, total_bytes);
        Self {
            mount_point: mount_point.into(),
            total_bytes,
            used_bytes,
            free_bytes: free_bytes.min(total_bytes),
            usage_percent,
            alert: exceeds(usage_percent, DISK_THRESHOLD),
        }
    }
}

/// Cumulative counters since the interfaces were last reset. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkMetric {
    pub bytes_sent: u64,
    pub bytes_received: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_alert_tracks_clamped_usage() {
        let cpu = CpuMetric::new(120.0, 8);
        assert_eq!(cpu.usage_percent, 100.0);
        assert!(cpu.alert);
        assert!(!CpuMetric::new(f64::NAN, 8).alert);
    }

    #[test]
    fn disk_used_is_total_minus_free() {
        let disk = DiskMetric::from_bytes("/", 100, 25);
        assert_eq!(disk.used_bytes, 75);
        assert_eq!(disk.usage_percent, 75.0);
        assert!(!disk.alert);
    }

    #[test]
    fn disk_reserved_blocks_count_as_used() {
        // 100 total, 10 allocated, 5 reserved, 85 available to the caller.
        let disk = DiskMetric::from_bytes("/", 100, 85);
        assert_eq!(disk.used_bytes, 15);
        assert_eq!(disk.usage_percent, 15.0);
    }

    #[test]
    fn disk_free_larger_than_total_saturates() {
        let disk = DiskMetric::from_bytes("/", 100, 250);
        assert_eq!(disk.used_bytes, 0);
        assert_eq!(disk.free_bytes, 100);
        assert_eq!(disk.usage_percent, 0.0);
    }
}
