// Host identity and the grouped readings of one run

use chrono::NaiveDateTime;

use super::{CpuMetric, DiskMetric, MemoryMetric, NetworkMetric};

/// Best-effort host identity for the report header; unknown fields are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostInfo {
    pub host_name: String,
    pub os_name: String,
    pub os_version: String,
    pub processor_name: String,
}

impl HostInfo {
    /// "name on OS version", skipping whatever is unknown. Empty when nothing is known.
    pub fn describe(&self) -> String {
        let os = [self.os_name.as_str(), self.os_version.as_str()]
            .iter()
            .filter(|s| !s.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");
        match (self.host_name.is_empty(), os.is_empty()) {
            (false, false) => format!("{} on {}", self.host_name, os),
            (false, true) => self.host_name.clone(),
            (true, false) => os,
            (true, true) => String::new(),
        }
    }
}

/// Everything a report is rendered from. `taken_at` is local wall-clock time.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub taken_at: NaiveDateTime,
    pub host: HostInfo,
    pub cpu: CpuMetric,
    pub memory: MemoryMetric,
    pub disk: DiskMetric,
    pub network: NetworkMetric,
}

impl Snapshot {
    pub fn alert_count(&self) -> usize {
        [self.cpu.alert, self.memory.alert, self.disk.alert]
            .iter()
            .filter(|a| **a)
            .count()
    }
}
