// Shared test helpers
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use snapshot_reporter::models::*;

pub const GIB: u64 = 1024 * 1024 * 1024;
pub const MIB: u64 = 1024 * 1024;

/// 2026-01-15 09:30:00 local.
pub fn fixed_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 15)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
}

pub fn host() -> HostInfo {
    HostInfo {
        host_name: "testbox".into(),
        os_name: "Debian GNU/Linux 12".into(),
        os_version: "12".into(),
        processor_name: "Test CPU @ 2.00GHz".into(),
    }
}

/// CPU 82.3% (alert), RAM 60.0% (ok), Disk 95.5% (alert).
pub fn mixed_snapshot() -> Snapshot {
    Snapshot {
        taken_at: fixed_time(),
        host: host(),
        cpu: CpuMetric::new(82.3, 8),
        memory: MemoryMetric::from_bytes(10 * GIB, 6 * GIB),
        disk: DiskMetric::from_bytes("/", 1000 * GIB, 45 * GIB),
        network: NetworkMetric {
            bytes_sent: 1536 * MIB,
            bytes_received: 20 * GIB,
        },
    }
}

/// Everything comfortably under threshold.
pub fn calm_snapshot() -> Snapshot {
    Snapshot {
        taken_at: fixed_time(),
        host: HostInfo::default(),
        cpu: CpuMetric::new(12.0, 4),
        memory: MemoryMetric::from_bytes(16 * GIB, 8 * GIB),
        disk: DiskMetric::from_bytes("/", 100 * GIB, 70 * GIB),
        network: NetworkMetric {
            bytes_sent: 0,
            bytes_received: 0,
        },
    }
}
