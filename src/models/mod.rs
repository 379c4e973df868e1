// Domain models for a single snapshot run

mod metrics;
mod snapshot;

pub use metrics::{CpuMetric, DiskMetric, MemoryMetric, NetworkMetric};
pub use snapshot::{HostInfo, Snapshot};
