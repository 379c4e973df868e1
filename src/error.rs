// Run-fatal errors: a metric could not be read, or the report could not be written.

use std::fmt;
use std::path::PathBuf;

/// Which reading failed; named in the user-facing error line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Cpu,
    Memory,
    Disk,
    Network,
}

impl fmt::Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MetricKind::Cpu => "CPU",
            MetricKind::Memory => "memory",
            MetricKind::Disk => "disk",
            MetricKind::Network => "network",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The OS could not produce a reading; aborts before anything is rendered.
    #[error("failed to collect {metric} metrics: {reason}")]
    Collection { metric: MetricKind, reason: String },

    /// The rendered report could not be persisted.
    #[error("failed to write report to {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl ReportError {
    pub(crate) fn collection(metric: MetricKind, reason: impl Into<String>) -> Self {
        ReportError::Collection {
            metric,
            reason: reason.into(),
        }
    }
}
