use serde::Deserialize;
use std::path::Path;

/// Optional run settings. Thresholds are fixed in `thresholds` and not configurable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub report: ReportConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory the HTML report is written into; must already exist.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
    /// Path whose filesystem is reported as "Disk".
    #[serde(default = "default_mount_point")]
    pub mount_point: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            mount_point: default_mount_point(),
        }
    }
}

fn default_output_dir() -> String {
    ".".into()
}

fn default_mount_point() -> String {
    "/".into()
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingConfig {
    /// CPU usage is averaged over this window.
    #[serde(default = "default_cpu_sample_interval_ms")]
    pub cpu_sample_interval_ms: u64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            cpu_sample_interval_ms: default_cpu_sample_interval_ms(),
        }
    }
}

fn default_cpu_sample_interval_ms() -> u64 {
    1000
}

/// Read when `CONFIG_FILE` is unset; absence means built-in defaults.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

impl AppConfig {
    /// `CONFIG_FILE` must name a readable file; otherwise `config.toml` is used if present.
    pub fn load() -> anyhow::Result<Self> {
        match std::env::var("CONFIG_FILE") {
            Ok(path) => Self::load_from_path(Path::new(&path)),
            Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => {
                Self::load_from_path(Path::new(DEFAULT_CONFIG_PATH))
            }
            Err(_) => {
                tracing::debug!("no config file; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from_path(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("config {}: {}", path.display(), e))?;
        Self::load_from_str(&s)
    }

    /// Parse and validate config from a string (e.g. for tests).
    pub fn load_from_str(s: &str) -> anyhow::Result<Self> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.report.output_dir.trim().is_empty(),
            "report.output_dir must be non-empty"
        );
        anyhow::ensure!(
            !self.report.mount_point.trim().is_empty(),
            "report.mount_point must be non-empty"
        );
        let min_ms = sysinfo::MINIMUM_CPU_UPDATE_INTERVAL.as_millis() as u64;
        anyhow::ensure!(
            self.sampling.cpu_sample_interval_ms >= min_ms,
            "sampling.cpu_sample_interval_ms must be >= {}, got {}",
            min_ms,
            self.sampling.cpu_sample_interval_ms
        );
        Ok(())
    }

    pub fn cpu_sample_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.sampling.cpu_sample_interval_ms)
    }
}
