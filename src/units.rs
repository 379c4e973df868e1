// Binary unit conversions and the fixed-precision formats used by the report and summary.

/// Bytes per GB as displayed (binary, 1024³).
pub const BYTES_PER_GB: f64 = 1024.0 * 1024.0 * 1024.0;

/// Bytes per MB as displayed (binary, 1024²).
pub const BYTES_PER_MB: f64 = 1024.0 * 1024.0;

pub fn bytes_to_gb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_GB
}

pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB
}

/// Two decimals, no unit suffix (e.g. "8.00").
pub fn format_gb(bytes: u64) -> String {
    format!("{:.2}", bytes_to_gb(bytes))
}

/// Two decimals, no unit suffix.
pub fn format_mb(bytes: u64) -> String {
    format!("{:.2}", bytes_to_mb(bytes))
}

/// One decimal, no percent sign (e.g. "82.3").
pub fn format_percent(percent: f64) -> String {
    format!("{:.1}", percent)
}
