// Fixed alert thresholds (percent) and the comparison that applies them.

/// CPU usage above this is an alert.
pub const CPU_THRESHOLD: f64 = 80.0;

/// Memory usage above this is an alert.
pub const MEMORY_THRESHOLD: f64 = 85.0;

/// Disk usage above this is an alert.
pub const DISK_THRESHOLD: f64 = 90.0;

/// Strictly greater-than: a reading exactly at the threshold is not an alert.
pub fn exceeds(percent: f64, threshold: f64) -> bool {
    percent > threshold
}

/// Clamp a computed percentage into [0, 100]; NaN and infinities read as 0.
pub fn sanitize_percent(percent: f64) -> f64 {
    if percent.is_finite() {
        percent.clamp(0.0, 100.0)
    } else {
        0.0
    }
}

/// `used / total * 100`, or 0 when nothing is there to use.
/// Scales before dividing so round ratios (17 of 20) land exactly on 85.0.
pub fn percent_of(used: u64, total: u64) -> f64 {
    if total > 0 {
        sanitize_percent((used as f64 * 100.0) / total as f64)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_maps_non_finite_to_zero() {
        assert_eq!(sanitize_percent(f64::NAN), 0.0);
        assert_eq!(sanitize_percent(f64::INFINITY), 0.0);
        assert_eq!(sanitize_percent(-3.0), 0.0);
        assert_eq!(sanitize_percent(140.0), 100.0);
    }

    #[test]
    fn percent_of_zero_total_is_zero() {
        assert_eq!(percent_of(10, 0), 0.0);
        assert_eq!(percent_of(1, 4), 25.0);
    }
}
