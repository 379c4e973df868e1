// Terminal summary: plain UTF-8 lines on stdout, separate from tracing output on stderr.

use crate::models::Snapshot;
use crate::units::format_percent;
use std::path::Path;

pub const ALERT_MARKER: &str = "⚠️ ALERT";
pub const OK_MARKER: &str = "✅";

pub fn marker(alert: bool) -> &'static str {
    if alert { ALERT_MARKER } else { OK_MARKER }
}

pub fn start_notice() -> &'static str {
    "🔍 Analysing system..."
}

/// Heading plus one line per thresholded metric, in CPU, RAM, Disk order.
pub fn summary_lines(snapshot: &Snapshot) -> Vec<String> {
    let line = |label: &str, percent: f64, alert: bool| {
        format!("{}: {}% {}", label, format_percent(percent), marker(alert))
    };
    vec![
        String::new(),
        "📊 Results:".to_string(),
        line("CPU", snapshot.cpu.usage_percent, snapshot.cpu.alert),
        line("RAM", snapshot.memory.usage_percent, snapshot.memory.alert),
        line("Disk", snapshot.disk.usage_percent, snapshot.disk.alert),
    ]
}

pub fn completion_lines(path: &Path) -> Vec<String> {
    vec![
        String::new(),
        format!("✅ Report written: {}", path.display()),
        "📂 Open the file in your browser to view the full report".to_string(),
    ]
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}
