// HTML snapshot report. Pure: same snapshot in, byte-identical document out.

mod style;

pub use style::{ALERT_COLOR, OK_COLOR, color, metric_class};

use crate::models::Snapshot;
use crate::thresholds::sanitize_percent;
use crate::units::{format_gb, format_mb, format_percent};
use crate::version;

/// Human-readable generation time embedded in the report.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One percentage card: labelled value row plus a progress bar.
struct Gauge<'a> {
    icon: &'a str,
    title: &'a str,
    label: &'a str,
    percent: f64,
    alert: bool,
    detail: String,
}

pub fn render(snapshot: &Snapshot) -> String {
    let cpu = &snapshot.cpu;
    let memory = &snapshot.memory;
    let disk = &snapshot.disk;
    let network = &snapshot.network;

    let gauges = [
        Gauge {
            icon: "🖥️",
            title: "Processor (CPU)",
            label: "CPU usage",
            percent: cpu.usage_percent,
            alert: cpu.alert,
            detail: format!("Cores: {}", cpu.logical_cores),
        },
        Gauge {
            icon: "💾",
            title: "Memory (RAM)",
            label: "RAM usage",
            percent: memory.usage_percent,
            alert: memory.alert,
            detail: format!(
                "Used: {} GB / Total: {} GB",
                format_gb(memory.used_bytes),
                format_gb(memory.total_bytes)
            ),
        },
        Gauge {
            icon: "💿",
            title: "Disk",
            label: "Disk usage",
            percent: disk.usage_percent,
            alert: disk.alert,
            detail: format!(
                "Mount: {} / Used: {} GB / Free: {} GB / Total: {} GB",
                escape(&disk.mount_point),
                format_gb(disk.used_bytes),
                format_gb(disk.free_bytes),
                format_gb(disk.total_bytes)
            ),
        },
    ];

    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str(
        "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    html.push_str(&format!(
        "<meta name=\"generator\" content=\"{}\">\n",
        escape(&version::generator())
    ));
    html.push_str("<title>System Monitoring Report</title>\n");
    html.push_str("<style>");
    html.push_str(style::STYLESHEET);
    html.push_str("</style>\n</head>\n<body>\n");

    html.push_str(&render_header(snapshot));
    for gauge in &gauges {
        html.push_str(&render_gauge(gauge));
    }
    html.push_str(&format!(
        r#"<div class="card">
    <h2>🌐 Network</h2>
    <div class="metric">
        <span>Data sent</span>
        <span class="value">{} MB</span>
    </div>
    <div class="metric">
        <span>Data received</span>
        <span class="value">{} MB</span>
    </div>
</div>
"#,
        format_mb(network.bytes_sent),
        format_mb(network.bytes_received)
    ));
    html.push_str(&format!(
        "<div class=\"timestamp\">\n    <p>Report generated on {}</p>\n</div>\n",
        snapshot.taken_at.format(TIMESTAMP_FORMAT)
    ));
    html.push_str("</body>\n</html>\n");
    html
}

fn render_header(snapshot: &Snapshot) -> String {
    let host = snapshot.host.describe();
    let subtitle = if host.is_empty() {
        "Point-in-time snapshot of this machine".to_string()
    } else {
        format!("Point-in-time snapshot of {}", escape(&host))
    };
    let processor = if snapshot.host.processor_name.is_empty() {
        String::new()
    } else {
        format!("    <p>{}</p>\n", escape(&snapshot.host.processor_name))
    };
    format!(
        "<div class=\"header\">\n    <h1>📊 System Monitoring Report</h1>\n    <p>{}</p>\n{}</div>\n",
        subtitle, processor
    )
}

fn render_gauge(gauge: &Gauge<'_>) -> String {
    let percent = format_percent(gauge.percent);
    // Width stays inside the bar.
    let width = format_percent(sanitize_percent(gauge.percent));
    format!(
        r#"<div class="card">
    <h2>{icon} {title}</h2>
    <div class="{class}">
        <span>{label}</span>
        <span class="value">{percent}%</span>
    </div>
    <div class="progress-bar">
        <div class="progress-fill" style="width: {width}%; background-color: {color}">{percent}%</div>
    </div>
    <p class="detail">{detail}</p>
</div>
"#,
        icon = gauge.icon,
        title = gauge.title,
        class = metric_class(gauge.alert),
        label = gauge.label,
        percent = percent,
        width = width,
        color = color(gauge.alert),
        detail = gauge.detail,
    )
}

/// Minimal escaping for text pulled from the host (hostnames, mount paths).
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
