// Inline stylesheet and the alert/ok presentation mapping

/// Fill color for a metric over its threshold.
pub const ALERT_COLOR: &str = "#e74c3c";

/// Fill color for a metric within its threshold.
pub const OK_COLOR: &str = "#2ecc71";

pub fn color(alert: bool) -> &'static str {
    if alert { ALERT_COLOR } else { OK_COLOR }
}

/// Class attribute for a metric row; alerting rows also get `alert`.
pub fn metric_class(alert: bool) -> &'static str {
    if alert { "metric alert" } else { "metric" }
}

pub(super) const STYLESHEET: &str = r#"
    body {
        font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
        max-width: 900px;
        margin: 40px auto;
        padding: 20px;
        background-color: #f5f5f5;
    }
    .header {
        background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
        color: white;
        padding: 30px;
        border-radius: 10px;
        margin-bottom: 30px;
        text-align: center;
    }
    .card {
        background: white;
        padding: 25px;
        margin: 20px 0;
        border-radius: 8px;
        box-shadow: 0 2px 10px rgba(0,0,0,0.1);
    }
    .metric {
        display: flex;
        justify-content: space-between;
        align-items: center;
        padding: 15px;
        margin: 10px 0;
        background: #f8f9fa;
        border-radius: 5px;
        border-left: 4px solid #667eea;
    }
    .alert {
        border-left-color: #e74c3c !important;
        background: #ffe5e5;
    }
    .value {
        font-size: 24px;
        font-weight: bold;
    }
    .progress-bar {
        width: 100%;
        height: 25px;
        background: #e0e0e0;
        border-radius: 12px;
        overflow: hidden;
        margin-top: 10px;
    }
    .progress-fill {
        height: 100%;
        display: flex;
        align-items: center;
        justify-content: center;
        color: white;
        font-weight: bold;
    }
    .detail {
        margin-top: 10px;
        color: #666;
    }
    .timestamp {
        text-align: center;
        color: #666;
        margin-top: 30px;
    }
"#;
