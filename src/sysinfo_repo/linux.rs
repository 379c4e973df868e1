// Linux-specific identity helpers: /proc/cpuinfo and /etc/os-release.

/// First "model name" from /proc/cpuinfo. sysinfo sometimes reports "cpu0" instead.
pub(super) fn read_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/proc/cpuinfo").ok()?;
        return content
            .lines()
            .filter(|line| line.starts_with("model name"))
            .find_map(|line| {
                let (_, value) = line.split_once(':')?;
                let value = value.trim();
                (!value.is_empty() && value != "cpu0").then(|| value.to_string())
            });
    }
    #[cfg(not(target_os = "linux"))]
    None
}

/// Distro name from /etc/os-release: PRETTY_NAME, else NAME.
pub(super) fn read_os_pretty_name() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        let content = std::fs::read_to_string("/etc/os-release").ok()?;
        return os_release_value(&content, "PRETTY_NAME")
            .or_else(|| os_release_value(&content, "NAME"));
    }
    #[cfg(not(target_os = "linux"))]
    None
}

#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn os_release_value(content: &str, key: &str) -> Option<String> {
    content.lines().find_map(|line| {
        let value = line.strip_prefix(key)?.strip_prefix('=')?.trim_matches('"');
        (!value.is_empty()).then(|| value.to_string())
    })
}
