// Live collector tests; only assert what any supported host can satisfy.

use snapshot_reporter::error::{MetricKind, ReportError};
use snapshot_reporter::sysinfo_repo::SysinfoRepo;
use std::time::Duration;

fn repo() -> SysinfoRepo {
    SysinfoRepo::new(Duration::from_millis(250))
}

#[tokio::test]
async fn test_collect_cpu_in_range() {
    let cpu = repo().collect_cpu().await.expect("cpu");
    assert!(cpu.logical_cores > 0);
    assert!((0.0..=100.0).contains(&cpu.usage_percent));
    assert_eq!(cpu.alert, cpu.usage_percent > 80.0);
}

#[tokio::test]
async fn test_collect_memory_consistent() {
    let memory = repo().collect_memory().await.expect("memory");
    assert!(memory.total_bytes > 0);
    assert!(memory.used_bytes <= memory.total_bytes);
    assert!((0.0..=100.0).contains(&memory.usage_percent));
}

#[tokio::test]
async fn test_collect_network_does_not_fail() {
    repo().collect_network().await.expect("network");
}

#[tokio::test]
async fn test_collect_disk_missing_path() {
    let err = repo()
        .collect_disk("/no/such/mount/point")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ReportError::Collection {
            metric: MetricKind::Disk,
            ..
        }
    ));
}

#[tokio::test]
async fn test_collect_host_info_never_fails() {
    let host = repo().collect_host_info().await;
    assert!(!host.os_name.is_empty());
}

#[test]
fn test_sample_interval_raised_to_minimum() {
    let repo = SysinfoRepo::new(Duration::ZERO);
    assert_eq!(repo.cpu_sample_interval(), sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
}
