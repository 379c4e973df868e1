// One run: collect → evaluate → print summary → render → write.

use crate::config::AppConfig;
use crate::error::ReportError;
use crate::models::Snapshot;
use crate::report;
use crate::summary;
use crate::sysinfo_repo::SysinfoRepo;
use crate::writer;
use std::path::{Path, PathBuf};

/// Reads every metric in turn. The first failure aborts; nothing is substituted.
pub async fn collect_snapshot(
    repo: &SysinfoRepo,
    mount_point: &str,
) -> Result<Snapshot, ReportError> {
    let cpu = repo.collect_cpu().await.inspect_err(log_failure)?;
    let memory = repo.collect_memory().await.inspect_err(log_failure)?;
    let disk = repo.collect_disk(mount_point).await.inspect_err(log_failure)?;
    let network = repo.collect_network().await.inspect_err(log_failure)?;
    let host = repo.collect_host_info().await;

    let snapshot = Snapshot {
        taken_at: chrono::Local::now().naive_local(),
        host,
        cpu,
        memory,
        disk,
        network,
    };
    tracing::info!(
        cpu_percent = snapshot.cpu.usage_percent,
        memory_percent = snapshot.memory.usage_percent,
        disk_percent = snapshot.disk.usage_percent,
        alerts = snapshot.alert_count(),
        "snapshot collected"
    );
    Ok(snapshot)
}

/// Prints the summary, then renders and writes. The summary is already out
/// if the write fails.
pub fn publish(snapshot: &Snapshot, output_dir: &Path) -> Result<PathBuf, ReportError> {
    summary::print_lines(&summary::summary_lines(snapshot));

    let html = report::render(snapshot);
    let path = writer::write_report(output_dir, &snapshot.taken_at, &html).inspect_err(|e| {
        tracing::error!(error = %e, operation = "write_report", "report not written");
    })?;

    summary::print_lines(&summary::completion_lines(&path));
    Ok(path)
}

pub async fn run(repo: &SysinfoRepo, config: &AppConfig) -> Result<PathBuf, ReportError> {
    println!("{}", summary::start_notice());
    let snapshot = collect_snapshot(repo, &config.report.mount_point).await?;
    publish(&snapshot, Path::new(&config.report.output_dir))
}

fn log_failure(e: &ReportError) {
    tracing::error!(error = %e, "metric collection failed");
}
