// Report file naming and persistence tests

mod common;

use common::*;
use snapshot_reporter::error::ReportError;
use snapshot_reporter::writer::{report_filename, write_report};

#[test]
fn test_report_filename_format() {
    assert_eq!(
        report_filename(&fixed_time()),
        "system_report_20260115_093000.html"
    );
}

#[test]
fn test_write_report_utf8() {
    let dir = tempfile::TempDir::new().unwrap();
    let html = "<p>📊 Rapport généré</p>";
    let path = write_report(dir.path(), &fixed_time(), html).expect("write");
    assert_eq!(path, dir.path().join("system_report_20260115_093000.html"));
    assert_eq!(std::fs::read_to_string(&path).unwrap(), html);
}

#[test]
fn test_write_report_same_second_overwrites() {
    let dir = tempfile::TempDir::new().unwrap();
    write_report(dir.path(), &fixed_time(), "first").unwrap();
    let path = write_report(dir.path(), &fixed_time(), "second").unwrap();
    assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn test_write_report_missing_dir_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = dir.path().join("does-not-exist");
    let err = write_report(&missing, &fixed_time(), "x").unwrap_err();
    match err {
        ReportError::Write { path, .. } => {
            assert_eq!(path, missing.join("system_report_20260115_093000.html"));
            assert!(!path.exists());
        }
        other => panic!("expected write error, got {:?}", other),
    }
    assert!(!missing.exists());
}

#[test]
fn test_write_report_failed_rename_leaves_no_files() {
    let dir = tempfile::TempDir::new().unwrap();
    // A non-empty directory squatting on the report name makes the final rename fail
    // after the content has been written.
    let target = dir.path().join("system_report_20260115_093000.html");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(target.join("keep"), "x").unwrap();

    let err = write_report(dir.path(), &fixed_time(), "<p>report</p>").unwrap_err();
    assert!(matches!(err, ReportError::Write { .. }));

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["system_report_20260115_093000.html".to_string()]);
    assert!(target.is_dir());
    assert_eq!(std::fs::read_to_string(target.join("keep")).unwrap(), "x");
}

#[test]
fn test_write_report_leaves_no_temp_files_on_success() {
    let dir = tempfile::TempDir::new().unwrap();
    write_report(dir.path(), &fixed_time(), "ok").unwrap();
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["system_report_20260115_093000.html".to_string()]);
}
