use chrono::NaiveTime;
use rl_report::ReportStore;
use rl_sim::{ActionLog, STATUS_COMPLETED};
use std::path::PathBuf;

fn temp_store(tag: &str) -> (ReportStore, PathBuf) {
    let dir = std::env::temp_dir().join(format!("rl_report_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    let store = ReportStore::new(dir.clone()).expect("create store");
    (store, dir)
}

fn sample_log() -> ActionLog {
    let mut log = ActionLog::new();
    let t1 = NaiveTime::from_hms_opt(9, 30, 0).unwrap();
    let t2 = NaiveTime::from_hms_opt(9, 30, 5).unwrap();
    log.append(t1, "Reagent 1 feed enabled");
    log.append(t2, "All processes stopped. Simulation shut down.");
    log
}

#[test]
fn report_has_header_and_one_row_per_entry() {
    let (store, dir) = temp_store("rows");
    let log = sample_log();
    let path = store
        .save_report("exp-01", log.entries(), "2026-01-01T00:00:00Z")
        .expect("save report");

    let content = std::fs::read_to_string(&path).expect("read report");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Time,Action,Status");
    assert_eq!(
        lines[1],
        format!("09:30:00,Reagent 1 feed enabled,{STATUS_COMPLETED}")
    );
    assert!(lines[2].starts_with("09:30:05,"));

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn export_is_idempotent() {
    let (store, dir) = temp_store("idem");
    let log = sample_log();
    let first = store
        .save_report("exp-02", log.entries(), "2026-01-01T00:00:00Z")
        .expect("first save");
    let second = store
        .save_report("exp-02", log.entries(), "2026-01-02T00:00:00Z")
        .expect("second save");
    assert_eq!(first, second);

    let content = std::fs::read_to_string(&second).expect("read report");
    assert_eq!(content.lines().count(), 3);

    // the manifest reflects the latest export
    let manifest = store.load_manifest("exp-02").expect("manifest");
    assert_eq!(manifest.rows, 2);
    assert_eq!(manifest.written_at, "2026-01-02T00:00:00Z");

    let _ = std::fs::remove_dir_all(dir);
}

#[test]
fn empty_log_exports_header_only() {
    let (store, dir) = temp_store("empty");
    let log = ActionLog::new();
    let path = store
        .save_report("exp-03", log.entries(), "2026-01-01T00:00:00Z")
        .expect("save report");
    let content = std::fs::read_to_string(&path).expect("read report");
    assert_eq!(content, "Time,Action,Status\n");

    let _ = std::fs::remove_dir_all(dir);
}
