//! Full scenario runs through the service layer, report export included.

use rl_app::{AppError, RunOptions, run_scenario};
use std::path::PathBuf;

const CONFIG: &str = r#"
identity:
  experiment: scenario-e2e
  reagent1: Acid
  reagent2: Base
volume:
  capacity_l: 100.0
  level_pct: { limit_min: 10.0, warning_min: 20.0, warning_max: 80.0, limit_max: 90.0 }
temperature:
  ambient_c: 20.0
  ideal_c: 25.0
  bounds_c: { limit_min: 0.0, warning_min: 10.0, warning_max: 60.0, limit_max: 80.0 }
pressure:
  ambient_atm: 1.0
  ideal_atm: 1.5
  bounds_atm: { limit_min: 0.5, warning_min: 0.8, warning_max: 2.0, limit_max: 3.0 }
flows:
  reagent1: { value: 600.0, min: 0.0, max: 1000.0 }
  reagent2: { value: 400.0, min: 0.0, max: 1000.0 }
  discharge: { value: 500.0, min: 0.0, max: 1000.0 }
  mixing: { value: 10.0, min: 0.0, max: 20.0 }
"#;

const SCENARIO: &str = r#"
events:
  - at_ms: 0
    action: { type: SetSwitch, switch: feed_reagent1, on: true }
  - at_ms: 3000
    action: { type: SetSwitch, switch: feed_reagent1, on: false }
  - at_ms: 3000
    action: { type: SetSwitch, switch: pressure_mode, on: true }
  - at_ms: 5000
    action: { type: Stop }
"#;

const NO_STOP_SCENARIO: &str = r#"
events:
  - at_ms: 0
    action: { type: SetSwitch, switch: feed_reagent1, on: true }
"#;

struct TestDirs {
    config: PathBuf,
    scenario: PathBuf,
    reports: PathBuf,
}

fn write_inputs(tag: &str, scenario: &str) -> TestDirs {
    let dir = std::env::temp_dir().join(format!("rl_app_run_{}_{}", tag, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let config = dir.join("config.yaml");
    let scenario_path = dir.join("scenario.yaml");
    std::fs::write(&config, CONFIG).expect("write config");
    std::fs::write(&scenario_path, scenario).expect("write scenario");
    TestDirs {
        config,
        scenario: scenario_path,
        reports: dir.join("Reports"),
    }
}

#[test]
fn scenario_runs_to_stop_and_exports_report() {
    let dirs = write_inputs("basic", SCENARIO);
    let options = RunOptions {
        reports_dir: Some(dirs.reports.clone()),
        ..RunOptions::default()
    };
    let summary = run_scenario(&dirs.config, &dirs.scenario, &options).expect("run scenario");

    // feed ran for ~300 ticks at 0.1 L/tick before the 3 s mark
    assert!(summary.volume_total_l > 29.0 && summary.volume_total_l < 31.0);
    // pressure mode ran for the last ~2 s and moved off ambient
    assert!(summary.pressure_atm > 1.0);
    // stop at 5 s of simulated time, 10 ms per tick
    assert!(summary.ticks >= 500 && summary.ticks <= 502);

    let report = std::fs::read_to_string(&summary.report_path).expect("read report");
    let lines: Vec<&str> = report.lines().collect();
    assert_eq!(lines[0], "Time,Action,Status");
    // feed on, feed off, pressure on, terminal row
    assert_eq!(summary.log_rows, 4);
    assert_eq!(lines.len(), 1 + summary.log_rows);
    assert!(lines[1].contains("Reagent 1 feed enabled"));
    assert!(lines.last().unwrap().contains("Simulation shut down"));

    let _ = std::fs::remove_dir_all(dirs.config.parent().unwrap());
}

#[test]
fn rerunning_the_scenario_rewrites_the_same_report() {
    let dirs = write_inputs("rerun", SCENARIO);
    let options = RunOptions {
        reports_dir: Some(dirs.reports.clone()),
        ..RunOptions::default()
    };
    let first = run_scenario(&dirs.config, &dirs.scenario, &options).expect("first run");
    let second = run_scenario(&dirs.config, &dirs.scenario, &options).expect("second run");
    assert_eq!(first.report_path, second.report_path);
    assert_eq!(first.log_rows, second.log_rows);

    let _ = std::fs::remove_dir_all(dirs.config.parent().unwrap());
}

#[test]
fn scenario_without_stop_is_rejected_up_front() {
    let dirs = write_inputs("nostop", NO_STOP_SCENARIO);
    let options = RunOptions {
        reports_dir: Some(dirs.reports.clone()),
        ..RunOptions::default()
    };
    match run_scenario(&dirs.config, &dirs.scenario, &options) {
        Err(AppError::Scenario(msg)) => assert!(msg.contains("Stop")),
        other => panic!("expected scenario error, got {other:?}"),
    }

    let _ = std::fs::remove_dir_all(dirs.config.parent().unwrap());
}
