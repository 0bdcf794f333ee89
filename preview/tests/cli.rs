use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Config file with a short duration, so frame counts stay small
fn short_config(dir: &tempfile::TempDir) -> PathBuf {
    let path = dir.path().join("stats.toml");
    fs::write(&path, "duration_ms = 200\nstagger_delay_ms = 50\n").unwrap();
    path
}

#[test]
fn page_prints_final_text() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("moonshot-preview")
        .arg("page")
        .arg(fixture_path("stats.html"))
        .arg("--config")
        .arg(short_config(&dir))
        .args(["--locale", "standard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("150+\t150+"))
        .stdout(predicate::str::contains("$5M\t$5M"))
        .stdout(predicate::str::contains("1234567\t1,234,567"))
        .stdout(predicate::str::contains("coming soon").not());
}

#[test]
fn page_european_grouping() {
    let dir = tempfile::tempdir().unwrap();

    cargo_bin_cmd!("moonshot-preview")
        .arg("page")
        .arg(fixture_path("stats.html"))
        .arg("--config")
        .arg(short_config(&dir))
        .args(["--locale", "european"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1.234.567"));
}

#[test]
fn page_json_report() {
    let dir = tempfile::tempdir().unwrap();

    let output = cargo_bin_cmd!("moonshot-preview")
        .arg("page")
        .arg(fixture_path("stats.html"))
        .arg("--config")
        .arg(short_config(&dir))
        .args(["--locale", "standard", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["locale"], "standard");
    let stats = report["stats"].as_array().unwrap();
    assert_eq!(stats.len(), 3);
    assert_eq!(stats[1]["prefix"], "$");
    assert_eq!(stats[1]["target"], 5_000_000.0);
    assert_eq!(stats[2]["text"], "1,234,567");
}

#[test]
fn page_timeline_ends_on_targets() {
    let dir = tempfile::tempdir().unwrap();

    let output = cargo_bin_cmd!("moonshot-preview")
        .arg("page")
        .arg(fixture_path("stats.html"))
        .arg("--config")
        .arg(short_config(&dir))
        .args(["--locale", "standard", "--timeline", "--frame-ms", "10"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines.len() > 2);
    assert!(lines.last().unwrap().ends_with("150+  $5M  1,234,567"));
}

#[test]
fn page_with_missing_file_fails() {
    cargo_bin_cmd!("moonshot-preview")
        .args(["page", "nonexistent.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn page_with_bad_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("stats.toml");
    fs::write(&config, "duration_ms = \"slow\"").unwrap();

    cargo_bin_cmd!("moonshot-preview")
        .arg("page")
        .arg(fixture_path("stats.html"))
        .arg("--config")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn value_prints_frames() {
    cargo_bin_cmd!("moonshot-preview")
        .args(["value", "2K", "--steps", "2", "--easing", "linear"])
        .assert()
        .success()
        .stdout("0.00\t0K\n0.50\t1K\n1.00\t2K\n");
}

#[test]
fn value_with_prefix() {
    cargo_bin_cmd!("moonshot-preview")
        .args(["value", "$5M", "--prefix", "$", "--steps", "1"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("1.00\t$5M\n"));
}

#[test]
fn value_rejects_non_numeric_literal() {
    cargo_bin_cmd!("moonshot-preview")
        .args(["value", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No numeric value"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("moonshot-preview")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Preview animated stat counters"));
}

#[test]
fn page_rejects_frame_intervals_that_stall_the_clock() {
    for interval in ["0", "-16", "NaN", "inf"] {
        cargo_bin_cmd!("moonshot-preview")
            .arg("page")
            .arg(fixture_path("stats.html"))
            .arg(format!("--frame-ms={interval}"))
            .timeout(std::time::Duration::from_secs(10))
            .assert()
            .failure()
            .stderr(predicate::str::contains("frame interval must be a positive number"));
    }
}
