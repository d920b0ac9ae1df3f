//! End-to-end checks against the built `daywatch` binary.
//!
//! Only paths that never reach `cargo watch` are exercised here: validation,
//! `--dry-run` and `--list`.

use serde_json::Value;
use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn daywatch(args: &[&str], dir: &TempDir) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daywatch"))
        .args(args)
        .current_dir(dir.path())
        .output()
        .expect("Failed to execute daywatch")
}

fn stdout_json(output: &Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

#[test]
fn no_arguments_reports_missing_day() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&[], &tmp);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No day supplied"));
    assert!(output.stdout.is_empty());
}

#[test]
fn empty_day_is_treated_as_missing() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&[""], &tmp);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No day supplied"));
}

#[test]
fn missing_day_wins_over_dry_run() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["--dry-run"], &tmp);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn dry_run_day3_targets_day3_without_features() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["3", "--dry-run", "--json"], &tmp);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["command"], "dry-run");
    assert_eq!(json["target"], "day3");
    assert_eq!(json["feature"], "");
    assert_eq!(json["mode"], "watch");
    assert_eq!(json["spec"]["program"], "cargo");
    assert_eq!(json["spec"]["env"]["RUST_BACKTRACE"], "0");

    let x_arg = json["spec"]["args"][2].as_str().unwrap();
    let inner = shell_words::split(x_arg).unwrap();
    assert_eq!(
        inner,
        vec!["test", "--release", "--features", "", "--bin", "day3", "--", "--nocapture"]
    );
}

#[test]
fn dry_run_day12_forwards_feature() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["12", "parallel", "--dry-run", "--json"], &tmp);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["target"], "day12");
    assert_eq!(json["feature"], "parallel");
}

#[test]
fn dry_run_once_uses_plain_cargo_test() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["7", "--once", "--dry-run", "--json"], &tmp);

    let json = stdout_json(&output);
    assert_eq!(json["mode"], "once");
    let args: Vec<&str> = json["spec"]["args"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(
        args,
        vec!["test", "--release", "--features", "", "--bin", "day7", "--", "--nocapture"]
    );
}

#[test]
fn dry_run_text_is_a_shell_line() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["3", "--dry-run"], &tmp);
    assert_eq!(output.status.code(), Some(0));

    let line = String::from_utf8(output.stdout).unwrap();
    let words = shell_words::split(line.trim()).unwrap();
    assert_eq!(&words[..4], &["RUST_BACKTRACE=0", "cargo", "watch", "-x"]);
}

#[test]
fn list_reports_day_targets() {
    let tmp = TempDir::new().unwrap();
    let bin = tmp.path().join("src/bin");
    fs::create_dir_all(&bin).unwrap();
    for name in ["day02.rs", "day01.rs", "day11.rs", "utils.rs"] {
        fs::write(bin.join(name), "fn main() {}\n").unwrap();
    }

    let output = daywatch(&["--list", "--json"], &tmp);
    assert_eq!(output.status.code(), Some(0));

    let json = stdout_json(&output);
    assert_eq!(json["count"], 3);
    let names: Vec<&str> = json["targets"]
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["day01", "day02", "day11"]);
    assert_eq!(json["targets"][0]["day"], 1);
    assert_eq!(json["targets"][0]["path"], "src/bin/day01.rs");
}

#[test]
fn list_without_bin_dir_is_empty() {
    let tmp = TempDir::new().unwrap();
    let output = daywatch(&["--list", "--json"], &tmp);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_json(&output)["count"], 0);
}
