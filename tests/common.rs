#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rdowntime::store::EventStore;
use rdowntime::utils::clock::ManualClock;
use std::env;
use std::fs;
use std::path::PathBuf;

/// `rdowntime` with HOME pointed at a scratch directory, so a real user
/// configuration never leaks into a test.
pub fn rdt(name: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rdowntime");
    cmd.env("HOME", scratch_dir(name))
        .env("APPDATA", scratch_dir(name))
        .env_remove("RDOWNTIME_LOG");
    cmd
}

pub fn scratch_dir(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdowntime_home", name));
    fs::create_dir_all(&path).ok();
    path
}

/// Create a unique event log path inside the system temp dir and remove any existing file
pub fn setup_test_log(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rdowntime.csv", name));
    let log_path = path.to_string_lossy().to_string();
    fs::remove_file(&log_path).ok();
    log_path
}

/// Write a log file verbatim (header included by the caller)
pub fn write_log(path: &str, lines: &[&str]) {
    let mut content = lines.join("\n");
    content.push('\n');
    fs::write(path, content).expect("write test log");
}

pub fn ts(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").expect("valid test timestamp")
}

pub fn manual_clock(start: &str) -> ManualClock {
    ManualClock::new(ts(start))
}

pub fn store_with_clock(path: &str, clock: &ManualClock) -> EventStore {
    EventStore::with_clock(path, clock.shared())
}
