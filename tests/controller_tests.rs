mod common;
use chrono::{Local, TimeDelta};
use common::{manual_clock, setup_test_log, store_with_clock, write_log};
use rdowntime::core::controller::{StatusColor, StatusController};
use rdowntime::core::history::SEPARATOR;
use rdowntime::core::recovery;
use rdowntime::errors::AppError;
use rdowntime::models::Status;
use rdowntime::models::event::format_timestamp;
use rdowntime::store::EventStore;
use std::fs;

#[test]
fn test_fresh_start_is_available() {
    let path = setup_test_log("ctl_fresh");
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut ctl = StatusController::new(store_with_clock(&path, &clock));

    assert!(ctl.is_available());
    assert_eq!(ctl.button_label(), "Switch to Unavailable");
    assert_eq!(ctl.status_view().text, "ONLINE");
    assert_eq!(ctl.status_view().color, StatusColor::Green);
    assert!(!ctl.timer().is_running());
    assert_eq!(ctl.tick(), "00:00:00");
    assert!(ctl.history().is_empty());
    assert_eq!(ctl.last_downtime(), None);
}

#[test]
fn test_toggle_cycle_logs_and_reports_downtime() {
    let path = setup_test_log("ctl_cycle");
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut ctl = StatusController::new(store_with_clock(&path, &clock));

    let down = ctl.toggle();
    assert_eq!(down.status, Status::Unavailable);
    assert!(down.persisted);
    assert_eq!(down.downtime_ms, None);
    assert!(!ctl.is_available());
    assert_eq!(ctl.button_label(), "Switch to Available");
    assert_eq!(ctl.status_view().text, "OFFLINE");
    assert_eq!(ctl.status_view().color, StatusColor::Red);
    assert!(ctl.timer().is_running());
    assert_eq!(ctl.history().len(), 1);

    clock.advance_millis(90_000);
    assert_eq!(ctl.tick(), "00:01:30");

    let up = ctl.toggle();
    assert_eq!(up.status, Status::Available);
    assert!(up.persisted);
    assert_eq!(up.downtime_ms, Some(90_000));
    assert_eq!(ctl.last_downtime(), Some("Last Downtime: 00:01:30"));
    assert!(!ctl.timer().is_running());
    assert_eq!(ctl.elapsed_text(), "00:00:00");

    let history = ctl.history();
    assert_eq!(history.len(), 3);
    assert_eq!(history[0], SEPARATOR);
    assert!(history[1].ends_with(">>> DOWNTIME: 00:01:30 <<<"));

    let events = EventStore::new(&path).read_all().unwrap();
    assert_eq!(events.len(), 2);
}

#[test]
fn test_going_unavailable_again_clears_last_downtime() {
    let path = setup_test_log("ctl_last_downtime");
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut ctl = StatusController::new(store_with_clock(&path, &clock));

    ctl.toggle();
    clock.advance_millis(5_000);
    ctl.toggle();
    assert!(ctl.last_downtime().is_some());

    clock.advance_millis(5_000);
    ctl.toggle();
    assert_eq!(ctl.last_downtime(), None);
}

#[test]
fn test_recovery_reads_past_a_stray_quote() {
    let path = setup_test_log("ctl_recovery_quote");
    write_log(
        &path,
        &[
            "timestamp,status",
            "2024-01-15 08:00:00,UNAVAILABLE",
            "\"oops,AVAILABLE",
            "2024-01-15 09:00:00,AVAILABLE",
            "2024-01-15 10:00:00,UNAVAILABLE",
        ],
    );
    let clock = manual_clock("2024-01-15 10:01:30");
    let store = store_with_clock(&path, &clock);

    let recovered = recovery::resolve(&store, &clock);
    assert!(!recovered.available);
    assert_eq!(recovered.elapsed_ms, 90_000);
}

#[test]
fn test_recovery_resumes_open_downtime() {
    let path = setup_test_log("ctl_recovery_manual");
    write_log(
        &path,
        &["timestamp,status", "2024-01-15 09:00:00,UNAVAILABLE"],
    );
    let clock = manual_clock("2024-01-15 09:01:30");
    let store = store_with_clock(&path, &clock);

    let recovered = recovery::resolve(&store, &clock);
    assert!(!recovered.available);
    assert_eq!(recovered.elapsed_ms, 90_000);

    let mut ctl = StatusController::new(store);
    assert!(!ctl.is_available());
    assert!(ctl.timer().is_running());
    assert_eq!(ctl.tick(), "00:01:30");

    clock.advance_millis(30_000);
    let up = ctl.toggle();
    assert_eq!(up.downtime_ms, Some(120_000));
    assert_eq!(ctl.last_downtime(), Some("Last Downtime: 00:02:00"));
}

#[test]
fn test_recovery_with_system_clock_never_restarts_from_zero() {
    let path = setup_test_log("ctl_recovery_system");
    let started = Local::now().naive_local() - TimeDelta::seconds(90);
    let line = format!("{},UNAVAILABLE", format_timestamp(&started));
    write_log(&path, &["timestamp,status", line.as_str()]);

    let mut ctl = StatusController::new(EventStore::new(&path));
    ctl.tick();

    assert!(!ctl.is_available());
    assert!(ctl.timer().elapsed_ms() >= 90_000);
}

#[test]
fn test_recovery_when_last_event_is_available() {
    let path = setup_test_log("ctl_recovery_available");
    write_log(
        &path,
        &[
            "timestamp,status",
            "2024-01-15 09:00:00,UNAVAILABLE",
            "2024-01-15 09:15:32,AVAILABLE",
        ],
    );
    let clock = manual_clock("2024-01-15 10:00:00");
    let ctl = StatusController::new(store_with_clock(&path, &clock));

    assert!(ctl.is_available());
    assert!(!ctl.timer().is_running());
    assert_eq!(ctl.history().len(), 3);
}

#[test]
fn test_restart_between_toggles_keeps_downtime() {
    let path = setup_test_log("ctl_restart");
    let clock = manual_clock("2024-01-15 09:00:00");

    let mut first = StatusController::new(store_with_clock(&path, &clock));
    first.toggle();
    drop(first);

    clock.advance_millis(30_000);
    let mut second = StatusController::new(store_with_clock(&path, &clock));
    assert!(!second.is_available());
    assert_eq!(second.tick(), "00:00:30");

    clock.advance_millis(60_000);
    let up = second.toggle();
    assert_eq!(up.downtime_ms, Some(90_000));
}

#[test]
fn test_failed_append_still_flips_state() {
    let dir = std::env::temp_dir().join("ctl_unwritable_rdowntime");
    fs::create_dir_all(&dir).unwrap();
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut ctl = StatusController::new(EventStore::with_clock(&dir, clock.shared()));

    let outcome = ctl.toggle();

    assert_eq!(outcome.status, Status::Unavailable);
    assert!(!outcome.persisted);
    assert!(outcome.error.is_some());
    assert!(!ctl.is_available());
    assert!(ctl.timer().is_running());
    assert!(ctl.history().is_empty());
}

#[test]
fn test_clear_history_empties_display_and_store() {
    let path = setup_test_log("ctl_clear");
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut ctl = StatusController::new(store_with_clock(&path, &clock));

    ctl.toggle();
    clock.advance_millis(1_000);
    ctl.toggle();
    assert_eq!(ctl.history().len(), 3);

    ctl.clear_history().unwrap();

    assert!(ctl.history().is_empty());
    assert!(EventStore::new(&path).read_all().unwrap().is_empty());
}

#[test]
fn test_clear_failure_keeps_stale_history() {
    let dir = std::env::temp_dir().join("ctl_clear_fails_rdowntime");
    fs::create_dir_all(&dir).unwrap();
    let mut ctl = StatusController::new(EventStore::new(&dir));

    let err = ctl.clear_history().unwrap_err();

    assert!(matches!(err, AppError::Clear { .. }));
    assert!(dir.exists());
}
