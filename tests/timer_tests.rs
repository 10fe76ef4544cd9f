mod common;
use common::manual_clock;
use rdowntime::core::timer::{LiveTimer, TimerState, Ticker};
use std::time::{Duration, Instant};

#[test]
fn test_new_timer_is_stopped_at_zero() {
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut timer = LiveTimer::new(clock.shared());

    assert!(!timer.is_running());
    assert_eq!(timer.state(), TimerState::Stopped);
    assert_eq!(timer.tick(), "00:00:00");
}

#[test]
fn test_running_timer_follows_the_clock() {
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut timer = LiveTimer::new(clock.shared());

    timer.start(0);
    clock.advance_millis(61_500);

    assert!(timer.is_running());
    assert_eq!(timer.tick(), "00:01:01");
    assert_eq!(timer.elapsed_ms(), 61_500);
}

#[test]
fn test_start_with_offset_is_backdated() {
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut timer = LiveTimer::new(clock.shared());

    timer.start(3_600_000);
    assert_eq!(timer.display(), "01:00:00");

    clock.advance_millis(1_000);
    assert_eq!(timer.tick(), "01:00:01");
}

#[test]
fn test_tick_never_goes_backward() {
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut timer = LiveTimer::new(clock.shared());

    timer.start(0);
    clock.advance_millis(10_000);
    assert_eq!(timer.tick(), "00:00:10");

    clock.advance_millis(-8_000);
    assert_eq!(timer.tick(), "00:00:10");
    assert_eq!(timer.elapsed_ms(), 10_000);
}

#[test]
fn test_stop_freezes_and_reset_clears() {
    let clock = manual_clock("2024-01-15 09:00:00");
    let mut timer = LiveTimer::new(clock.shared());

    timer.start(0);
    clock.advance_millis(5_000);
    timer.tick();
    timer.stop();
    clock.advance_millis(5_000);

    assert!(!timer.is_running());
    assert_eq!(timer.tick(), "00:00:05");

    timer.reset();
    assert_eq!(timer.display(), "00:00:00");
    assert_eq!(timer.elapsed_ms(), 0);
}

#[test]
fn test_ticker_keeps_cadence() {
    let start = Instant::now();
    let mut ticker = Ticker::new(Duration::from_millis(20));

    for _ in 0..4 {
        ticker.wait();
    }

    // first wait is immediate, the next three wait one period each
    assert!(start.elapsed() >= Duration::from_millis(60));
}

#[test]
fn test_zero_period_falls_back_to_default() {
    let ticker = Ticker::new(Duration::ZERO);
    assert_eq!(ticker.period(), rdowntime::core::timer::DEFAULT_REFRESH);
}

#[test]
fn test_timer_ignores_utc_offset_changes() {
    let clock = manual_clock("2024-10-27 02:50:00");
    let mut timer = LiveTimer::new(clock.shared());

    timer.start(0);
    clock.advance_millis(300_000);
    assert_eq!(timer.tick(), "00:05:00");

    // local time falls back an hour
    clock.set_utc_offset(-3_600);
    clock.advance_millis(60_000);
    assert_eq!(timer.tick(), "00:06:00");

    // and springs forward again
    clock.set_utc_offset(0);
    clock.advance_millis(60_000);
    assert_eq!(timer.tick(), "00:07:00");
}
