//! Time utilities: elapsed-time formatting and millisecond arithmetic.

use chrono::{NaiveDateTime, TimeDelta};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;

/// Format elapsed milliseconds as `HH:MM:SS`.
///
/// Hours are not folded into days (`90_000_000` → `"25:00:00"`) and grow past
/// two digits when needed. Negative input is clamped to zero; sub-second
/// remainders are truncated.
pub fn format_millis(ms: i64) -> String {
    let ms = ms.max(0);
    let hours = ms / MS_PER_HOUR;
    let minutes = (ms % MS_PER_HOUR) / MS_PER_MINUTE;
    let seconds = (ms % MS_PER_MINUTE) / MS_PER_SECOND;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn format_duration(d: TimeDelta) -> String {
    format_millis(d.num_milliseconds())
}

/// Milliseconds from `start` to `end`, counted in whole seconds (the log
/// resolution). Negative when `end` precedes `start`.
pub fn seconds_between_ms(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_seconds() * MS_PER_SECOND
}

/// Milliseconds from `start` to `end` at full clock precision, never negative.
pub fn elapsed_ms(start: NaiveDateTime, end: NaiveDateTime) -> i64 {
    (end - start).num_milliseconds().max(0)
}
