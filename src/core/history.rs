//! Rebuilds the human-readable activity history from the event log, pairing
//! every UNAVAILABLE event with the AVAILABLE event that closes it.

use crate::models::{Event, Status};
use crate::models::event::format_timestamp;
use crate::utils::time::{format_millis, seconds_between_ms};
use chrono::NaiveDateTime;
use serde::Serialize;

pub const SEPARATOR: &str = "─────────────────────────────────────────";

/// One closed unavailable → available period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DowntimeInterval {
    #[serde(serialize_with = "serialize_ts")]
    pub start: NaiveDateTime,
    #[serde(serialize_with = "serialize_ts")]
    pub end: NaiveDateTime,
    pub duration_ms: i64,
}

impl DowntimeInterval {
    pub fn duration_str(&self) -> String {
        format_millis(self.duration_ms)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DowntimeSummary {
    pub outages: usize,
    pub total_ms: i64,
    pub longest_ms: i64,
    /// Start of a period still open at the end of the log.
    pub open_since: Option<NaiveDateTime>,
}

/// Walk the events in chronological order, handing each closed downtime to
/// `on_close` and returning the pending start left over at the end.
///
/// A second UNAVAILABLE before any AVAILABLE replaces the pending start: the
/// earlier period is never closed.
fn pair_events<F>(events: &[Event], mut visit: F) -> Option<NaiveDateTime>
where
    F: FnMut(&Event, Option<DowntimeInterval>),
{
    events.iter().fold(None, |pending, ev| match ev.status {
        Status::Unavailable => {
            visit(ev, None);
            Some(ev.timestamp)
        }
        Status::Available => {
            let closed = pending.map(|start| DowntimeInterval {
                start,
                end: ev.timestamp,
                duration_ms: seconds_between_ms(start, ev.timestamp),
            });
            visit(ev, closed);
            None
        }
    })
}

/// Display lines, most recent first.
pub fn build_history(events: &[Event]) -> Vec<String> {
    let mut lines = Vec::with_capacity(events.len() * 2);

    pair_events(events, |ev, closed| match closed {
        Some(interval) => {
            lines.push(format!(
                "{}\n\t>>> DOWNTIME: {} <<<",
                ev.log_line(),
                interval.duration_str()
            ));
            lines.push(SEPARATOR.to_string());
        }
        None => lines.push(ev.log_line()),
    });

    lines.reverse();
    lines
}

/// Closed downtime periods in chronological order.
pub fn downtime_intervals(events: &[Event]) -> Vec<DowntimeInterval> {
    let mut out = Vec::new();
    pair_events(events, |_, closed| {
        if let Some(interval) = closed {
            out.push(interval);
        }
    });
    out
}

pub fn summarize(events: &[Event]) -> DowntimeSummary {
    let mut summary = DowntimeSummary::default();
    let open_since = pair_events(events, |_, closed| {
        if let Some(interval) = closed {
            let ms = interval.duration_ms.max(0);
            summary.outages += 1;
            summary.total_ms += ms;
            summary.longest_ms = summary.longest_ms.max(ms);
        }
    });
    summary.open_since = open_since;
    summary
}

fn serialize_ts<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
