use super::status::Status;
use crate::errors::{AppError, AppResult};
use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

/// Timestamp layout of the CSV log (local time, second precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(serialize_with = "serialize_timestamp")]
    pub timestamp: NaiveDateTime, // ⇔ column "timestamp" ("YYYY-MM-DD HH:MM:SS")
    pub status: Status,           // ⇔ column "status" ("AVAILABLE" | "UNAVAILABLE")
}

impl Event {
    /// Build an event, dropping anything below the second: the log cannot
    /// store it, so an in-memory event must not carry it either.
    pub fn new(timestamp: NaiveDateTime, status: Status) -> Self {
        Self {
            timestamp: truncate_to_second(timestamp),
            status,
        }
    }

    /// Parse a `(timestamp, status)` pair as found in one CSV record.
    pub fn parse(timestamp: &str, status: &str) -> AppResult<Self> {
        let ts = parse_timestamp(timestamp)?;
        let status = status.trim().parse::<Status>()?;
        Ok(Self::new(ts, status))
    }

    pub fn timestamp_str(&self) -> String {
        format_timestamp(&self.timestamp)
    }

    /// Plain history line: "<timestamp> - Status: <STATUS>"
    pub fn log_line(&self) -> String {
        format!("{} - Status: {}", self.timestamp_str(), self.status)
    }
}

pub fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s.trim(), TIMESTAMP_FORMAT)
        .map_err(|_| AppError::InvalidTimestamp(s.to_string()))
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

pub fn truncate_to_second(ts: NaiveDateTime) -> NaiveDateTime {
    ts.with_nanosecond(0).unwrap_or(ts)
}

fn serialize_timestamp<S>(ts: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&format_timestamp(ts))
}
