//! Integrity checks over a loaded event log.
//!
//! History reconstruction tolerates every problem reported here; the checker
//! exists so a user can find out what was tolerated.

use crate::models::Status;
use crate::store::{EventLog, SkippedRecord};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Issue {
    /// A record that was skipped on read.
    Malformed(SkippedRecord),
    /// Two consecutive events with the same status. For UNAVAILABLE, the
    /// first period never gets a downtime line.
    RepeatedStatus {
        index: usize,
        status: Status,
        at: NaiveDateTime,
    },
    /// An event older than the one logged before it.
    OutOfOrder {
        index: usize,
        previous: NaiveDateTime,
        at: NaiveDateTime,
    },
}

#[derive(Debug, Clone, Default)]
pub struct CheckReport {
    pub events: usize,
    pub issues: Vec<Issue>,
}

impl CheckReport {
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}

pub fn check_log(log: &EventLog) -> CheckReport {
    let mut issues: Vec<Issue> = log.skipped.iter().cloned().map(Issue::Malformed).collect();

    for (i, pair) in log.events.windows(2).enumerate() {
        let (prev, cur) = (&pair[0], &pair[1]);
        let index = i + 1;

        if cur.status == prev.status {
            issues.push(Issue::RepeatedStatus {
                index,
                status: cur.status,
                at: cur.timestamp,
            });
        }
        if cur.timestamp < prev.timestamp {
            issues.push(Issue::OutOfOrder {
                index,
                previous: prev.timestamp,
                at: cur.timestamp,
            });
        }
    }

    CheckReport {
        events: log.events.len(),
        issues,
    }
}
