//! Startup state resolution: a process that stops while UNAVAILABLE must come
//! back UNAVAILABLE, with the live timer showing the time already elapsed.

use crate::models::Status;
use crate::store::EventStore;
use crate::utils::clock::Clock;
use crate::utils::time::elapsed_ms;
use chrono::NaiveDateTime;
use tracing::{error, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recovered {
    pub available: bool,
    /// Timestamp of the open UNAVAILABLE event, if any.
    pub unavailable_since: Option<NaiveDateTime>,
    /// Offset to backdate the live timer by.
    pub elapsed_ms: i64,
}

impl Recovered {
    pub fn available() -> Self {
        Self {
            available: true,
            unavailable_since: None,
            elapsed_ms: 0,
        }
    }
}

pub fn resolve(store: &EventStore, clock: &dyn Clock) -> Recovered {
    let last = match store.read_last() {
        Ok(last) => last,
        Err(e) => {
            error!(error = %e, "cannot read last event, starting as available");
            return Recovered::available();
        }
    };

    match last {
        Some(ev) if ev.status == Status::Unavailable => {
            let elapsed = elapsed_ms(ev.timestamp, clock.now());
            info!(
                since = %ev.timestamp_str(),
                elapsed_ms = elapsed,
                "resuming open downtime"
            );
            Recovered {
                available: false,
                unavailable_since: Some(ev.timestamp),
                elapsed_ms: elapsed,
            }
        }
        _ => Recovered::available(),
    }
}
