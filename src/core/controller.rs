use crate::core::history::build_history;
use crate::core::recovery::{self, Recovered};
use crate::core::timer::LiveTimer;
use crate::errors::AppResult;
use crate::models::event::truncate_to_second;
use crate::models::{Event, Status};
use crate::store::EventStore;
use crate::utils::clock::SharedClock;
use crate::utils::time::{format_millis, seconds_between_ms};
use chrono::NaiveDateTime;
use tracing::{error, info};

/// Semantic colour of the status readout; the front end decides how to paint it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusColor {
    Green,
    Red,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusView {
    pub text: &'static str,
    pub color: StatusColor,
}

/// What a toggle did. The in-memory state always flips; `persisted` tells
/// whether the event also reached the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toggle {
    pub status: Status,
    pub event: Option<Event>,
    pub persisted: bool,
    pub error: Option<String>,
    /// Only set on a transition to AVAILABLE.
    pub downtime_ms: Option<i64>,
}

pub struct StatusController {
    store: EventStore,
    clock: SharedClock,
    timer: LiveTimer,
    available: bool,
    unavailable_since: Option<NaiveDateTime>,
    last_downtime: Option<String>,
    history: Vec<String>,
}

impl StatusController {
    /// Build the controller from whatever the log says: initial state and the
    /// backdated timer come from the recovery resolver.
    pub fn new(store: EventStore) -> Self {
        let clock = store.clock().clone();
        let recovered = recovery::resolve(&store, clock.as_ref());
        Self::from_recovered(store, clock, recovered)
    }

    fn from_recovered(store: EventStore, clock: SharedClock, recovered: Recovered) -> Self {
        let mut timer = LiveTimer::new(clock.clone());
        if !recovered.available {
            timer.start(recovered.elapsed_ms);
        }

        let mut controller = Self {
            store,
            clock,
            timer,
            available: recovered.available,
            unavailable_since: recovered.unavailable_since,
            last_downtime: None,
            history: Vec::new(),
        };
        controller.refresh_history();
        controller
    }

    pub fn toggle(&mut self) -> Toggle {
        self.available = !self.available;
        let now = self.clock.now();

        let (status, downtime_ms) = if self.available {
            let downtime = self
                .unavailable_since
                .take()
                .map(|since| seconds_between_ms(since, now).max(0))
                .unwrap_or_else(|| self.timer.elapsed_ms());
            self.timer.stop();
            self.timer.reset();
            self.last_downtime = Some(format!("Last Downtime: {}", format_millis(downtime)));
            (Status::Available, Some(downtime))
        } else {
            self.unavailable_since = Some(truncate_to_second(now));
            self.timer.start(0);
            self.last_downtime = None;
            (Status::Unavailable, None)
        };

        let outcome = match self.store.append(status) {
            Ok(event) => {
                info!(status = %status, "status changed");
                Toggle {
                    status,
                    event: Some(event),
                    persisted: true,
                    error: None,
                    downtime_ms,
                }
            }
            Err(e) => {
                error!(status = %status, error = %e, "status changed but was not logged");
                Toggle {
                    status,
                    event: None,
                    persisted: false,
                    error: Some(e.to_string()),
                    downtime_ms,
                }
            }
        };

        self.refresh_history();
        outcome
    }

    /// Delete the log and refresh. On failure the previous history stays on
    /// display and the error is handed back for reporting.
    pub fn clear_history(&mut self) -> AppResult<()> {
        if let Err(e) = self.store.clear() {
            error!(error = %e, "failed to clear history");
            return Err(e);
        }
        self.refresh_history();
        Ok(())
    }

    /// Re-read the log and rebuild the display lines. A log that cannot be
    /// read shows as empty.
    pub fn refresh_history(&mut self) -> &[String] {
        self.history = match self.store.read_all() {
            Ok(events) => build_history(&events),
            Err(e) => {
                error!(error = %e, "cannot read history");
                Vec::new()
            }
        };
        &self.history
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn status(&self) -> Status {
        if self.available {
            Status::Available
        } else {
            Status::Unavailable
        }
    }

    pub fn unavailable_since(&self) -> Option<NaiveDateTime> {
        self.unavailable_since
    }

    pub fn button_label(&self) -> &'static str {
        if self.available {
            "Switch to Unavailable"
        } else {
            "Switch to Available"
        }
    }

    pub fn status_view(&self) -> StatusView {
        if self.available {
            StatusView {
                text: "ONLINE",
                color: StatusColor::Green,
            }
        } else {
            StatusView {
                text: "OFFLINE",
                color: StatusColor::Red,
            }
        }
    }

    /// Advance the live timer and return the readout.
    pub fn tick(&mut self) -> &str {
        self.timer.tick()
    }

    pub fn elapsed_text(&self) -> &str {
        self.timer.display()
    }

    pub fn timer(&self) -> &LiveTimer {
        &self.timer
    }

    pub fn last_downtime(&self) -> Option<&str> {
        self.last_downtime.as_deref()
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }
}
