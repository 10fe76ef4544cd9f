//! Wall-clock sources. Production code reads the local system time; tests
//! drive a `ManualClock` so recovery and timer behaviour can be checked
//! without sleeping.

use chrono::{Local, NaiveDateTime, TimeDelta, Utc};
use std::fmt;
use std::sync::{Arc, Mutex};

pub trait Clock: Send + Sync {
    /// Current local time, without timezone metadata. Used for log timestamps.
    fn now(&self) -> NaiveDateTime;

    /// Milliseconds since the Unix epoch. Does not move when the local UTC
    /// offset changes, so elapsed time measured with it survives DST.
    fn epoch_millis(&self) -> i64;
}

pub type SharedClock = Arc<dyn Clock>;

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    fn epoch_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

pub fn system_clock() -> SharedClock {
    Arc::new(SystemClock)
}

#[derive(Debug, Clone, Copy)]
struct ManualState {
    utc: NaiveDateTime,
    offset: TimeDelta,
}

/// A clock that only moves when told to.
///
/// Starts with a zero UTC offset; `set_utc_offset` shifts the local reading
/// without moving the underlying instant, like a DST change does.
#[derive(Clone)]
pub struct ManualClock {
    state: Arc<Mutex<ManualState>>,
}

impl ManualClock {
    pub fn new(start: NaiveDateTime) -> Self {
        Self {
            state: Arc::new(Mutex::new(ManualState {
                utc: start,
                offset: TimeDelta::zero(),
            })),
        }
    }

    /// Set the local reading; the current offset is kept.
    pub fn set(&self, at: NaiveDateTime) {
        self.update(|s| s.utc = at - s.offset);
    }

    pub fn advance(&self, by: TimeDelta) {
        self.update(|s| s.utc += by);
    }

    pub fn advance_millis(&self, ms: i64) {
        self.advance(TimeDelta::milliseconds(ms));
    }

    pub fn set_utc_offset(&self, seconds: i64) {
        self.update(|s| s.offset = TimeDelta::seconds(seconds));
    }

    pub fn shared(&self) -> SharedClock {
        Arc::new(self.clone())
    }

    fn update(&self, f: impl FnOnce(&mut ManualState)) {
        match self.state.lock() {
            Ok(mut state) => f(&mut *state),
            Err(poisoned) => f(&mut *poisoned.into_inner()),
        }
    }

    fn snapshot(&self) -> ManualState {
        match self.state.lock() {
            Ok(state) => *state,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> NaiveDateTime {
        let s = self.snapshot();
        s.utc + s.offset
    }

    fn epoch_millis(&self) -> i64 {
        self.snapshot().utc.and_utc().timestamp_millis()
    }
}

impl fmt::Debug for ManualClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ManualClock").field("now", &self.now()).finish()
    }
}
