use crate::utils::clock::SharedClock;
use crate::utils::time::format_millis;
use std::thread;
use std::time::{Duration, Instant};

pub const ZERO_DISPLAY: &str = "00:00:00";
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(200);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Stopped,
    Running,
}

/// Elapsed-time readout shown while the state is UNAVAILABLE.
///
/// The timer does no scheduling of its own: whoever owns it calls `tick` at
/// the refresh cadence (see `Ticker`) and displays the returned string.
/// Elapsed time is measured on the epoch clock, not local time, so a DST
/// change neither freezes nor jumps the readout.
pub struct LiveTimer {
    clock: SharedClock,
    /// Epoch milliseconds the count started from.
    started_at: Option<i64>,
    last_elapsed: i64,
    display: String,
}

impl LiveTimer {
    pub fn new(clock: SharedClock) -> Self {
        Self {
            clock,
            started_at: None,
            last_elapsed: 0,
            display: ZERO_DISPLAY.to_string(),
        }
    }

    /// Start counting from `offset_ms` already elapsed. A restarted process
    /// passes the time since the open UNAVAILABLE event so the readout
    /// continues instead of restarting from zero.
    pub fn start(&mut self, offset_ms: i64) {
        let offset = offset_ms.max(0);
        self.started_at = Some(self.clock.epoch_millis() - offset);
        self.last_elapsed = offset;
        self.display = format_millis(offset);
    }

    pub fn stop(&mut self) {
        self.started_at = None;
    }

    pub fn reset(&mut self) {
        self.stop();
        self.last_elapsed = 0;
        self.display = ZERO_DISPLAY.to_string();
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub fn state(&self) -> TimerState {
        if self.is_running() {
            TimerState::Running
        } else {
            TimerState::Stopped
        }
    }

    /// Refresh the readout. The value never moves backwards, even if the
    /// wall clock is stepped back while running.
    pub fn tick(&mut self) -> &str {
        if let Some(start) = self.started_at {
            let now = (self.clock.epoch_millis() - start).max(0);
            if now > self.last_elapsed {
                self.last_elapsed = now;
            }
            self.display = format_millis(self.last_elapsed);
        }
        &self.display
    }

    pub fn elapsed_ms(&self) -> i64 {
        self.last_elapsed
    }

    pub fn display(&self) -> &str {
        &self.display
    }
}

/// Fixed-cadence wait loop for driving `LiveTimer::tick`.
///
/// Deadlines are computed from the start instant, so sleeping late once does
/// not shift every later tick; deadlines already missed are skipped rather
/// than fired in a burst.
#[derive(Debug)]
pub struct Ticker {
    period: Duration,
    next: Instant,
}

impl Ticker {
    pub fn new(period: Duration) -> Self {
        let period = if period.is_zero() {
            DEFAULT_REFRESH
        } else {
            period
        };
        Self {
            period,
            next: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until the next deadline. The first call returns immediately.
    pub fn wait(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
        }
        self.next += self.period;
        let now = Instant::now();
        while self.next <= now {
            self.next += self.period;
        }
    }
}
