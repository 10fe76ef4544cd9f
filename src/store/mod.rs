//! Append-only CSV event store.
//!
//! The backing file is a header-first table with two columns:
//!
//! ```text
//! timestamp,status
//! 2024-01-15 09:00:00,UNAVAILABLE
//! 2024-01-15 09:15:32,AVAILABLE
//! ```
//!
//! File order is chronological order: records are only ever appended, and the
//! whole file is only ever removed by `clear`.

use crate::errors::{AppError, AppResult};
use crate::models::{Event, Status};
use crate::utils::clock::{SharedClock, system_clock};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const HEADER: [&str; 2] = ["timestamp", "status"];

/// A record that could not be turned into an `Event`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub line: u64,
    pub raw: String,
    pub reason: String,
}

/// Result of a full read: the usable events plus whatever had to be skipped.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<Event>,
    pub skipped: Vec<SkippedRecord>,
}

#[derive(Clone)]
pub struct EventStore {
    path: PathBuf,
    clock: SharedClock,
}

impl std::fmt::Debug for EventStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStore")
            .field("path", &self.path)
            .finish()
    }
}

impl EventStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_clock(path, system_clock())
    }

    pub fn with_clock(path: impl Into<PathBuf>, clock: SharedClock) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn clock(&self) -> &SharedClock {
        &self.clock
    }

    /// Stamp `status` with the current time and append it to the log.
    ///
    /// The record is encoded in memory first and written with a single
    /// `write_all`, so a failure never leaves a half-encoded record behind
    /// this call's own data. On error the event is not logged.
    pub fn append(&self, status: Status) -> AppResult<Event> {
        let event = Event::new(self.clock.now(), status);
        self.append_event(&event)?;
        debug!(path = %self.path.display(), event = %event.log_line(), "event appended");
        Ok(event)
    }

    fn append_event(&self, event: &Event) -> AppResult<()> {
        let write_err = |source: io::Error| AppError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .read(true)
            .open(&self.path)
            .map_err(write_err)?;

        let len = file.metadata().map_err(write_err)?.len();

        let mut buf: Vec<u8> = Vec::with_capacity(64);
        if len > 0 && !ends_with_newline(&mut file, len).map_err(write_err)? {
            // previous write was torn: start on a fresh line
            buf.push(b'\n');
        }

        {
            let mut wtr = WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            if len == 0 {
                wtr.write_record(HEADER)?;
            }
            wtr.write_record([event.timestamp_str().as_str(), event.status.as_str()])?;
            wtr.flush().map_err(write_err)?;
        }

        file.write_all(&buf).map_err(write_err)?;
        file.sync_data().map_err(write_err)?;
        Ok(())
    }

    /// All well-formed events in file order. A missing file is an empty log.
    pub fn read_all(&self) -> AppResult<Vec<Event>> {
        Ok(self.load()?.events)
    }

    /// Most recently appended well-formed event.
    pub fn read_last(&self) -> AppResult<Option<Event>> {
        Ok(self.read_all()?.pop())
    }

    /// Full read keeping track of the records that had to be dropped.
    pub fn load(&self) -> AppResult<EventLog> {
        let content = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(EventLog::default()),
            Err(source) => {
                return Err(AppError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        let log = parse_log(&content);
        for skipped in &log.skipped {
            warn!(
                path = %self.path.display(),
                line = skipped.line,
                reason = %skipped.reason,
                "skipping malformed record"
            );
        }
        debug!(
            path = %self.path.display(),
            events = log.events.len(),
            skipped = log.skipped.len(),
            "event log loaded"
        );
        Ok(log)
    }

    /// Delete the backing file. Clearing an absent log is not an error.
    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!(path = %self.path.display(), "event log cleared");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(AppError::Clear {
                path: self.path.clone(),
                source,
            }),
        }
    }
}

fn ends_with_newline(file: &mut File, len: u64) -> io::Result<bool> {
    if len == 0 {
        return Ok(true);
    }
    file.seek(SeekFrom::Start(len - 1))?;
    let mut last = [0u8; 1];
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}

/// Decode the raw file contents. Never fails: anything that is not a valid
/// `(timestamp, status)` record ends up in `skipped`.
///
/// Quoting is off: no written field ever needs it, and a stray `"` must not
/// swallow every record after it.
pub fn parse_log(content: &[u8]) -> EventLog {
    let mut rdr = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(content);

    let mut log = EventLog::default();
    let mut first = true;

    for (idx, result) in rdr.records().enumerate() {
        let fallback_line = idx as u64 + 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                log.skipped.push(SkippedRecord {
                    line,
                    raw: String::new(),
                    reason: e.to_string(),
                });
                first = false;
                continue;
            }
        };

        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        if first {
            first = false;
            if is_header(&record) {
                continue;
            }
        }

        match decode_record(&record) {
            Ok(event) => log.events.push(event),
            Err(reason) => log.skipped.push(SkippedRecord {
                line,
                raw: record.iter().collect::<Vec<_>>().join(","),
                reason,
            }),
        }
    }

    log
}

fn is_header(record: &StringRecord) -> bool {
    record.len() == HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.trim() == name)
}

fn decode_record(record: &StringRecord) -> Result<Event, String> {
    if record.len() != HEADER.len() {
        return Err(format!(
            "expected {} fields, found {}",
            HEADER.len(),
            record.len()
        ));
    }
    Event::parse(&record[0], &record[1]).map_err(|e| e.to_string())
}
