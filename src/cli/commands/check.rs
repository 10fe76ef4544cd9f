use crate::config::Config;
use crate::core::check::{Issue, check_log};
use crate::errors::{AppError, AppResult};
use crate::models::event::format_timestamp;
use crate::store::EventStore;
use crate::ui::messages::{success, warning};

pub fn handle(cfg: &Config) -> AppResult<()> {
    let store = EventStore::new(cfg.data_path());
    let report = check_log(&store.load()?);

    if report.is_clean() {
        success(format!("{} events, no problems found.", report.events));
        return Ok(());
    }

    for issue in &report.issues {
        match issue {
            Issue::Malformed(rec) => warning(format!(
                "line {}: skipped record '{}' ({})",
                rec.line, rec.raw, rec.reason
            )),
            Issue::RepeatedStatus { index, status, at } => warning(format!(
                "event #{} at {}: {} repeated without a status change",
                index + 1,
                format_timestamp(at),
                status
            )),
            Issue::OutOfOrder {
                index,
                previous,
                at,
            } => warning(format!(
                "event #{} at {} is older than the previous event ({})",
                index + 1,
                format_timestamp(at),
                format_timestamp(previous)
            )),
        }
    }

    Err(AppError::Other(format!(
        "{} problem(s) found in {}",
        report.issues.len(),
        store.path().display()
    )))
}
