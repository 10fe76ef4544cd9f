use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{DowntimeInterval, downtime_intervals, summarize};
use crate::errors::{AppError, AppResult};
use crate::models::Event;
use crate::models::event::format_timestamp;
use crate::store::EventStore;
use crate::ui::messages::{header, info};
use crate::ui::status::render_history;
use crate::utils::time::format_millis;
use serde::Serialize;

use super::open_controller;

#[derive(Serialize)]
struct HistoryExport {
    events: Vec<Event>,
    downtimes: Vec<DowntimeInterval>,
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { summary, json } = cmd {
        if *json {
            let events = EventStore::new(cfg.data_path()).read_all()?;
            let export = HistoryExport {
                downtimes: downtime_intervals(&events),
                events,
            };
            let out = serde_json::to_string_pretty(&export)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if *summary {
            let events = EventStore::new(cfg.data_path()).read_all()?;
            let s = summarize(&events);
            header("Downtime summary");
            println!("Outages       : {}", s.outages);
            println!("Total         : {}", format_millis(s.total_ms));
            println!("Longest       : {}", format_millis(s.longest_ms));
            if let Some(since) = s.open_since {
                println!("Open since    : {}", format_timestamp(&since));
            }
            return Ok(());
        }

        let ctl = open_controller(cfg);
        if ctl.history().is_empty() {
            info("No activity recorded.");
        } else {
            print!("{}", render_history(ctl.history()));
        }
    }

    Ok(())
}
