use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::ui::status::paint_status;

use super::open_controller;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ctl = open_controller(cfg);
    let outcome = ctl.toggle();

    if !outcome.persisted {
        warning(format!(
            "Status changed, but it could not be saved: {}",
            outcome.error.as_deref().unwrap_or("unknown error")
        ));
    }

    success(format!("Status: {}", paint_status(ctl.status_view())));
    if let Some(downtime) = ctl.last_downtime() {
        info(downtime);
    }

    Ok(())
}
