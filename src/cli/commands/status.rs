use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::format_timestamp;
use crate::ui::status::paint_status;

use super::open_controller;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut ctl = open_controller(cfg);

    println!("Status  : {}", paint_status(ctl.status_view()));
    if let Some(since) = ctl.unavailable_since() {
        println!("Since   : {}", format_timestamp(&since));
        println!("Elapsed : {}", ctl.tick());
    }
    println!("Next    : {}", ctl.button_label());

    Ok(())
}
