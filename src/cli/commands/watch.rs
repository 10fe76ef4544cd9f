use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::timer::Ticker;
use crate::errors::AppResult;
use crate::ui::status::live_line;

use std::io::{self, Write};

use super::open_controller;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Watch { ticks } = cmd {
        let mut ctl = open_controller(cfg);
        let mut ticker = Ticker::new(cfg.refresh_interval());
        let mut stdout = io::stdout();
        let mut count: u64 = 0;

        loop {
            ticker.wait();
            ctl.tick();
            write!(stdout, "\r{}", live_line(&ctl))?;
            stdout.flush()?;

            count += 1;
            if ticks.is_some_and(|limit| count >= limit) {
                break;
            }
        }
        writeln!(stdout)?;
    }

    Ok(())
}
