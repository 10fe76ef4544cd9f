pub mod check;
pub mod clear;
pub mod config;
pub mod history;
pub mod init;
pub mod status;
pub mod toggle;
pub mod watch;

use crate::config::Config;
use crate::core::controller::StatusController;
use crate::store::EventStore;

/// Controller over the configured event log, with state recovered from it.
pub(crate) fn open_controller(cfg: &Config) -> StatusController {
    StatusController::new(EventStore::new(cfg.data_path()))
}
