//! rDowntime main entrypoint.

use rdowntime::run;

fn main() {
    if let Err(e) = run() {
        rdowntime::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
