//! Terminal rendering of the controller's outputs.

use crate::core::controller::{StatusColor, StatusController, StatusView};
use crate::core::history::SEPARATOR;
use ansi_term::Colour;

fn colour_of(color: StatusColor) -> Colour {
    match color {
        StatusColor::Green => Colour::Green,
        StatusColor::Red => Colour::Red,
    }
}

/// "ONLINE" in green, "OFFLINE" in red.
pub fn paint_status(view: StatusView) -> String {
    colour_of(view.color).bold().paint(view.text).to_string()
}

/// The one-line live readout used by `watch`.
pub fn live_line(ctl: &StatusController) -> String {
    let view = ctl.status_view();
    if ctl.is_available() {
        format!("{}  {}", paint_status(view), ctl.elapsed_text())
    } else {
        format!(
            "{}  {}",
            paint_status(view),
            Colour::Red.paint(ctl.elapsed_text())
        )
    }
}

/// History lines as shown to the user. Separators are dimmed, downtime
/// annotations highlighted.
pub fn render_history(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        if line == SEPARATOR {
            out.push_str(&Colour::Fixed(8).paint(line.as_str()).to_string());
        } else if let Some((head, note)) = line.split_once('\n') {
            out.push_str(head);
            out.push('\n');
            out.push_str(&Colour::Yellow.paint(note).to_string());
        } else {
            out.push_str(line);
        }
        out.push('\n');
    }
    out
}
