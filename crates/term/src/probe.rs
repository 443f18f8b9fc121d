//! Startup probes for terminal capabilities.

use crossterm::style::available_color_count;
use tracing::{debug, warn};

/// Decide once whether escape-sequence color output can be trusted.
pub fn detect_rich_color() -> bool {
    let term = std::env::var("TERM").unwrap_or_default();
    let colorterm = std::env::var_os("COLORTERM").is_some();
    let rich = rich_color_from(&term, colorterm, available_color_count());
    if rich {
        debug!(term = %term, "escape-stream color output");
    } else {
        warn!(term = %term, "falling back to run-grouped color output");
    }
    rich
}

fn rich_color_from(term: &str, colorterm: bool, colors: u16) -> bool {
    if term == "dumb" {
        return false;
    }
    colorterm || colors >= 8
}
