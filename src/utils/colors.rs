/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// GREEN for active subscriptions, GREY otherwise.
pub fn color_for_active(active: bool) -> &'static str {
    if active { GREEN } else { GREY }
}

/// CYAN for generated occurrences, RESET for stored events.
pub fn color_for_generated(generated: bool) -> &'static str {
    if generated { CYAN } else { RESET }
}
