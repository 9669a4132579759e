/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Pay colour: zero-pay (course) rows in grey, overtime rows in green.
pub fn color_for_pay(pay: f64, base_rate: f64) -> &'static str {
    if pay == 0.0 {
        GREY
    } else if pay > base_rate {
        GREEN
    } else {
        RESET
    }
}

/// Checkbox glyph with colour.
pub fn checkbox(checked: bool) -> String {
    if checked {
        format!("{GREEN}[x]{RESET}")
    } else {
        format!("{GREY}[ ]{RESET}")
    }
}
