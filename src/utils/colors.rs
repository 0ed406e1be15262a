/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";

/// Grey out `value` when `disabled`, plain otherwise.
pub fn colorize_if(value: &str, disabled: bool) -> String {
    if disabled {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Returns formatted value, greyed out when it is a placeholder.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "--" || value.trim() == "--:--" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Shift state color: active → green, idle → grey.
pub fn colorize_shift(value: &str, active: bool) -> String {
    if active {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{GREY}{value}{RESET}")
    }
}
