//! Time utilities: wall-clock HH:MM stamps.

use chrono::Timelike;

/// Zero-padded `HH:MM` of the given wall-clock time.
pub fn hhmm<T: Timelike>(t: &T) -> String {
    format!("{:02}:{:02}", t.hour(), t.minute())
}
