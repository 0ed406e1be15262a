//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Terminal column width of `s` (emoji and CJK count double).
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// `--` placeholder for missing image references.
pub fn or_placeholder(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "--".to_string(),
    }
}

/// Pager line, e.g. `‹ Prev | 1 / 2 | Next ›`, with disabled ends greyed out.
pub fn pager(page: usize, total_pages: usize) -> String {
    use crate::utils::colors::colorize_if;

    let prev = colorize_if("‹ Prev", page <= 1);
    let next = colorize_if("Next ›", page >= total_pages);
    format!("{} | {} / {} | {}", prev, page, total_pages, next)
}
