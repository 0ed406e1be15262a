//! Role-scoped record list: scope filter, calendar-day filter, pagination.

use crate::models::record::Record;
use crate::models::role::Capabilities;
use chrono::NaiveDate;
use serde::Serialize;
use std::num::NonZeroUsize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageView<R> {
    pub visible: Vec<R>,
    /// Records left after scope and date filtering.
    pub total: usize,
    /// Never below 1, even for an empty set.
    pub total_pages: usize,
}

/// Admins see everything, everybody else only records of their own branch.
/// The comparison is strict: no trimming, no case folding.
pub fn in_scope<R: Record>(record: &R, caps: &Capabilities, branch_scope: &str) -> bool {
    caps.is_admin || record.branch() == Some(branch_scope)
}

pub fn on_day<R: Record>(record: &R, filter_date: Option<NaiveDate>) -> bool {
    match filter_date {
        Some(day) => record.recorded_at().map(|dt| dt.date()) == Some(day),
        None => true,
    }
}

pub fn total_pages(count: usize, page_size: NonZeroUsize) -> usize {
    count.div_ceil(page_size.get()).max(1)
}

/// Bring `page` back into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Compute the visible page.
///
/// Insertion order is kept. `page` is 1-based and is not clamped: a page
/// past the end (or page 0) yields an empty `visible`.
pub fn compute_view<R: Record>(
    records: &[R],
    caps: &Capabilities,
    branch_scope: &str,
    filter_date: Option<NaiveDate>,
    page: usize,
    page_size: NonZeroUsize,
) -> PageView<R> {
    let filtered: Vec<&R> = records
        .iter()
        .filter(|r| in_scope(*r, caps, branch_scope))
        .filter(|r| on_day(*r, filter_date))
        .collect();

    let total = filtered.len();
    let size = page_size.get();

    let visible = match page.checked_sub(1) {
        Some(p) => filtered
            .into_iter()
            .skip(p.saturating_mul(size))
            .take(size)
            .cloned()
            .collect(),
        None => Vec::new(),
    };

    PageView {
        visible,
        total,
        total_pages: total_pages(total, page_size),
    }
}
