use std::num::NonZeroUsize;

use tankerlog::core::seed::sample_tankers;
use tankerlog::core::view::{clamp_page, compute_view, total_pages};
use tankerlog::models::role::classify;
use tankerlog::models::tanker::TankerRecord;

mod common;
use common::at;

fn size(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).unwrap()
}

fn ids(records: &[TankerRecord]) -> Vec<&str> {
    records.iter().map(|r| r.id.as_str()).collect()
}

#[test]
fn test_branch_scope_returns_only_own_branch() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("branch"));

    let view = compute_view(&records, &caps, "Branch B", None, 1, size(5));

    assert_eq!(ids(&view.visible), vec!["2", "4", "8"]);
    assert_eq!(view.total, 3);
    assert_eq!(view.total_pages, 1);
}

#[test]
fn test_admin_second_page() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("admin"));

    let view = compute_view(&records, &caps, "Branch B", None, 2, size(5));

    assert_eq!(ids(&view.visible), vec!["6", "7", "8", "9", "10"]);
    assert_eq!(view.total_pages, 2);
}

#[test]
fn test_superadmin_sees_every_branch() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("SuperAdmin"));

    let view = compute_view(&records, &caps, "Branch A", None, 1, size(100));

    assert_eq!(view.visible.len(), records.len());
}

#[test]
fn test_non_admin_never_sees_other_branches() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));

    for role in [Some("branch"), Some("branch1"), Some("viewer"), None] {
        let caps = classify(role);
        for scope in ["Branch A", "Branch B", "Branch C", "Branch Z"] {
            for page in 0..4 {
                let view = compute_view(&records, &caps, scope, None, page, size(2));
                assert!(
                    view.visible.iter().all(|r| r.branch == scope),
                    "role {:?} leaked records outside {}",
                    role,
                    scope
                );
            }
        }
    }
}

#[test]
fn test_scope_is_strict_equality() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("branch"));

    let lower = compute_view(&records, &caps, "branch b", None, 1, size(5));
    let padded = compute_view(&records, &caps, "Branch B ", None, 1, size(5));

    assert!(lower.visible.is_empty());
    assert!(padded.visible.is_empty());
    assert_eq!(lower.total_pages, 1);
}

#[test]
fn test_date_filter_uses_calendar_day() {
    let mut records = sample_tankers(at(2025, 9, 15, 8, 0));
    records[2].date_time = at(2025, 9, 16, 23, 59);
    records[6].date_time = at(2025, 9, 16, 0, 1);
    let caps = classify(Some("admin"));

    let day = at(2025, 9, 16, 12, 0).date();
    let view = compute_view(&records, &caps, "", Some(day), 1, size(5));

    assert_eq!(ids(&view.visible), vec!["3", "7"]);

    let none = compute_view(&records, &caps, "", Some(at(2024, 1, 1, 0, 0).date()), 1, size(5));
    assert!(none.visible.is_empty());
    assert_eq!(none.total_pages, 1);
}

#[test]
fn test_scope_and_date_filters_combine() {
    let mut records = sample_tankers(at(2025, 9, 15, 8, 0));
    records[1].date_time = at(2025, 9, 20, 9, 0); // Branch B
    records[0].date_time = at(2025, 9, 20, 9, 0); // Branch A
    let caps = classify(Some("branch"));

    let view = compute_view(
        &records,
        &caps,
        "Branch B",
        Some(at(2025, 9, 20, 0, 0).date()),
        1,
        size(5),
    );

    assert_eq!(ids(&view.visible), vec!["2"]);
}

#[test]
fn test_out_of_range_page_is_empty_not_clamped() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("admin"));

    let past_end = compute_view(&records, &caps, "", None, 3, size(5));
    let page_zero = compute_view(&records, &caps, "", None, 0, size(5));

    assert!(past_end.visible.is_empty());
    assert!(page_zero.visible.is_empty());
    assert_eq!(past_end.total_pages, 2);
    assert_eq!(clamp_page(3, past_end.total_pages), 2);
    assert_eq!(clamp_page(0, past_end.total_pages), 1);
}

#[test]
fn test_total_pages_never_below_one() {
    for count in 0..=23usize {
        for n in 1..=6usize {
            let expected = std::cmp::max(1, count.div_ceil(n));
            assert_eq!(total_pages(count, size(n)), expected);
        }
    }
}

#[test]
fn test_compute_view_is_idempotent_and_keeps_order() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));
    let caps = classify(Some("branch"));

    let first = compute_view(&records, &caps, "Branch A", None, 1, size(3));
    let second = compute_view(&records, &caps, "Branch A", None, 1, size(3));

    assert_eq!(first, second);
    assert_eq!(ids(&first.visible), vec!["1", "3", "7"]);
    assert_eq!(first.total, 4);
    assert_eq!(first.total_pages, 2);
}
