use tankerlog::core::editor::apply_edit;
use tankerlog::core::repository::{MemoryRepository, RecordRepository, next_id};
use tankerlog::core::seed::{sample_bunkers, sample_tankers};
use tankerlog::errors::AppError;
use tankerlog::models::tanker::TankerField;

mod common;
use common::at;

#[test]
fn test_apply_edit_replaces_only_matching_record() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));

    let mut edited = records[3].clone();
    edited.owner_name = "Sathish Kumar".to_string();
    edited.tanker_capacity = "5150".to_string();

    let updated = apply_edit(&records, edited.clone());

    assert_eq!(updated.len(), records.len());
    assert_eq!(updated[3], edited);
    for (i, (before, after)) in records.iter().zip(&updated).enumerate() {
        if i != 3 {
            assert_eq!(before, after, "record {} changed", before.id);
        }
    }
}

#[test]
fn test_apply_edit_miss_is_identity() {
    let records = sample_tankers(at(2025, 9, 15, 10, 30));

    let mut ghost = records[0].clone();
    ghost.id = "999".to_string();
    ghost.owner_name = "Nobody".to_string();

    assert_eq!(apply_edit(&records, ghost), records);
}

#[test]
fn test_set_field_accepts_any_text() {
    let mut rec = sample_tankers(at(2025, 9, 15, 10, 30)).remove(0);

    rec.set_field(TankerField::TankerCapacity, "about five thousand")
        .unwrap();
    rec.set_field(TankerField::VoucherAmount, "12,000 /-").unwrap();
    rec.set_field(TankerField::MeterEnd, "").unwrap();

    assert_eq!(rec.tanker_capacity, "about five thousand");
    assert_eq!(rec.voucher_amount, "12,000 /-");
    assert_eq!(rec.meter_end, "");
}

#[test]
fn test_set_field_dates_are_parsed() {
    let mut rec = sample_tankers(at(2025, 9, 15, 10, 30)).remove(0);

    rec.set_field(TankerField::DateTime, "2025-10-01 07:45")
        .unwrap();
    rec.set_field(TankerField::ReceiptDate, "2025-10-02").unwrap();

    assert_eq!(rec.date_time, at(2025, 10, 1, 7, 45));
    assert_eq!(rec.receipt_date, at(2025, 10, 2, 0, 0).date());

    let err = rec
        .set_field(TankerField::ReceiptDate, "02/10/2025")
        .unwrap_err();
    assert!(matches!(err, AppError::InvalidDate(_)));
    assert_eq!(rec.receipt_date, at(2025, 10, 2, 0, 0).date());
}

#[test]
fn test_field_keys_round_trip() {
    for field in TankerField::ALL {
        assert_eq!(TankerField::from_key(field.key()), Some(field));
    }
    assert_eq!(
        TankerField::from_key("Owner_Name"),
        Some(TankerField::OwnerName)
    );
    assert_eq!(TankerField::from_key("colour"), None);
}

#[test]
fn test_memory_repository_upsert_edit_and_append() {
    let mut repo = MemoryRepository::new(sample_tankers(at(2025, 9, 15, 10, 30)));

    let mut edited = repo.get("5").unwrap().unwrap();
    edited.branch = "Branch A".to_string();
    repo.upsert(edited.clone()).unwrap();

    assert_eq!(repo.get("5").unwrap(), Some(edited));
    assert_eq!(repo.list().unwrap()[4].id, "5");
    assert_eq!(repo.list().unwrap().len(), 10);

    let mut fresh = repo.get("1").unwrap().unwrap();
    fresh.id = next_id(repo.records());
    repo.upsert(fresh).unwrap();

    let ids: Vec<String> = repo.list().unwrap().into_iter().map(|r| r.id).collect();
    assert_eq!(ids.last().map(String::as_str), Some("11"));
    assert_eq!(ids.len(), 11);
}

#[test]
fn test_next_id_skips_non_numeric_ids() {
    let mut bunkers = sample_bunkers();
    bunkers[2].id = "legacy-x".to_string();

    assert_eq!(next_id(&bunkers), "7");
    assert_eq!(next_id::<tankerlog::models::bunker::BunkerRecord>(&[]), "1");
}
