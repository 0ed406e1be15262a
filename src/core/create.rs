use crate::capture::{CaptureOutcome, ImageCapture};
use crate::core::repository::{RecordRepository, next_id};
use crate::errors::{AppError, AppResult};
use crate::models::tanker::TankerRecord;
use chrono::{NaiveDate, NaiveDateTime};

/// Input of the "Add Tanker Record" form. Every text field is required.
#[derive(Debug, Clone, Default)]
pub struct NewTanker {
    pub tanker_number: String,
    pub owner_name: String,
    pub tanker_capacity: String,
    pub receipt_number: String,
    pub voucher_amount: String,
    pub meter_start: String,
    pub meter_end: String,
    pub receipt_date: Option<NaiveDate>,
    pub branch: String,
}

impl NewTanker {
    fn missing_fields(&self) -> Vec<&'static str> {
        [
            ("tanker-number", &self.tanker_number),
            ("owner-name", &self.owner_name),
            ("capacity", &self.tanker_capacity),
            ("receipt-number", &self.receipt_number),
            ("voucher-amount", &self.voucher_amount),
            ("meter-start", &self.meter_start),
            ("meter-end", &self.meter_end),
            ("branch", &self.branch),
        ]
        .into_iter()
        .filter(|(_, v)| v.trim().is_empty())
        .map(|(k, _)| k)
        .collect()
    }
}

/// A photo that was never taken counts as a missing required field.
fn take_photo<C: ImageCapture>(capture: &mut C, field: &str) -> AppResult<String> {
    match capture.capture() {
        CaptureOutcome::Cancelled => Err(AppError::Validation(format!(
            "Please fill all required fields. Missing: {}",
            field
        ))),
        outcome => outcome.into_result(),
    }
}

pub struct CreateLogic;

impl CreateLogic {
    /// Validate the form, take both photos and store the new record.
    ///
    /// Text fields are checked before any photo is taken; a failed or
    /// cancelled photo aborts without storing anything.
    pub fn apply<Repo, V, T>(
        repo: &mut Repo,
        form: NewTanker,
        voucher_capture: &mut V,
        tanker_capture: &mut T,
        now: NaiveDateTime,
    ) -> AppResult<TankerRecord>
    where
        Repo: RecordRepository<TankerRecord>,
        V: ImageCapture,
        T: ImageCapture,
    {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Please fill all required fields. Missing: {}",
                missing.join(", ")
            )));
        }

        let voucher_photo = take_photo(voucher_capture, "voucher-photo")?;
        let tanker_photo = take_photo(tanker_capture, "tanker-photo")?;

        let existing = repo.list()?;
        let record = TankerRecord {
            id: next_id(&existing),
            tanker_number: form.tanker_number,
            owner_name: form.owner_name,
            tanker_capacity: form.tanker_capacity,
            date_time: now,
            receipt_number: form.receipt_number,
            voucher_amount: form.voucher_amount,
            receipt_date: form.receipt_date.unwrap_or(now.date()),
            meter_start: form.meter_start,
            meter_end: form.meter_end,
            voucher_photo: Some(voucher_photo),
            tanker_photo: Some(tanker_photo),
            branch: form.branch,
        };

        repo.upsert(record.clone())?;
        Ok(record)
    }
}
