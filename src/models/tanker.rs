use super::record::Record;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{parse_date, parse_date_time};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A tanker delivery entry.
///
/// Payload fields are free text: capacity, amounts and meter readings are
/// never checked to be numeric.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TankerRecord {
    pub id: String,
    pub tanker_number: String,
    pub owner_name: String,
    pub tanker_capacity: String,
    pub date_time: NaiveDateTime,
    pub receipt_number: String,
    pub voucher_amount: String,
    pub receipt_date: NaiveDate,
    pub meter_start: String,
    pub meter_end: String,
    pub voucher_photo: Option<String>,
    pub tanker_photo: Option<String>,
    pub branch: String,
}

impl Record for TankerRecord {
    fn id(&self) -> &str {
        &self.id
    }

    fn branch(&self) -> Option<&str> {
        Some(&self.branch)
    }

    fn recorded_at(&self) -> Option<NaiveDateTime> {
        Some(self.date_time)
    }
}

/// Fields that can be written through the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TankerField {
    TankerNumber,
    OwnerName,
    TankerCapacity,
    DateTime,
    ReceiptNumber,
    VoucherAmount,
    ReceiptDate,
    MeterStart,
    MeterEnd,
    VoucherPhoto,
    TankerPhoto,
    Branch,
}

impl TankerField {
    pub const ALL: [TankerField; 12] = [
        TankerField::TankerNumber,
        TankerField::OwnerName,
        TankerField::TankerCapacity,
        TankerField::DateTime,
        TankerField::ReceiptNumber,
        TankerField::VoucherAmount,
        TankerField::ReceiptDate,
        TankerField::MeterStart,
        TankerField::MeterEnd,
        TankerField::VoucherPhoto,
        TankerField::TankerPhoto,
        TankerField::Branch,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TankerField::TankerNumber => "Tanker No",
            TankerField::OwnerName => "Owner Name",
            TankerField::TankerCapacity => "Capacity",
            TankerField::DateTime => "Date & Time",
            TankerField::ReceiptNumber => "Receipt No",
            TankerField::VoucherAmount => "Voucher Amount",
            TankerField::ReceiptDate => "Receipt Date",
            TankerField::MeterStart => "Meter Start",
            TankerField::MeterEnd => "Meter End",
            TankerField::VoucherPhoto => "Voucher Photo",
            TankerField::TankerPhoto => "Tanker Photo",
            TankerField::Branch => "Branch",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            TankerField::TankerNumber => "tanker-number",
            TankerField::OwnerName => "owner-name",
            TankerField::TankerCapacity => "capacity",
            TankerField::DateTime => "date-time",
            TankerField::ReceiptNumber => "receipt-number",
            TankerField::VoucherAmount => "voucher-amount",
            TankerField::ReceiptDate => "receipt-date",
            TankerField::MeterStart => "meter-start",
            TankerField::MeterEnd => "meter-end",
            TankerField::VoucherPhoto => "voucher-photo",
            TankerField::TankerPhoto => "tanker-photo",
            TankerField::Branch => "branch",
        }
    }

    /// Accepts the kebab-case key, case-insensitively.
    pub fn from_key(s: &str) -> Option<Self> {
        let wanted = s.trim().to_lowercase().replace('_', "-");
        Self::ALL.into_iter().find(|f| f.key() == wanted)
    }
}

impl TankerRecord {
    /// Write `value` into `field`.
    ///
    /// Text fields take any string as is. Only the two date fields are parsed,
    /// because they are typed.
    pub fn set_field(&mut self, field: TankerField, value: &str) -> AppResult<()> {
        let text = value.to_string();
        match field {
            TankerField::TankerNumber => self.tanker_number = text,
            TankerField::OwnerName => self.owner_name = text,
            TankerField::TankerCapacity => self.tanker_capacity = text,
            TankerField::ReceiptNumber => self.receipt_number = text,
            TankerField::VoucherAmount => self.voucher_amount = text,
            TankerField::MeterStart => self.meter_start = text,
            TankerField::MeterEnd => self.meter_end = text,
            TankerField::Branch => self.branch = text,
            TankerField::VoucherPhoto => self.voucher_photo = Some(text).filter(|s| !s.is_empty()),
            TankerField::TankerPhoto => self.tanker_photo = Some(text).filter(|s| !s.is_empty()),
            TankerField::DateTime => {
                self.date_time =
                    parse_date_time(value).ok_or_else(|| AppError::InvalidDate(text.clone()))?
            }
            TankerField::ReceiptDate => {
                self.receipt_date =
                    parse_date(value).ok_or_else(|| AppError::InvalidDate(text.clone()))?
            }
        }
        Ok(())
    }

    /// Display value of a field, as shown in the detail view.
    pub fn field_value(&self, field: TankerField) -> String {
        match field {
            TankerField::TankerNumber => self.tanker_number.clone(),
            TankerField::OwnerName => self.owner_name.clone(),
            TankerField::TankerCapacity => format!("{} KL", self.tanker_capacity),
            TankerField::DateTime => self.date_time.format("%Y-%m-%d %H:%M").to_string(),
            TankerField::ReceiptNumber => self.receipt_number.clone(),
            TankerField::VoucherAmount => self.voucher_amount.clone(),
            TankerField::ReceiptDate => self.receipt_date.format("%Y-%m-%d").to_string(),
            TankerField::MeterStart => self.meter_start.clone(),
            TankerField::MeterEnd => self.meter_end.clone(),
            TankerField::VoucherPhoto => self.voucher_photo.clone().unwrap_or_default(),
            TankerField::TankerPhoto => self.tanker_photo.clone().unwrap_or_default(),
            TankerField::Branch => self.branch.clone(),
        }
    }
}
