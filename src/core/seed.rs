//! Sample record sets loaded into a fresh database.

use crate::models::bunker::BunkerRecord;
use crate::models::tanker::TankerRecord;
use chrono::NaiveDateTime;

// (tanker number, owner, capacity, receipt, voucher amount, meter start, meter end, branch)
const TANKERS: [(&str, &str, &str, &str, &str, &str, &str, &str); 10] = [
    ("AP31XY1001", "Suresh", "5000", "RV1001", "12000", "100", "500", "Branch A"),
    ("AP31XY1002", "Ramesh", "5200", "RV1002", "15000", "200", "600", "Branch B"),
    ("AP31XY1003", "Mahesh", "4800", "RV1003", "10000", "150", "550", "Branch A"),
    ("AP31XY1004", "Sathish", "5100", "RV1004", "13000", "120", "520", "Branch B"),
    ("AP31XY1005", "Prakash", "5300", "RV1005", "14000", "180", "580", "Branch C"),
    ("AP31XY1006", "Karthik", "5000", "RV1006", "12500", "130", "530", "Branch C"),
    ("AP31XY1007", "Vignesh", "4950", "RV1007", "11000", "140", "540", "Branch A"),
    ("AP31XY1008", "Ajith", "5050", "RV1008", "13500", "160", "560", "Branch B"),
    ("AP31XY1009", "Manoj", "5200", "RV1009", "14500", "170", "570", "Branch C"),
    ("AP31XY1010", "Ravi", "5000", "RV1010", "12500", "150", "550", "Branch A"),
];

// (name, start, end, shift)
const BUNKERS: [(&str, &str, &str, &str); 6] = [
    ("Bunker A", "06:00", "14:00", "Morning"),
    ("Bunker B", "14:00", "22:00", "Evening"),
    ("Bunker C", "22:00", "06:00", "Night"),
    ("Bunker D", "06:00", "14:00", "Morning"),
    ("Bunker E", "14:00", "22:00", "Evening"),
    ("Bunker F", "22:00", "06:00", "Night"),
];

/// Ten tanker records over three branches, all stamped with `now`.
pub fn sample_tankers(now: NaiveDateTime) -> Vec<TankerRecord> {
    TANKERS
        .iter()
        .enumerate()
        .map(
            |(i, (number, owner, capacity, receipt, amount, m_start, m_end, branch))| {
                TankerRecord {
                    id: (i + 1).to_string(),
                    tanker_number: number.to_string(),
                    owner_name: owner.to_string(),
                    tanker_capacity: capacity.to_string(),
                    date_time: now,
                    receipt_number: receipt.to_string(),
                    voucher_amount: amount.to_string(),
                    receipt_date: now.date(),
                    meter_start: m_start.to_string(),
                    meter_end: m_end.to_string(),
                    voucher_photo: None,
                    tanker_photo: None,
                    branch: branch.to_string(),
                }
            },
        )
        .collect()
}

pub fn sample_bunkers() -> Vec<BunkerRecord> {
    BUNKERS
        .iter()
        .enumerate()
        .map(|(i, (name, start, end, shift))| BunkerRecord {
            id: (i + 1).to_string(),
            name: name.to_string(),
            image: None,
            start_time: start.to_string(),
            end_time: end.to_string(),
            shift: shift.to_string(),
        })
        .collect()
}
