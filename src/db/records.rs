//! SQLite tables behind [`RecordRepository`].

use crate::core::repository::RecordRepository;
use crate::errors::{AppError, AppResult};
use crate::models::bunker::BunkerRecord;
use crate::models::tanker::TankerRecord;
use crate::utils::date::{format_date, format_date_time, parse_date, parse_date_time};
use rusqlite::{Connection, OptionalExtension, Row, params};

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, rusqlite::types::Type::Text, Box::new(err))
}

const TANKER_COLUMNS: &str = "id, tanker_number, owner_name, tanker_capacity, date_time, \
     receipt_number, voucher_amount, receipt_date, meter_start, meter_end, \
     voucher_photo, tanker_photo, branch";

fn map_tanker(row: &Row) -> rusqlite::Result<TankerRecord> {
    let date_time_str: String = row.get("date_time")?;
    let receipt_str: String = row.get("receipt_date")?;

    let date_time = parse_date_time(&date_time_str)
        .ok_or_else(|| conversion_error(4, AppError::InvalidDate(date_time_str.clone())))?;
    let receipt_date = parse_date(&receipt_str)
        .ok_or_else(|| conversion_error(7, AppError::InvalidDate(receipt_str.clone())))?;

    Ok(TankerRecord {
        id: row.get("id")?,
        tanker_number: row.get("tanker_number")?,
        owner_name: row.get("owner_name")?,
        tanker_capacity: row.get("tanker_capacity")?,
        date_time,
        receipt_number: row.get("receipt_number")?,
        voucher_amount: row.get("voucher_amount")?,
        receipt_date,
        meter_start: row.get("meter_start")?,
        meter_end: row.get("meter_end")?,
        voucher_photo: row.get("voucher_photo")?,
        tanker_photo: row.get("tanker_photo")?,
        branch: row.get("branch")?,
    })
}

fn map_bunker(row: &Row) -> rusqlite::Result<BunkerRecord> {
    Ok(BunkerRecord {
        id: row.get("id")?,
        name: row.get("name")?,
        image: row.get("image")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        shift: row.get("shift")?,
    })
}

pub struct TankerTable<'c> {
    conn: &'c Connection,
}

impl<'c> TankerTable<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> AppResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM tanker_records", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}

impl RecordRepository<TankerRecord> for TankerTable<'_> {
    fn get(&self, id: &str) -> AppResult<Option<TankerRecord>> {
        let sql = format!("SELECT {} FROM tanker_records WHERE id = ?1", TANKER_COLUMNS);
        let rec = self.conn.query_row(&sql, [id], map_tanker).optional()?;
        Ok(rec)
    }

    fn list(&self) -> AppResult<Vec<TankerRecord>> {
        let sql = format!("SELECT {} FROM tanker_records ORDER BY seq ASC", TANKER_COLUMNS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], map_tanker)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn upsert(&mut self, t: TankerRecord) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO tanker_records (id, tanker_number, owner_name, tanker_capacity, date_time,
                 receipt_number, voucher_amount, receipt_date, meter_start, meter_end,
                 voucher_photo, tanker_photo, branch)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)
             ON CONFLICT(id) DO UPDATE SET
                 tanker_number = excluded.tanker_number,
                 owner_name = excluded.owner_name,
                 tanker_capacity = excluded.tanker_capacity,
                 date_time = excluded.date_time,
                 receipt_number = excluded.receipt_number,
                 voucher_amount = excluded.voucher_amount,
                 receipt_date = excluded.receipt_date,
                 meter_start = excluded.meter_start,
                 meter_end = excluded.meter_end,
                 voucher_photo = excluded.voucher_photo,
                 tanker_photo = excluded.tanker_photo,
                 branch = excluded.branch",
            params![
                t.id,
                t.tanker_number,
                t.owner_name,
                t.tanker_capacity,
                format_date_time(&t.date_time),
                t.receipt_number,
                t.voucher_amount,
                format_date(&t.receipt_date),
                t.meter_start,
                t.meter_end,
                t.voucher_photo,
                t.tanker_photo,
                t.branch,
            ],
        )?;
        Ok(())
    }
}

pub struct BunkerTable<'c> {
    conn: &'c Connection,
}

impl<'c> BunkerTable<'c> {
    pub fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    pub fn count(&self) -> AppResult<usize> {
        let n: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM bunker_records", [], |r| r.get(0))?;
        Ok(n as usize)
    }
}

impl RecordRepository<BunkerRecord> for BunkerTable<'_> {
    fn get(&self, id: &str) -> AppResult<Option<BunkerRecord>> {
        let rec = self
            .conn
            .query_row(
                "SELECT id, name, image, start_time, end_time, shift
                 FROM bunker_records WHERE id = ?1",
                [id],
                map_bunker,
            )
            .optional()?;
        Ok(rec)
    }

    fn list(&self) -> AppResult<Vec<BunkerRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, image, start_time, end_time, shift
             FROM bunker_records ORDER BY seq ASC",
        )?;
        let rows = stmt.query_map([], map_bunker)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn upsert(&mut self, b: BunkerRecord) -> AppResult<()> {
        self.conn.execute(
            "INSERT INTO bunker_records (id, name, image, start_time, end_time, shift)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)
             ON CONFLICT(id) DO UPDATE SET
                 name = excluded.name,
                 image = excluded.image,
                 start_time = excluded.start_time,
                 end_time = excluded.end_time,
                 shift = excluded.shift",
            params![b.id, b.name, b.image, b.start_time, b.end_time, b.shift],
        )?;
        Ok(())
    }
}
