use crate::core::repository::RecordRepository;
use crate::core::seed::{sample_bunkers, sample_tankers};
use crate::db::migrate::run_pending_migrations;
use crate::db::records::{BunkerTable, TankerTable};
use crate::errors::{AppError, AppResult};
use chrono::NaiveDateTime;
use rusqlite::Connection;

/// Initialize the database.
/// Delegates all schema creation / upgrades to the migration engine.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn).map_err(|e| AppError::Migration(e.to_string()))?;
    Ok(())
}

/// Load the sample record sets into empty tables, in one transaction.
/// Returns how many records were inserted.
pub fn seed_if_empty(conn: &Connection, now: NaiveDateTime) -> AppResult<usize> {
    let tx = conn.unchecked_transaction()?;
    let mut inserted = 0;

    let mut tankers = TankerTable::new(&tx);
    if tankers.count()? == 0 {
        for t in sample_tankers(now) {
            tankers.upsert(t)?;
            inserted += 1;
        }
    }

    let mut bunkers = BunkerTable::new(&tx);
    if bunkers.count()? == 0 {
        for b in sample_bunkers() {
            bunkers.upsert(b)?;
            inserted += 1;
        }
    }

    tx.commit()?;
    Ok(inserted)
}
