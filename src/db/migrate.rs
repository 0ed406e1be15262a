use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists. Migrations record themselves there.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (strftime('%Y-%m-%dT%H:%M:%SZ', 'now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Key-value table standing in for the device local storage.
fn create_kv_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
}

/// `seq` keeps insertion order; upserts never change it.
fn create_tanker_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tanker_records (
            seq             INTEGER PRIMARY KEY AUTOINCREMENT,
            id              TEXT NOT NULL UNIQUE,
            tanker_number   TEXT NOT NULL DEFAULT '',
            owner_name      TEXT NOT NULL DEFAULT '',
            tanker_capacity TEXT NOT NULL DEFAULT '',
            date_time       TEXT NOT NULL,
            receipt_number  TEXT NOT NULL DEFAULT '',
            voucher_amount  TEXT NOT NULL DEFAULT '',
            receipt_date    TEXT NOT NULL,
            meter_start     TEXT NOT NULL DEFAULT '',
            meter_end       TEXT NOT NULL DEFAULT '',
            voucher_photo   TEXT,
            tanker_photo    TEXT,
            branch          TEXT NOT NULL DEFAULT ''
        );

        CREATE INDEX IF NOT EXISTS idx_tanker_branch ON tanker_records(branch);
        "#,
    )
}

fn create_bunker_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS bunker_records (
            seq        INTEGER PRIMARY KEY AUTOINCREMENT,
            id         TEXT NOT NULL UNIQUE,
            name       TEXT NOT NULL,
            image      TEXT,
            start_time TEXT NOT NULL,
            end_time   TEXT NOT NULL,
            shift      TEXT NOT NULL
        );
        "#,
    )
}

type Step = fn(&Connection) -> Result<()>;

const MIGRATIONS: [(&str, Step, &str); 3] = [
    ("20251019_0001_create_kv", create_kv_table, "Created kv table"),
    (
        "20251019_0002_create_tanker_records",
        create_tanker_table,
        "Created tanker_records table",
    ),
    (
        "20251019_0003_create_bunker_records",
        create_bunker_table,
        "Created bunker_records table",
    ),
];

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for (version, step, message) in MIGRATIONS {
        if is_applied(conn, version)? {
            continue;
        }

        step(conn)?;
        mark_applied(conn, version, message)?;
        success(format!("Migration applied: {}", version));
        applied += 1;
    }

    Ok(applied)
}
