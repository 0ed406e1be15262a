pub mod auth;
pub mod branch;
pub mod bunker;
pub mod config;
pub mod dashboard;
pub mod init;
pub mod log;
pub mod shift;
pub mod tanker;

use crate::config::Config;
use crate::core::session::SessionState;
use crate::db::kv::SqliteStore;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::session::Session;

/// Open the configured database with an up-to-date schema.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    DbPool::open_ready(&cfg.database)
}

/// Read the session context persisted in the database.
pub(crate) fn load_session(pool: &DbPool, cfg: &Config) -> AppResult<Session> {
    let store = SqliteStore::new(&pool.conn);
    SessionState::load(&store, &cfg.default_branch)
}
