use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::seed_if_empty;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::utils::date;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - the SQLite database and all pending migrations
///  - the sample tanker and bunker records, when the tables are empty
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing tankerlog…");
    println!("🗄️  Database   : {}", &db_path);

    let pool = DbPool::open_ready(&db_path)?;
    let seeded = seed_if_empty(&pool.conn, date::now())?;

    if seeded > 0 {
        println!("🌱 Loaded {} sample records", seeded);
    }

    println!("✅ Database initialized at {}", &db_path);

    audit(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {} ({} sample records)", &db_path, seeded),
    );

    println!("🎉 tankerlog initialization completed!");
    Ok(())
}
