use crate::cli::commands::{load_session, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::session::SessionState;
use crate::db::kv::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle `login`, `logout` and `whoami`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;

    match cmd {
        Commands::Login { username, password } => {
            let mut store = SqliteStore::new(&pool.conn);
            let user = SessionState::login(&mut store, username, password)?;

            success(format!("Logged in as {} ({})", user.username, user.role));
            audit(&pool.conn, "login", user.username, &format!("role={}", user.role));
        }

        Commands::Logout => {
            let session = load_session(&pool, cfg)?;
            let mut store = SqliteStore::new(&pool.conn);
            SessionState::logout(&mut store)?;

            success("Logged out. Local session cleared.");
            audit(
                &pool.conn,
                "logout",
                session.username.as_deref().unwrap_or(""),
                "Local session cleared",
            );
        }

        Commands::Whoami => {
            let session = load_session(&pool, cfg)?;
            let Some(role) = session.role.as_deref() else {
                info("Not logged in.");
                return Ok(());
            };

            let caps = &session.capabilities;
            let tabs: Vec<&str> = caps.visible_tabs().iter().map(|t| t.title()).collect();

            println!("User   : {}", session.username.as_deref().unwrap_or("-"));
            println!("Role   : {}", role);
            println!("Branch : {}", session.branch_scope);
            println!(
                "Access : admin={} superadmin={} branch={}",
                caps.is_admin, caps.is_super_admin, caps.is_branch
            );
            println!("Tabs   : {}", tabs.join(", "));
        }

        _ => {}
    }

    Ok(())
}
