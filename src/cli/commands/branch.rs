use crate::cli::commands::{load_session, open_db};
use crate::cli::parser::{BranchAction, Commands};
use crate::config::Config;
use crate::core::session::SessionState;
use crate::db::kv::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Branch { action } = cmd {
        let pool = open_db(cfg)?;

        match action {
            BranchAction::Set { name } => {
                let mut store = SqliteStore::new(&pool.conn);
                SessionState::set_branch(&mut store, name)?;

                success(format!("Branch scope set to '{}'", name));
                audit(&pool.conn, "branch", name, "Branch scope changed");
            }
            BranchAction::Show => {
                let session = load_session(&pool, cfg)?;
                println!("{}", session.branch_scope);
            }
        }
    }

    Ok(())
}
