use crate::cli::commands::{load_session, open_db};
use crate::config::Config;
use crate::core::dashboard::{Card, DashboardLogic};
use crate::core::repository::RecordRepository;
use crate::core::shift::ShiftTracker;
use crate::db::kv::SqliteStore;
use crate::db::records::TankerTable;
use crate::errors::AppResult;
use crate::models::shift::ShiftState;
use crate::ui::messages::header;
use crate::utils::colors::colorize_shift;
use crate::utils::date;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let pool = open_db(cfg)?;
    let session = load_session(&pool, cfg)?;
    let caps = session.require_login()?;

    let tankers = TankerTable::new(&pool.conn).list()?;

    let shift = if caps.is_branch {
        let mut store = SqliteStore::new(&pool.conn);
        let tracker = ShiftTracker::load(&mut store, date::now())?;
        Some((tracker.label(), tracker.state().clone()))
    } else {
        None
    };

    header(format!("Welcome {}", caps.greeting()));

    let tabs: Vec<&str> = caps.visible_tabs().iter().map(|t| t.title()).collect();
    println!("Tabs: {}\n", tabs.join(" | "));

    for card in DashboardLogic::cards(&session, &tankers, shift) {
        match &card {
            Card::CurrentEmployee { label, state } => match state {
                ShiftState::Idle => println!(
                    "{:<18}: {}",
                    card.title(),
                    colorize_shift("no active shift", false)
                ),
                ShiftState::Active(active) => println!(
                    "{:<18}: {} | Shift: {} | Start: {}",
                    card.title(),
                    active.employee_name,
                    colorize_shift(label.as_str(), true),
                    active.start_time
                ),
            },
            Card::TotalBranches(n) | Card::NumberOfTankers(n) => {
                println!("{:<18}: {}", card.title(), n)
            }
            Card::TotalQuantity(q) => println!("{:<18}: {} L", card.title(), q),
        }
    }

    Ok(())
}
