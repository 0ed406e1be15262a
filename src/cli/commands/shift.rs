use crate::capture::PathCapture;
use crate::cli::commands::{load_session, open_db};
use crate::cli::parser::{Commands, ShiftAction};
use crate::config::Config;
use crate::core::shift::ShiftTracker;
use crate::db::kv::SqliteStore;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::models::shift::ShiftState;
use crate::ui::messages::{alert, info};
use crate::utils::colors::colorize_shift;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Shift { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let session = load_session(&pool, cfg)?;
    session.require_branch()?;

    let now = date::now();
    let mut store = SqliteStore::new(&pool.conn);
    let mut tracker = ShiftTracker::load(&mut store, now)?;

    match action {
        ShiftAction::Start { name, image } => {
            let mut camera = PathCapture::new(image.as_deref());
            let label = tracker.label();
            let active = tracker.start(name, &mut camera, now)?;

            alert(
                "Shift Started",
                format!(
                    "{} started {} shift at {}",
                    active.employee_name, label, active.start_time
                ),
            );
            audit(
                &pool.conn,
                "shift_start",
                &active.employee_name,
                &format!("{} shift started at {}", label, active.start_time),
            );
        }

        ShiftAction::End => {
            let summary = tracker.end(now)?;

            alert(
                "Shift Ended",
                format!(
                    "{} ended {} shift at {}",
                    summary.employee_name, summary.label, summary.end_time
                ),
            );
            audit(
                &pool.conn,
                "shift_end",
                &summary.employee_name,
                &format!(
                    "{} shift {} - {}",
                    summary.label, summary.start_time, summary.end_time
                ),
            );
        }

        ShiftAction::Status => match tracker.state() {
            ShiftState::Idle => info(format!(
                "No active shift. Current shift window: {}",
                tracker.label()
            )),
            ShiftState::Active(active) => {
                println!("Employee : {}", active.employee_name);
                println!("Photo    : {}", active.image_ref);
                println!(
                    "Shift    : {} | Start: {}",
                    colorize_shift(tracker.label().as_str(), true),
                    active.start_time
                );
            }
        },
    }

    Ok(())
}
