use crate::cli::commands::{load_session, open_db};
use crate::cli::parser::{BunkerAction, Commands};
use crate::config::Config;
use crate::core::repository::RecordRepository;
use crate::core::view::{clamp_page, compute_view};
use crate::db::records::BunkerTable;
use crate::errors::AppResult;
use crate::models::bunker::BunkerRecord;
use crate::ui::messages::warning;
use crate::utils::colors::colorize_optional;
use crate::utils::formatting::{or_placeholder, pager};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Bunker { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let session = load_session(&pool, cfg)?;
    session.require_admin()?;

    let repo = BunkerTable::new(&pool.conn);

    match action {
        BunkerAction::List { page } => {
            let records = repo.list()?;
            let size = cfg.page_size()?;
            let caps = &session.capabilities;

            let mut view = compute_view(&records, caps, &session.branch_scope, None, *page, size);
            let mut current = *page;
            let clamped = clamp_page(current, view.total_pages);
            if clamped != current {
                warning(format!(
                    "Page {} out of range, showing page {}",
                    current, clamped
                ));
                current = clamped;
                view = compute_view(&records, caps, &session.branch_scope, None, current, size);
            }

            if view.visible.is_empty() {
                println!("No bunker records found");
            } else {
                let mut table = Table::with_headers(&["ID", "Name", "Start", "End", "Shift", "Image"]);
                for b in &view.visible {
                    table.add_row(vec![
                        b.id.clone(),
                        b.name.clone(),
                        b.start_time.clone(),
                        b.end_time.clone(),
                        b.shift.clone(),
                        or_placeholder(b.image.as_deref()),
                    ]);
                }
                print!("{}", table.render());
            }

            println!("{}", pager(current, view.total_pages));
        }

        BunkerAction::View { id } => match repo.get(id)? {
            Some(b) => print_bunker(&b),
            None => warning(format!("No bunker record with id {}", id)),
        },
    }

    Ok(())
}

fn print_bunker(b: &BunkerRecord) {
    println!("=== {} ===", b.name);
    println!("ID    : {}", b.id);
    println!("Start : {}", b.start_time);
    println!("End   : {}", b.end_time);
    println!("Shift : {}", b.shift);
    println!(
        "Image : {}",
        colorize_optional(&or_placeholder(b.image.as_deref()))
    );
}
