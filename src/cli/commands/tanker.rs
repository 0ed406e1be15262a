use crate::capture::PathCapture;
use crate::cli::commands::{load_session, open_db};
use crate::cli::parser::{Commands, TankerAction, TankerFieldArgs};
use crate::config::Config;
use crate::core::create::{CreateLogic, NewTanker};
use crate::core::repository::RecordRepository;
use crate::core::view::{clamp_page, compute_view, in_scope};
use crate::db::log::audit;
use crate::db::records::TankerTable;
use crate::errors::{AppError, AppResult};
use crate::models::session::Session;
use crate::models::tanker::{TankerField, TankerRecord};
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::pager;
use crate::utils::table::Table;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Tanker { action } = cmd else {
        return Ok(());
    };

    let pool = open_db(cfg)?;
    let session = load_session(&pool, cfg)?;
    session.require_login()?;

    let mut repo = TankerTable::new(&pool.conn);

    match action {
        TankerAction::List { date, page, json } => {
            let filter_date = parse_filter_date(date.as_deref())?;
            list(&repo, &session, cfg, filter_date, *page, *json)?;
        }

        TankerAction::View { id, json } => match visible_record(&repo, &session, id)? {
            Some(t) if *json => println!("{}", serde_json::to_string_pretty(&t)?),
            Some(t) => print_tanker(&t),
            None => warning(format!("No tanker record with id {}", id)),
        },

        TankerAction::Edit { id, fields, set } => {
            let mut assignments = field_assignments(fields);
            for pair in set {
                assignments.push(parse_assignment(pair)?);
            }
            if assignments.is_empty() {
                return Err(AppError::Validation(
                    "nothing to edit: pass at least one field flag or --set".to_string(),
                ));
            }

            // Moving a record to another branch is an admin action
            if !session.capabilities.is_admin
                && assignments.iter().any(|(f, _)| *f == TankerField::Branch)
            {
                return Err(AppError::Unauthorized(
                    "only admins can change the branch of a record".to_string(),
                ));
            }

            // Out of scope records are a miss, like unknown ids
            let Some(mut record) = visible_record(&repo, &session, id)? else {
                warning(format!("No tanker record with id {}; nothing changed", id));
                return Ok(());
            };

            for (field, value) in &assignments {
                record.set_field(*field, value)?;
            }

            repo.upsert(record)?;

            let keys: Vec<&str> = assignments.iter().map(|(f, _)| f.key()).collect();
            success(format!("Tanker record {} updated", id));
            audit(&pool.conn, "edit", id, &format!("fields: {}", keys.join(", ")));
        }

        TankerAction::Add { fields } => {
            let branch = match &fields.branch {
                Some(b) if session.capabilities.is_admin => b.clone(),
                Some(_) => {
                    return Err(AppError::Unauthorized(
                        "only admins can add records for another branch".to_string(),
                    ));
                }
                None => session.branch_scope.clone(),
            };

            let form = NewTanker {
                tanker_number: fields.tanker_number.clone().unwrap_or_default(),
                owner_name: fields.owner_name.clone().unwrap_or_default(),
                tanker_capacity: fields.capacity.clone().unwrap_or_default(),
                receipt_number: fields.receipt_number.clone().unwrap_or_default(),
                voucher_amount: fields.voucher_amount.clone().unwrap_or_default(),
                meter_start: fields.meter_start.clone().unwrap_or_default(),
                meter_end: fields.meter_end.clone().unwrap_or_default(),
                receipt_date: parse_filter_date(fields.receipt_date.as_deref())?,
                branch,
            };

            let mut voucher_camera = PathCapture::new(fields.voucher_photo.as_deref());
            let mut tanker_camera = PathCapture::new(fields.tanker_photo.as_deref());

            let record = CreateLogic::apply(
                &mut repo,
                form,
                &mut voucher_camera,
                &mut tanker_camera,
                date::now(),
            )?;

            success(format!(
                "Tanker record {} added for {}",
                record.id, record.branch
            ));
            audit(
                &pool.conn,
                "add",
                &record.id,
                &format!("{} ({})", record.tanker_number, record.branch),
            );
        }
    }

    Ok(())
}

fn parse_filter_date(raw: Option<&str>) -> AppResult<Option<NaiveDate>> {
    match raw {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// A record the session is allowed to see, if any.
fn visible_record(
    repo: &TankerTable,
    session: &Session,
    id: &str,
) -> AppResult<Option<TankerRecord>> {
    Ok(repo
        .get(id)?
        .filter(|t| in_scope(t, &session.capabilities, &session.branch_scope)))
}

fn list(
    repo: &TankerTable,
    session: &Session,
    cfg: &Config,
    filter_date: Option<NaiveDate>,
    page: usize,
    json: bool,
) -> AppResult<()> {
    let records = repo.list()?;
    let size = cfg.page_size()?;
    let caps = &session.capabilities;
    let scope = session.branch_scope.as_str();

    let mut current = page;
    let mut view = compute_view(&records, caps, scope, filter_date, current, size);

    // The engine never clamps; keep the pager on a real page
    let clamped = clamp_page(current, view.total_pages);
    if clamped != current {
        warning(format!(
            "Page {} out of range, showing page {}",
            current, clamped
        ));
        current = clamped;
        view = compute_view(&records, caps, scope, filter_date, current, size);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    if let Some(d) = filter_date {
        println!("Date filter: {}", d);
    }

    if view.visible.is_empty() {
        println!("No tanker records found");
    } else {
        let mut table = Table::with_headers(&[
            "ID",
            "Tanker No",
            "Owner",
            "Capacity",
            "Date & Time",
            "Receipt No",
            "Amount",
            "Branch",
        ]);
        for t in &view.visible {
            table.add_row(vec![
                t.id.clone(),
                t.tanker_number.clone(),
                t.owner_name.clone(),
                t.tanker_capacity.clone(),
                t.date_time.format("%Y-%m-%d %H:%M").to_string(),
                t.receipt_number.clone(),
                t.voucher_amount.clone(),
                t.branch.clone(),
            ]);
        }
        print!("{}", table.render());
    }

    println!("{}", pager(current, view.total_pages));
    Ok(())
}

fn print_tanker(t: &TankerRecord) {
    println!("=== Tanker {} ===", t.id);
    for field in TankerField::ALL {
        let value = t.field_value(field);
        let shown = if value.is_empty() { "--".to_string() } else { value };
        println!("{:<15}: {}", field.label(), colorize_optional(&shown));
    }
}

fn field_assignments(fields: &TankerFieldArgs) -> Vec<(TankerField, String)> {
    [
        (TankerField::TankerNumber, &fields.tanker_number),
        (TankerField::OwnerName, &fields.owner_name),
        (TankerField::TankerCapacity, &fields.capacity),
        (TankerField::DateTime, &fields.date_time),
        (TankerField::ReceiptNumber, &fields.receipt_number),
        (TankerField::VoucherAmount, &fields.voucher_amount),
        (TankerField::ReceiptDate, &fields.receipt_date),
        (TankerField::MeterStart, &fields.meter_start),
        (TankerField::MeterEnd, &fields.meter_end),
        (TankerField::VoucherPhoto, &fields.voucher_photo),
        (TankerField::TankerPhoto, &fields.tanker_photo),
        (TankerField::Branch, &fields.branch),
    ]
    .into_iter()
    .filter_map(|(f, v)| v.clone().map(|v| (f, v)))
    .collect()
}

/// `key=value`, the value may itself contain `=`.
fn parse_assignment(raw: &str) -> AppResult<(TankerField, String)> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| AppError::Validation(format!("expected FIELD=VALUE, got '{}'", raw)))?;
    let field = TankerField::from_key(key).ok_or_else(|| AppError::UnknownField(key.to_string()))?;
    Ok((field, value.to_string()))
}
