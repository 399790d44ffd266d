use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::DayEntryService;
use crate::db::log::ttlog_or_warn;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::EntryInput;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::formatting::{mins2readable, money};
use crate::utils::time::parse_optional_time;

/// Log a workday. An existing entry for the date is edited in place and
/// keeps any field not given on the command line.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        notes,
    } = cmd
    {
        //
        // 1. Parse arguments
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start_parsed = parse_optional_time(start.as_ref())?;
        let end_parsed = parse_optional_time(end.as_ref())?;

        //
        // 2. Open DB
        //
        let mut pool = open_pool(cfg)?;

        //
        // 3. Add or edit, depending on what is already logged for the day
        //
        let (saved, edited) = {
            let mut service = DayEntryService::new(&mut pool, cfg.hourly_rate);

            let (input, id) = match service.lookup(d)? {
                Some(existing) => (
                    EntryInput::new(
                        d,
                        start_parsed.unwrap_or(existing.start),
                        end_parsed.unwrap_or(existing.end),
                        notes.clone().unwrap_or(existing.notes),
                    ),
                    Some(existing.id),
                ),
                None => {
                    let s = start_parsed.ok_or_else(|| {
                        AppError::InvalidTime("a new entry needs --in HH:MM".into())
                    })?;
                    let e = end_parsed.ok_or_else(|| {
                        AppError::InvalidTime("a new entry needs --out HH:MM".into())
                    })?;
                    (EntryInput::new(d, s, e, notes.clone().unwrap_or_default()), None)
                }
            };

            (service.save(&input, id)?, id.is_some())
        };

        //
        // 4. Audit + feedback
        //
        let summary = format!(
            "{} → {} ({}), salary {}",
            saved.start_str(),
            saved.end_str(),
            mins2readable(saved.duration),
            money(saved.salary, &cfg.currency)
        );

        let op = if edited { "edit" } else { "add" };
        ttlog_or_warn(&pool.conn, op, &saved.date_str(), &summary);

        if edited {
            success(format!("✏️ Entry for {} updated: {}.", saved.date_str(), summary));
        } else {
            success(format!("Added entry for {}: {}.", saved.date_str(), summary));
        }
    }

    Ok(())
}
