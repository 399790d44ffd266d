use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::DayEntryService;
use crate::db::log::ttlog_or_warn;
use crate::db::queries::load_entry_by_id;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use crate::utils::date;

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del {
        date: date_str,
        id,
        force,
    } = cmd
    {
        let mut pool = open_pool(cfg)?;

        //
        // Resolve the entry to delete
        //
        let (target_id, label) = match (id, date_str) {
            (Some(id), _) => {
                let label = match load_entry_by_id(&pool.conn, *id)? {
                    Some(entry) => format!("entry #{} ({})", id, entry.date_str()),
                    None => {
                        info(format!("Entry #{} does not exist, nothing to delete.", id));
                        return Ok(());
                    }
                };
                (*id, label)
            }
            (None, Some(raw)) => {
                let d = date::parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.into()))?;
                let service = DayEntryService::new(&mut pool, cfg.hourly_rate);
                match service.lookup(d)? {
                    Some(entry) => (entry.id, format!("the entry for {}", d)),
                    None => {
                        info(format!("No entry for {}, nothing to delete.", d));
                        return Ok(());
                    }
                }
            }
            (None, None) => {
                return Err(AppError::NotFound(
                    "specify a date or --id to delete".into(),
                ));
            }
        };

        //
        // Confirmation prompt
        //
        if !*force
            && !ask_confirmation(&format!("Delete {}? This action is irreversible.", label))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        //
        // Execute deletion
        //
        DayEntryService::new(&mut pool, cfg.hourly_rate).delete(target_id)?;

        ttlog_or_warn(&pool.conn, "del", &format!("#{}", target_id), &format!("Deleted {}", label));
        success(format!("Deleted {}.", label));
    }

    Ok(())
}
