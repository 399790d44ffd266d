use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entry::DayEntryService;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{header, info};
use crate::utils::colors::{RESET, color_for_optional_field};
use crate::utils::date;
use crate::utils::formatting::{bold, mins2readable, money};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: date_str } = cmd {
        let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;

        let mut pool = open_pool(cfg)?;
        let service = DayEntryService::new(&mut pool, cfg.hourly_rate);

        let Some(entry) = service.lookup(d)? else {
            info(format!(
                "No entry for {}. Log it with: rworkcal add {} --in HH:MM --out HH:MM",
                d, d
            ));
            return Ok(());
        };

        header(d.format("%d %B %Y"));
        println!(
            "{} {} - {}",
            bold("Time:"),
            entry.start_str(),
            entry.end_str()
        );
        println!("{} {}", bold("Duration:"), mins2readable(entry.duration));

        let notes_color = color_for_optional_field(Some(&entry.notes));
        let notes = if entry.notes.trim().is_empty() {
            "Not specified"
        } else {
            entry.notes.as_str()
        };
        println!("{} {}{}{}", bold("Notes:"), notes_color, notes, RESET);

        println!("{} {}", bold("Salary:"), money(entry.salary, &cfg.currency));
        println!("{} #{}", bold("Id:"), entry.id);
    }

    Ok(())
}
