use crate::cli::commands::{build_query, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::statistics::resolve_period;
use crate::errors::AppResult;
use crate::store::EntryStore;
use crate::ui::messages::info;
use crate::utils::colors::colorize_optional;
use crate::utils::date;
use crate::utils::formatting::{mins2readable, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, from, to } = cmd {
        let query = build_query(period, from, to)?;
        let range = resolve_period(&query, date::today())?;

        let pool = open_pool(cfg)?;
        let entries = pool.query_range(range.start, range.end)?;

        if entries.is_empty() {
            info(format!("No entries between {} and {}.", range.start, range.end));
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::right("ID"),
            Column::left("DATE"),
            Column::left("TIME"),
            Column::right("DURATION"),
            Column::right("SALARY"),
            Column::left("NOTES"),
        ]);

        for e in &entries {
            table.add_row(vec![
                e.id.to_string(),
                e.date_str(),
                format!("{} - {}", e.start_str(), e.end_str()),
                mins2readable(e.duration),
                money(e.salary, &cfg.currency),
                colorize_optional(&e.notes),
            ]);
        }

        print!("{}", table.render());
        println!("{} day(s)", entries.len());
    }

    Ok(())
}
