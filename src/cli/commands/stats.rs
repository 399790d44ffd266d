use crate::cli::commands::{build_query, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::statistics::StatisticsService;
use crate::errors::AppResult;
use crate::models::statistics::StatisticsResult;
use crate::ui::messages::{header, info};
use crate::utils::date;
use crate::utils::formatting::{hours, money};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Stats {
        period,
        from,
        to,
        details,
    } = cmd
    {
        let query = build_query(period, from, to)?;

        let pool = open_pool(cfg)?;
        let (range, stats) =
            StatisticsService::new(&pool).resolve_and_aggregate(&query, date::today())?;

        header(format!(
            "Statistics {} → {} ({})",
            range.start,
            range.end,
            query.period.code()
        ));
        print_summary(&stats, &cfg.currency);

        if *details {
            print_details(&stats, &cfg.currency);
        }
    }

    Ok(())
}

fn print_summary(stats: &StatisticsResult, currency: &str) {
    println!("Total hours:           {}", hours(stats.total_hours));
    println!("Total salary:          {}", money(stats.total_salary, currency));
    println!("Max hours in a day:    {}", hours(stats.max_hours));
    println!("Min hours in a day:    {}", hours(stats.min_hours));
    println!("Max salary in a day:   {}", money(stats.max_salary, currency));
    println!("Min salary in a day:   {}", money(stats.min_salary, currency));
}

fn print_details(stats: &StatisticsResult, currency: &str) {
    if stats.is_empty() {
        info("No logged days in this period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("DATE"),
        Column::right("HOURS"),
        Column::right("SALARY"),
    ]);

    for d in &stats.details {
        table.add_row(vec![
            date::format_short(&d.date),
            hours(d.duration),
            money(d.salary, currency),
        ]);
    }

    println!();
    print!("{}", table.render());
}
