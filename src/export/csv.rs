use crate::errors::AppResult;
use crate::models::statistics::StatisticsResult;
use crate::utils::formatting::hours;
use csv::Writer;
use std::path::Path;

/// One row per day, followed by a `total` row.
pub fn write_csv(path: &Path, stats: &StatisticsResult) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["date", "hours", "salary"])?;

    for d in &stats.details {
        wtr.write_record(&[
            d.date.format("%Y-%m-%d").to_string(),
            hours(d.duration),
            format!("{:.2}", d.salary),
        ])?;
    }

    wtr.write_record(&[
        "total".to_string(),
        hours(stats.total_hours),
        format!("{:.2}", stats.total_salary),
    ])?;

    wtr.flush()?;
    Ok(())
}
