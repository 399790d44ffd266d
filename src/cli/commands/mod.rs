pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod rate;
pub mod show;
pub mod stats;

use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::period::{Period, StatisticsQuery};
use crate::utils::date;
use chrono::NaiveDate;

/// Open the configured database with an up-to-date schema.
pub(crate) fn open_pool(cfg: &Config) -> AppResult<DbPool> {
    open_db(cfg.database_path())
}

fn parse_opt_date(input: &Option<String>) -> AppResult<Option<NaiveDate>> {
    match input {
        Some(s) => date::parse_date(s)
            .map(Some)
            .ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(None),
    }
}

/// Build a statistics query from `--period/--from/--to`.
///
/// `--from`/`--to` without `--period` imply `custom`; nothing at all means
/// the current month.
pub(crate) fn build_query(
    period: &Option<String>,
    from: &Option<String>,
    to: &Option<String>,
) -> AppResult<StatisticsQuery> {
    let start_date = parse_opt_date(from)?;
    let end_date = parse_opt_date(to)?;

    let period = match period {
        Some(code) => Period::from_code(code)
            .ok_or_else(|| AppError::InvalidPeriod(format!("unknown period '{}'", code)))?,
        None if start_date.is_some() || end_date.is_some() => Period::Custom,
        None => Period::Month,
    };

    Ok(StatisticsQuery {
        period,
        start_date,
        end_date,
    })
}
