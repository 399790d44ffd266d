use crate::core::calculator::{minutes_to_hours, round2};
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::DayEntry;
use crate::models::period::{DateRange, Period, StatisticsQuery};
use crate::models::statistics::{DailyDetail, StatisticsResult};
use crate::store::EntryStore;
use crate::utils::date;
use chrono::NaiveDate;

/// Aggregate logged days over a period.
pub struct StatisticsService<'a, S: EntryStore> {
    store: &'a S,
}

/// Turn a query into concrete inclusive bounds, relative to `today`.
///
/// - `Week`:  Monday..Sunday of the ISO week containing `today`
/// - `Month`: first..last day of the current month
/// - `Year`:  1 January..31 December of the current year
/// - `All`:   every representable day (0001-01-01..9999-12-31)
/// - `Custom`: the given bounds, which must both be present and ordered
pub fn resolve_period(query: &StatisticsQuery, today: NaiveDate) -> AppResult<DateRange> {
    let invalid = |what: &str| AppError::InvalidPeriod(format!("{} ({})", what, query.period.code()));

    let (start, end) = match query.period {
        Period::Week => date::week_bounds(today),
        Period::Month => date::month_bounds(today).ok_or_else(|| invalid("month out of range"))?,
        Period::Year => date::year_bounds(today).ok_or_else(|| invalid("year out of range"))?,
        Period::All => date::all_time_bounds().ok_or_else(|| invalid("no bounds"))?,
        Period::Custom => {
            let (Some(start), Some(end)) = (query.start_date, query.end_date) else {
                return Err(invalid("custom period requires both start and end date"));
            };
            if start > end {
                return Err(AppError::InvalidPeriod(format!(
                    "start date {} is after end date {}",
                    start, end
                )));
            }
            (start, end)
        }
    };

    Ok(DateRange { start, end })
}

fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::MIN, f64::max)
}

fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::MAX, f64::min)
}

/// Compute totals, extremes and the per-day detail list.
///
/// An empty slice yields the all-zero default.
pub fn summarize(entries: &[DayEntry]) -> StatisticsResult {
    if entries.is_empty() {
        return StatisticsResult::default();
    }

    let mut sorted: Vec<&DayEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let hours: Vec<f64> = sorted.iter().map(|e| e.duration as f64 / 60.0).collect();
    let salaries: Vec<f64> = sorted.iter().map(|e| e.salary).collect();

    StatisticsResult {
        total_hours: round2(hours.iter().sum()),
        total_salary: round2(salaries.iter().sum()),
        max_hours: round2(max_of(&hours)),
        min_hours: round2(min_of(&hours)),
        max_salary: round2(max_of(&salaries)),
        min_salary: round2(min_of(&salaries)),
        details: sorted
            .iter()
            .map(|e| DailyDetail {
                date: e.date,
                duration: minutes_to_hours(e.duration),
                salary: e.salary,
            })
            .collect(),
    }
}

impl<'a, S: EntryStore> StatisticsService<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    pub fn aggregate(&self, range: &DateRange) -> AppResult<StatisticsResult> {
        let entries = self.store.query_range(range.start, range.end)?;
        debug_assert!(entries.iter().all(|e| range.contains(e.date)));
        Ok(summarize(&entries))
    }

    /// Resolve `query` against the current local date, then aggregate.
    pub fn get_statistics(&self, query: &StatisticsQuery) -> AppResult<StatisticsResult> {
        self.get_statistics_on(query, date::today())
    }

    pub fn get_statistics_on(
        &self,
        query: &StatisticsQuery,
        today: NaiveDate,
    ) -> AppResult<StatisticsResult> {
        self.resolve_and_aggregate(query, today).map(|(_, stats)| stats)
    }

    /// Like [`Self::get_statistics_on`], also returning the resolved bounds
    /// for callers that print or export them.
    pub fn resolve_and_aggregate(
        &self,
        query: &StatisticsQuery,
        today: NaiveDate,
    ) -> AppResult<(DateRange, StatisticsResult)> {
        let range = resolve_period(query, today)?;
        let stats = self.aggregate(&range)?;
        Ok((range, stats))
    }
}
