use chrono::NaiveDate;
use serde::Serialize;

/// Aggregates over the entries of a period. Field names are the exported contract.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StatisticsResult {
    pub total_hours: f64,
    pub total_salary: f64,
    pub max_hours: f64,
    pub min_hours: f64,
    pub max_salary: f64,
    pub min_salary: f64,
    pub details: Vec<DailyDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyDetail {
    pub date: NaiveDate,
    /// Worked hours for the day.
    pub duration: f64,
    pub salary: f64,
}

impl StatisticsResult {
    pub fn is_empty(&self) -> bool {
        self.details.is_empty()
    }
}
