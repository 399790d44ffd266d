use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Period {
    Week,
    Month,
    Year,
    All,
    Custom,
}

impl Period {
    pub fn code(&self) -> &str {
        match self {
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
            Period::All => "all",
            Period::Custom => "custom",
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            "all" => Some(Period::All),
            "custom" => Some(Period::Custom),
            _ => None,
        }
    }
}

/// A statistics request: a preset, or `Custom` with both bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsQuery {
    pub period: Period,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl StatisticsQuery {
    pub fn preset(period: Period) -> Self {
        Self {
            period,
            start_date: None,
            end_date: None,
        }
    }

    pub fn custom(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            period: Period::Custom,
            start_date: Some(start_date),
            end_date: Some(end_date),
        }
    }
}

/// Inclusive date bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
