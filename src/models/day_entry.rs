use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// One logged workday as persisted in the store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayEntry {
    pub id: i64,
    pub date: NaiveDate,    // ⇔ day_entries.date (TEXT "YYYY-MM-DD", unique)
    pub start: NaiveTime,   // ⇔ day_entries.start_time (TEXT "HH:MM")
    pub end: NaiveTime,     // ⇔ day_entries.end_time (TEXT "HH:MM")
    pub notes: String,      // ⇔ day_entries.notes (TEXT, default '')
    pub duration: i64,      // minutes, derived from start/end on read
    pub salary: f64,        // ⇔ day_entries.salary (REAL, fixed at save time)
    pub created_at: String, // ⇔ day_entries.created_at (TEXT, RFC 3339)
    pub updated_at: String, // ⇔ day_entries.updated_at (TEXT, RFC 3339)
}

impl DayEntry {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }
}

/// What a caller submits for a given day.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryInput {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub notes: String,
}

impl EntryInput {
    pub fn new(date: NaiveDate, start: NaiveTime, end: NaiveTime, notes: impl Into<String>) -> Self {
        Self {
            date,
            start,
            end,
            notes: notes.into(),
        }
    }
}

/// A validated entry with its salary already computed, ready to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryRecord {
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub notes: String,
    pub salary: f64,
}
