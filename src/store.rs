//! Persistence contract consumed by the core services.

use crate::errors::AppResult;
use crate::models::day_entry::{DayEntry, EntryRecord};
use chrono::NaiveDate;

/// Storage of day entries, keyed by id and looked up by date.
///
/// Implementations own uniqueness of `date`; the services only look up
/// before they create.
pub trait EntryStore {
    /// Entry logged for `date`, or `None` when the day is empty.
    fn get(&self, date: NaiveDate) -> AppResult<Option<DayEntry>>;

    /// Insert a new entry and return it with its assigned id.
    fn create(&mut self, record: &EntryRecord) -> AppResult<DayEntry>;

    /// Overwrite the entry with `id`. Fails with `AppError::NotFound` if absent.
    fn update(&mut self, id: i64, record: &EntryRecord) -> AppResult<DayEntry>;

    /// Remove the entry with `id`. Fails with `AppError::NotFound` if absent.
    fn delete(&mut self, id: i64) -> AppResult<()>;

    /// All entries with `start <= date <= end`, ordered by date ascending.
    fn query_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayEntry>>;
}
