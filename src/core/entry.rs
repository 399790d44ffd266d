use crate::core::calculator::{compute_duration, compute_salary};
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, EntryInput, EntryRecord};
use crate::store::EntryStore;
use chrono::NaiveDate;

/// Create, edit and delete the work entry of a single day.
///
/// The hourly rate is fixed for the lifetime of the service; salaries are
/// computed once at save time and stored with the entry.
pub struct DayEntryService<'a, S: EntryStore> {
    store: &'a mut S,
    hourly_rate: f64,
}

impl<'a, S: EntryStore> DayEntryService<'a, S> {
    pub fn new(store: &'a mut S, hourly_rate: f64) -> Self {
        Self { store, hourly_rate }
    }

    pub fn lookup(&self, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        self.store.get(date)
    }

    /// Validate and persist `input`: create when `id` is `None`, update otherwise.
    ///
    /// Nothing is written if the range or the rate is invalid.
    pub fn save(&mut self, input: &EntryInput, id: Option<i64>) -> AppResult<DayEntry> {
        let duration = compute_duration(input.start, input.end)?;
        let salary = compute_salary(duration, self.hourly_rate)?;

        let record = EntryRecord {
            date: input.date,
            start: input.start,
            end: input.end,
            notes: input.notes.clone(),
            salary,
        };

        match id {
            None => self.store.create(&record),
            Some(id) => self.store.update(id, &record),
        }
    }

    /// Remove the entry with `id`; an already missing entry counts as removed.
    pub fn delete(&mut self, id: i64) -> AppResult<()> {
        match self.store.delete(id) {
            Ok(()) | Err(AppError::NotFound(_)) => Ok(()),
            Err(e) => Err(e),
        }
    }
}
