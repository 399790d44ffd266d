//! SQLite-backed implementation of the entry store.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, EntryRecord};
use crate::store::EntryStore;
use chrono::NaiveDate;

fn missing(id: i64) -> AppError {
    AppError::NotFound(format!("entry #{}", id))
}

impl EntryStore for DbPool {
    fn get(&self, date: NaiveDate) -> AppResult<Option<DayEntry>> {
        queries::load_entry_by_date(&self.conn, &date)
    }

    fn create(&mut self, record: &EntryRecord) -> AppResult<DayEntry> {
        let id = queries::insert_entry(&self.conn, record)?;
        queries::load_entry_by_id(&self.conn, id)?.ok_or_else(|| missing(id))
    }

    fn update(&mut self, id: i64, record: &EntryRecord) -> AppResult<DayEntry> {
        if queries::update_entry(&self.conn, id, record)? == 0 {
            return Err(missing(id));
        }
        queries::load_entry_by_id(&self.conn, id)?.ok_or_else(|| missing(id))
    }

    fn delete(&mut self, id: i64) -> AppResult<()> {
        if queries::delete_entry(&self.conn, id)? == 0 {
            return Err(missing(id));
        }
        Ok(())
    }

    fn query_range(&self, start: NaiveDate, end: NaiveDate) -> AppResult<Vec<DayEntry>> {
        queries::load_entries_in_range(&self.conn, &start, &end)
    }
}
