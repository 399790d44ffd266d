use crate::core::calculator::minutes_between;
use crate::errors::{AppError, AppResult};
use crate::models::day_entry::{DayEntry, EntryRecord};
use chrono::{Local, NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, date, start_time, end_time, notes, salary, created_at, updated_at
     FROM day_entries";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_row_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .map_err(|_| conversion_error(AppError::InvalidTime(raw.to_string())))
}

pub fn map_row(row: &Row) -> Result<DayEntry> {
    let date_str: String = row.get("date")?;
    let start_str: String = row.get("start_time")?;
    let end_str: String = row.get("end_time")?;

    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(AppError::InvalidDate(date_str.clone())))?;
    let start = parse_row_time(&start_str)?;
    let end = parse_row_time(&end_str)?;

    Ok(DayEntry {
        id: row.get("id")?,
        date,
        start,
        end,
        notes: row.get("notes")?,
        duration: minutes_between(start, end),
        salary: row.get("salary")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn load_entry_by_date(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DayEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE date = ?1 LIMIT 1"))?;
    let entry = stmt
        .query_row([date.format("%Y-%m-%d").to_string()], map_row)
        .optional()?;
    Ok(entry)
}

pub fn load_entry_by_id(conn: &Connection, id: i64) -> AppResult<Option<DayEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE id = ?1"))?;
    let entry = stmt.query_row([id], map_row).optional()?;
    Ok(entry)
}

/// Entries with `start <= date <= end`, oldest first.
pub fn load_entries_in_range(
    conn: &Connection,
    start: &NaiveDate,
    end: &NaiveDate,
) -> AppResult<Vec<DayEntry>> {
    let mut stmt = conn.prepare_cached(&format!(
        "{SELECT_ENTRY} WHERE date >= ?1 AND date <= ?2 ORDER BY date ASC"
    ))?;

    let rows = stmt.query_map(
        params![
            start.format("%Y-%m-%d").to_string(),
            end.format("%Y-%m-%d").to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new row and return its id.
pub fn insert_entry(conn: &Connection, rec: &EntryRecord) -> AppResult<i64> {
    let now = Local::now().to_rfc3339();

    conn.execute(
        "INSERT INTO day_entries (date, start_time, end_time, notes, salary, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.start.format("%H:%M").to_string(),
            rec.end.format("%H:%M").to_string(),
            rec.notes,
            rec.salary,
            now,
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

/// Update an entry (all fields except id). Returns the number of changed rows.
pub fn update_entry(conn: &Connection, id: i64, rec: &EntryRecord) -> AppResult<usize> {
    let changed = conn.execute(
        "UPDATE day_entries
         SET date = ?1, start_time = ?2, end_time = ?3,
             notes = ?4, salary = ?5, updated_at = ?6
         WHERE id = ?7",
        params![
            rec.date.format("%Y-%m-%d").to_string(),
            rec.start.format("%H:%M").to_string(),
            rec.end.format("%H:%M").to_string(),
            rec.notes,
            rec.salary,
            Local::now().to_rfc3339(),
            id,
        ],
    )?;
    Ok(changed)
}

/// Returns the number of deleted rows (0 or 1).
pub fn delete_entry(conn: &Connection, id: i64) -> AppResult<usize> {
    let deleted = conn.execute("DELETE FROM day_entries WHERE id = ?1", [id])?;
    Ok(deleted)
}
