use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// dd.mm.YYYY, used in statistics details.
pub fn format_short(d: &NaiveDate) -> String {
    d.format("%d.%m.%Y").to_string()
}

/// Monday..Sunday of the ISO week containing `d`.
pub fn week_bounds(d: NaiveDate) -> (NaiveDate, NaiveDate) {
    let monday = d - Duration::days(d.weekday().num_days_from_monday() as i64);
    (monday, monday + Duration::days(6))
}

pub fn month_bounds(d: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let last = month_last_day(d.year(), d.month())?;
    Some((
        NaiveDate::from_ymd_opt(d.year(), d.month(), 1)?,
        NaiveDate::from_ymd_opt(d.year(), d.month(), last)?,
    ))
}

pub fn year_bounds(d: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(d.year(), 1, 1)?,
        NaiveDate::from_ymd_opt(d.year(), 12, 31)?,
    ))
}

/// Widest range that still formats as a plain `YYYY-MM-DD` string.
pub fn all_time_bounds() -> Option<(NaiveDate, NaiveDate)> {
    Some((
        NaiveDate::from_ymd_opt(1, 1, 1)?,
        NaiveDate::from_ymd_opt(9999, 12, 31)?,
    ))
}

pub fn month_last_day(y: i32, m: u32) -> Option<u32> {
    match m {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => Some(31),
        4 | 6 | 9 | 11 => Some(30),
        2 => {
            let leap = (y % 4 == 0 && y % 100 != 0) || (y % 400 == 0);
            Some(if leap { 29 } else { 28 })
        }
        _ => None,
    }
}
