//! Pure time and salary arithmetic shared by the entry and statistics logic.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

/// Minutes since midnight, ignoring seconds.
fn minute_of_day(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Signed minute difference `end - start`, without validation.
pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    minute_of_day(end) - minute_of_day(start)
}

/// Worked minutes between `start` and `end` on the same day.
///
/// Fails with [`AppError::InvalidRange`] when `end` is not strictly after
/// `start`: spans across midnight are not supported.
pub fn compute_duration(start: NaiveTime, end: NaiveTime) -> AppResult<i64> {
    let minutes = minutes_between(start, end);

    if minutes <= 0 {
        return Err(AppError::InvalidRange {
            start: start.format("%H:%M").to_string(),
            end: end.format("%H:%M").to_string(),
        });
    }

    Ok(minutes)
}

/// Salary earned for `duration_minutes` at `hourly_rate`, rounded to cents.
///
/// Hours are computed first, then multiplied by the rate.
pub fn compute_salary(duration_minutes: i64, hourly_rate: f64) -> AppResult<f64> {
    validate_rate(hourly_rate)?;
    Ok(round2(duration_minutes as f64 / 60.0 * hourly_rate))
}

/// Reject negative, NaN or infinite rates.
pub fn validate_rate(hourly_rate: f64) -> AppResult<()> {
    if !hourly_rate.is_finite() || hourly_rate < 0.0 {
        return Err(AppError::InvalidRate(hourly_rate));
    }
    Ok(())
}

/// Round half-up to two decimals (scale by 100, round, scale back).
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Minutes expressed as hours, rounded to two decimals.
pub fn minutes_to_hours(minutes: i64) -> f64 {
    round2(minutes as f64 / 60.0)
}
