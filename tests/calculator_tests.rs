mod common;
use common::t;
use rworkcal::core::calculator::{compute_duration, compute_salary, minutes_to_hours, round2};
use rworkcal::errors::AppError;

#[test]
fn test_duration_is_exact_minutes() {
    assert_eq!(compute_duration(t("09:00"), t("17:30")).unwrap(), 510);
    assert_eq!(compute_duration(t("00:00"), t("23:59")).unwrap(), 1439);
    assert_eq!(compute_duration(t("12:15"), t("12:16")).unwrap(), 1);
}

#[test]
fn test_duration_rejects_empty_and_reversed_ranges() {
    assert!(matches!(
        compute_duration(t("10:00"), t("10:00")),
        Err(AppError::InvalidRange { .. })
    ));
    assert!(matches!(
        compute_duration(t("18:00"), t("09:00")),
        Err(AppError::InvalidRange { .. })
    ));
}

#[test]
fn test_salary_examples() {
    assert_eq!(compute_salary(120, 10.0).unwrap(), 20.00);
    assert_eq!(compute_salary(90, 10.0).unwrap(), 15.00);
    assert_eq!(compute_salary(1, 15.0).unwrap(), 0.25);
}

#[test]
fn test_salary_half_cent_rounds_up() {
    // 0.5h * 1.17 = 0.585, 0.25h * 1.42 = 0.355
    assert_eq!(compute_salary(30, 1.17).unwrap(), 0.59);
    assert_eq!(compute_salary(15, 1.42).unwrap(), 0.36);
}

#[test]
fn test_salary_is_rounded_to_cents() {
    // 100 minutes at 7/h = 11.6666…
    assert_eq!(compute_salary(100, 7.0).unwrap(), 11.67);
    // 1 minute at 1/h = 0.01666…
    assert_eq!(compute_salary(1, 1.0).unwrap(), 0.02);
    assert_eq!(compute_salary(480, 0.0).unwrap(), 0.0);
}

#[test]
fn test_salary_is_deterministic() {
    let a = compute_salary(455, 13.37).unwrap();
    let b = compute_salary(455, 13.37).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_negative_or_non_finite_rate_is_rejected() {
    assert!(matches!(
        compute_salary(60, -1.0),
        Err(AppError::InvalidRate(_))
    ));
    assert!(matches!(
        compute_salary(60, f64::NAN),
        Err(AppError::InvalidRate(_))
    ));
    assert!(matches!(
        compute_salary(60, f64::INFINITY),
        Err(AppError::InvalidRate(_))
    ));
}

#[test]
fn test_round2_rounds_half_up() {
    assert_eq!(round2(0.125), 0.13);
    assert_eq!(round2(0.124), 0.12);
    assert_eq!(round2(10.0), 10.0);
    assert_eq!(minutes_to_hours(90), 1.5);
    assert_eq!(minutes_to_hours(20), 0.33);
}
