mod common;

use common::{init_home, rwc};
use predicates::prelude::*;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn add(home: &str, db: &str, date: &str, start: &str, end: &str) {
    rwc(home)
        .args(["--db", db, "--rate", "10", "add", date, "--in", start, "--out", end])
        .assert()
        .success();
}

fn out_file(home: &str, name: &str) -> String {
    PathBuf::from(home)
        .join(name)
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_init_creates_database() {
    let (_home, db) = init_home("cli_init");
    assert!(PathBuf::from(&db).exists());
}

#[test]
fn test_add_then_show() {
    let (home, db) = init_home("cli_add_show");

    rwc(&home)
        .args([
            "--db", &db, "--rate", "10", "add", "2024-01-01", "--in", "09:00", "--out", "11:30",
            "--notes", "release",
        ])
        .assert()
        .success()
        .stdout(contains("Added entry for 2024-01-01"))
        .stdout(contains("2h 30m"))
        .stdout(contains("25.00 UAH"));

    rwc(&home)
        .args(["--db", &db, "show", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("09:00 - 11:30"))
        .stdout(contains("2h 30m"))
        .stdout(contains("release"))
        .stdout(contains("25.00 UAH"));
}

#[test]
fn test_show_missing_day() {
    let (home, db) = init_home("cli_show_missing");

    rwc(&home)
        .args(["--db", &db, "show", "2024-03-03"])
        .assert()
        .success()
        .stdout(contains("No entry for 2024-03-03"));
}

#[test]
fn test_add_on_logged_day_edits_it() {
    let (home, db) = init_home("cli_edit");
    add(&home, &db, "2024-01-01", "09:00", "10:00");

    // Only --out changes; --in and notes are kept.
    rwc(&home)
        .args(["--db", &db, "--rate", "10", "add", "2024-01-01", "--out", "12:00"])
        .assert()
        .success()
        .stdout(contains("updated"))
        .stdout(contains("09:00 → 12:00"))
        .stdout(contains("30.00 UAH"));

    rwc(&home)
        .args(["--db", &db, "list", "--period", "all"])
        .assert()
        .success()
        .stdout(contains("1 day(s)"));
}

#[test]
fn test_add_new_day_requires_both_times() {
    let (home, db) = init_home("cli_add_partial");

    rwc(&home)
        .args(["--db", &db, "add", "2024-01-01", "--in", "09:00"])
        .assert()
        .failure()
        .stderr(contains("--out"));
}

#[test]
fn test_invalid_range_writes_nothing() {
    let (home, db) = init_home("cli_invalid_range");

    rwc(&home)
        .args(["--db", &db, "add", "2024-01-01", "--in", "10:00", "--out", "09:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid time range"));

    rwc(&home)
        .args(["--db", &db, "add", "2024-01-01", "--in", "09:00", "--out", "09:00"])
        .assert()
        .failure();

    rwc(&home)
        .args(["--db", &db, "show", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No entry for 2024-01-01"));
}

#[test]
fn test_negative_rate_is_rejected() {
    let (home, db) = init_home("cli_negative_rate");

    rwc(&home)
        .args([
            "--db", &db, "--rate", "-5", "add", "2024-01-01", "--in", "09:00", "--out", "10:00",
        ])
        .assert()
        .failure()
        .stderr(contains("Invalid hourly rate"));

    rwc(&home)
        .args(["--db", &db, "rate", "--set", "-1"])
        .assert()
        .failure();
}

#[test]
fn test_rate_set_is_persisted() {
    let (home, db) = init_home("cli_rate");

    rwc(&home)
        .args(["--db", &db, "rate", "--set", "12.5"])
        .assert()
        .success()
        .stdout(contains("12.50 UAH/h"));

    rwc(&home)
        .args(["--db", &db, "rate"])
        .assert()
        .success()
        .stdout(contains("Hourly rate: 12.50 UAH/h"));

    // The stored rate drives new entries when --rate is not given.
    rwc(&home)
        .args(["--db", &db, "add", "2024-01-01", "--in", "09:00", "--out", "11:00"])
        .assert()
        .success()
        .stdout(contains("25.00 UAH"));
}

#[test]
fn test_stats_custom_period_with_details() {
    let (home, db) = init_home("cli_stats");
    add(&home, &db, "2024-01-01", "09:00", "11:00");
    add(&home, &db, "2024-01-02", "08:00", "12:00");
    add(&home, &db, "2024-02-01", "08:00", "09:00");

    rwc(&home)
        .args([
            "--db", &db, "stats", "--from", "2024-01-01", "--to", "2024-01-31", "--details",
        ])
        .assert()
        .success()
        .stdout(contains("(custom)"))
        .stdout(contains("Total hours:           6"))
        .stdout(contains("Total salary:          60.00 UAH"))
        .stdout(contains("Max hours in a day:    4"))
        .stdout(contains("Min hours in a day:    2"))
        .stdout(contains("Max salary in a day:   40.00 UAH"))
        .stdout(contains("Min salary in a day:   20.00 UAH"))
        .stdout(contains("01.01.2024"))
        .stdout(contains("02.01.2024"))
        .stdout(contains("01.02.2024").not());
}

#[test]
fn test_stats_empty_period() {
    let (home, db) = init_home("cli_stats_empty");

    rwc(&home)
        .args(["--db", &db, "stats", "--period", "custom", "--from", "2020-01-01", "--to", "2020-12-31"])
        .assert()
        .success()
        .stdout(contains("Total hours:           0"))
        .stdout(contains("Total salary:          0.00 UAH"));
}

#[test]
fn test_stats_rejects_bad_periods() {
    let (home, db) = init_home("cli_stats_bad");

    rwc(&home)
        .args(["--db", &db, "stats", "--period", "fortnight"])
        .assert()
        .failure()
        .stderr(contains("unknown period"));

    rwc(&home)
        .args(["--db", &db, "stats", "--from", "2024-02-01", "--to", "2024-01-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));

    rwc(&home)
        .args(["--db", &db, "stats", "--period", "custom", "--from", "2024-02-01"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_list_period() {
    let (home, db) = init_home("cli_list");
    add(&home, &db, "2024-01-01", "09:00", "11:00");
    add(&home, &db, "2024-01-05", "09:00", "10:00");
    add(&home, &db, "2024-03-01", "09:00", "10:00");

    rwc(&home)
        .args(["--db", &db, "list", "--from", "2024-01-01", "--to", "2024-01-31"])
        .assert()
        .success()
        .stdout(contains("2024-01-01"))
        .stdout(contains("2024-01-05"))
        .stdout(contains("2 day(s)"));
}

#[test]
fn test_del_by_date_with_confirmation() {
    let (home, db) = init_home("cli_del_confirm");
    add(&home, &db, "2024-01-01", "09:00", "11:00");

    rwc(&home)
        .args(["--db", &db, "del", "2024-01-01"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    rwc(&home)
        .args(["--db", &db, "del", "2024-01-01"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Deleted the entry for 2024-01-01"));

    rwc(&home)
        .args(["--db", &db, "show", "2024-01-01"])
        .assert()
        .success()
        .stdout(contains("No entry for 2024-01-01"));
}

#[test]
fn test_del_missing_is_not_an_error() {
    let (home, db) = init_home("cli_del_missing");

    rwc(&home)
        .args(["--db", &db, "del", "--id", "999", "--force"])
        .assert()
        .success()
        .stdout(contains("Entry #999 does not exist"));

    rwc(&home)
        .args(["--db", &db, "del", "2024-01-01", "--force"])
        .assert()
        .success()
        .stdout(contains("nothing to delete"));
}

#[test]
fn test_export_csv() {
    let (home, db) = init_home("cli_export_csv");
    add(&home, &db, "2024-01-02", "08:00", "12:00");
    add(&home, &db, "2024-01-01", "09:00", "11:00");

    let out = out_file(&home, "stats.csv");

    rwc(&home)
        .args([
            "--db", &db, "export", "--format", "csv", "--file", &out, "--from", "2024-01-01",
            "--to", "2024-01-31", "--force",
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(
        lines,
        vec![
            "date,hours,salary",
            "2024-01-01,2,20.00",
            "2024-01-02,4,40.00",
            "total,6,60.00",
        ]
    );
}

#[test]
fn test_export_json() {
    let (home, db) = init_home("cli_export_json");
    add(&home, &db, "2024-01-01", "09:00", "11:00");
    add(&home, &db, "2024-01-02", "08:00", "12:00");

    let out = out_file(&home, "stats.json");

    rwc(&home)
        .args([
            "--db", &db, "export", "--format", "json", "--file", &out, "--from", "2024-01-01",
            "--to", "2024-01-31", "--force",
        ])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: Value = serde_json::from_str(&content).expect("valid json");

    assert_eq!(doc["period"], "custom");
    assert_eq!(doc["range"]["start"], "2024-01-01");
    assert_eq!(doc["range"]["end"], "2024-01-31");
    assert_eq!(doc["currency"], "UAH");
    assert_eq!(doc["total_hours"].as_f64(), Some(6.0));
    assert_eq!(doc["total_salary"].as_f64(), Some(60.0));
    assert_eq!(doc["min_salary"].as_f64(), Some(20.0));

    let details = doc["details"].as_array().expect("details array");
    assert_eq!(details.len(), 2);
    assert_eq!(details[0]["date"], "2024-01-01");
    assert_eq!(details[0]["duration"].as_f64(), Some(2.0));
    assert_eq!(details[1]["salary"].as_f64(), Some(40.0));
}

#[test]
fn test_export_refuses_overwrite_without_confirmation() {
    let (home, db) = init_home("cli_export_overwrite");
    let out = out_file(&home, "existing.csv");
    fs::write(&out, "keep me").expect("write existing file");

    rwc(&home)
        .args(["--db", &db, "export", "--file", &out, "--period", "all"])
        .write_stdin("n\n")
        .assert()
        .failure();

    assert_eq!(fs::read_to_string(&out).expect("read"), "keep me");
}

#[test]
fn test_log_records_operations() {
    let (home, db) = init_home("cli_log");
    add(&home, &db, "2024-01-01", "09:00", "11:00");

    rwc(&home)
        .args(["--db", &db, "del", "2024-01-01", "--force"])
        .assert()
        .success();

    rwc(&home)
        .args(["--db", &db, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("del"));
}

#[test]
fn test_db_info_and_check() {
    let (home, db) = init_home("cli_db");
    add(&home, &db, "2024-01-01", "09:00", "11:00");

    rwc(&home)
        .args(["--db", &db, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Logged days:"))
        .stdout(contains("Integrity check passed"));
}

#[test]
fn test_db_requires_existing_database() {
    let home = common::setup_home("cli_db_missing");
    let db = common::db_in(&home);

    rwc(&home)
        .args(["--db", &db, "db", "--vacuum"])
        .assert()
        .failure()
        .stderr(contains("rworkcal init"));

    assert!(!PathBuf::from(&db).exists());
}
