#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveTime};
use rworkcal::db::initialize::init_db;
use rworkcal::db::pool::DbPool;
use rworkcal::models::day_entry::EntryInput;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Binary under test, with its configuration directory moved into `home`.
pub fn rwc(home: &str) -> Command {
    let mut cmd = cargo_bin_cmd!("rworkcal");
    cmd.env("RWORKCAL_HOME", home);
    cmd
}

/// Fresh per-test directory inside the system temp dir, used as RWORKCAL_HOME.
pub fn setup_home(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rworkcal_test_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create test home");
    path.to_string_lossy().to_string()
}

/// Database path inside a test home.
pub fn db_in(home: &str) -> String {
    PathBuf::from(home)
        .join("test.sqlite")
        .to_string_lossy()
        .to_string()
}

/// Initialise a test home and its database through the CLI.
pub fn init_home(name: &str) -> (String, String) {
    let home = setup_home(name);
    let db = db_in(&home);
    rwc(&home)
        .args(["--db", &db, "--test", "init"])
        .assert()
        .success();
    (home, db)
}

/// In-memory store with the current schema.
pub fn memory_pool() -> DbPool {
    let pool = DbPool::in_memory().expect("open in-memory db");
    init_db(&pool.conn).expect("init db");
    pool
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn t(s: &str) -> NaiveTime {
    NaiveTime::parse_from_str(s, "%H:%M").expect("valid time")
}

pub fn input(date: &str, start: &str, end: &str, notes: &str) -> EntryInput {
    EntryInput::new(d(date), t(start), t(end), notes)
}
