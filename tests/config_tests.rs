use rworkcal::config::Config;
use rworkcal::config::migrate::{EXPECTED_FIELDS, migrate_config, missing_fields};
use rworkcal::errors::AppError;
use std::env;
use std::fs;
use std::path::PathBuf;

fn temp_conf(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("rworkcal_conf_{}", name));
    fs::remove_dir_all(&dir).ok();
    fs::create_dir_all(&dir).expect("create temp dir");
    dir.join("rworkcal.conf")
}

#[test]
fn test_missing_file_reports_every_field() {
    let path = temp_conf("missing_file");
    assert_eq!(missing_fields(&path).unwrap(), EXPECTED_FIELDS.to_vec());
}

#[test]
fn test_missing_fields_are_detected() {
    let path = temp_conf("partial");
    fs::write(&path, "database: /tmp/work.sqlite\n").unwrap();

    assert_eq!(missing_fields(&path).unwrap(), vec!["hourly_rate", "currency"]);
}

#[test]
fn test_migrate_fills_defaults_and_keeps_values() {
    let path = temp_conf("migrate");
    fs::write(&path, "database: /tmp/work.sqlite\nhourly_rate: 15.0\n").unwrap();

    let added = migrate_config(&path).unwrap();
    assert_eq!(added, vec!["currency"]);
    assert!(missing_fields(&path).unwrap().is_empty());

    let cfg = Config::load_from(&path).unwrap();
    assert_eq!(cfg.database, "/tmp/work.sqlite");
    assert_eq!(cfg.hourly_rate, 15.0);
    assert_eq!(cfg.currency, "UAH");

    // Second run has nothing to do.
    assert!(migrate_config(&path).unwrap().is_empty());
}

#[test]
fn test_save_then_load() {
    let path = temp_conf("roundtrip");
    let cfg = Config {
        database: "/data/hours.sqlite".to_string(),
        hourly_rate: 22.5,
        currency: "EUR".to_string(),
    };

    cfg.save_to(&path).unwrap();
    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn test_negative_rate_in_file_is_rejected() {
    let path = temp_conf("negative");
    fs::write(
        &path,
        "database: /tmp/work.sqlite\nhourly_rate: -3.0\ncurrency: UAH\n",
    )
    .unwrap();

    assert!(matches!(
        Config::load_from(&path),
        Err(AppError::InvalidRate(_))
    ));
}
