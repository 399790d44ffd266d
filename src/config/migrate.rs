use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::Value;
use std::fs;
use std::path::Path;

/// Keys every current configuration file is expected to carry.
pub const EXPECTED_FIELDS: [&str; 3] = ["database", "hourly_rate", "currency"];

/// List the expected keys absent from the YAML file at `path`.
///
/// A missing file reports every key as missing.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    if !path.exists() {
        return Ok(EXPECTED_FIELDS.to_vec());
    }

    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)?;

    let missing = match yaml.as_mapping() {
        Some(map) => EXPECTED_FIELDS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(Value::String((*k).to_string())))
            .collect(),
        None => EXPECTED_FIELDS.to_vec(),
    };

    Ok(missing)
}

/// Rewrite the file with defaults filled in for missing keys.
///
/// Returns the keys that were added; an up-to-date file is left untouched.
pub fn migrate_config(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    let cfg = Config::load_from(path)?;
    cfg.save_to(path)?;
    Ok(missing)
}
