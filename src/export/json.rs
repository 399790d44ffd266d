use crate::errors::AppResult;
use crate::models::period::DateRange;
use crate::models::statistics::StatisticsResult;
use serde::Serialize;
use std::path::Path;

/// JSON document: the resolved range next to the aggregate fields.
#[derive(Debug, Serialize)]
pub struct StatisticsExport<'a> {
    pub period: &'a str,
    pub range: DateRange,
    pub currency: &'a str,
    #[serde(flatten)]
    pub stats: &'a StatisticsResult,
}

pub fn write_json(path: &Path, doc: &StatisticsExport) -> AppResult<()> {
    let json = serde_json::to_string_pretty(doc)?;
    std::fs::write(path, json)?;
    Ok(())
}
