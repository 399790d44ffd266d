use crate::core::statistics::StatisticsService;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::{
    ExportFormat, StatisticsExport, ensure_writable, notify_export_success, write_csv, write_json,
};
use crate::models::period::StatisticsQuery;
use crate::utils::date;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Aggregate `query` and write the result to `file` in `format`.
    pub fn export(
        pool: &DbPool,
        format: ExportFormat,
        file: &str,
        query: &StatisticsQuery,
        currency: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let (range, stats) =
            StatisticsService::new(pool).resolve_and_aggregate(query, date::today())?;

        match format {
            ExportFormat::Csv => write_csv(&path, &stats)?,
            ExportFormat::Json => {
                let doc = StatisticsExport {
                    period: query.period.code(),
                    range,
                    currency,
                    stats: &stats,
                };
                write_json(&path, &doc)?
            }
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(())
    }
}
