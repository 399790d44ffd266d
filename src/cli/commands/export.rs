use crate::cli::commands::{build_query, open_pool};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        period,
        from,
        to,
        force,
    } = cmd
    {
        let query = build_query(period, from, to)?;
        let pool = open_pool(cfg)?;
        ExportLogic::export(&pool, *format, file, &query, &cfg.currency, *force)?;
    }
    Ok(())
}
