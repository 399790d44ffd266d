use crate::cli::commands::open_pool;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::ttlog_or_warn;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::money;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rate { set } = cmd {
        match set {
            Some(rate) => {
                // Reload from disk so global overrides (--db, --rate) are not persisted.
                let mut stored = Config::load()?;
                let previous = stored.hourly_rate;
                stored.set_hourly_rate(*rate)?;

                if cfg.database_path().exists() {
                    let pool = open_pool(cfg)?;
                    ttlog_or_warn(
                        &pool.conn,
                        "rate",
                        "hourly_rate",
                        &format!("{} → {}", previous, rate),
                    );
                }

                success(format!(
                    "Hourly rate set to {}/h.",
                    money(*rate, &stored.currency)
                ));
            }
            None => {
                println!("Hourly rate: {}/h", money(cfg.hourly_rate, &cfg.currency));
            }
        }
    }

    Ok(())
}
