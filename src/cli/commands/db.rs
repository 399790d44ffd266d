use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

/// Print the "▶ label…" banner, run `task`, then the "✔ done" line.
fn step<F>(label: &str, done: &str, task: F) -> AppResult<()>
where
    F: FnOnce() -> AppResult<()>,
{
    println!("{}▶ {}…{}", CYAN, label, RESET);
    task()?;
    println!("{}✔ {}{}\n", GREEN, done, RESET);
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        let db_path = cfg.database_path();
        if !db_path.exists() {
            return Err(AppError::NotFound(format!(
                "database {} (run `rworkcal init` first)",
                db_path.display()
            )));
        }

        let mut pool = DbPool::new(&db_path)?;

        // No flag at all behaves like --info.
        let show_info = *info || !(*migrate || *check || *vacuum);

        if *migrate {
            step("Running migrations", "Migration completed.", || {
                run_pending_migrations(&pool.conn)?;
                Ok(())
            })?;
        }

        if show_info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&pool, &db_path)?;
        }

        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}\n", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}\n", RED, RESET, integrity);
            }
        }

        if *vacuum {
            step("Running VACUUM", "Vacuum completed.", || {
                pool.with_conn(|conn| conn.execute_batch("VACUUM;"))?;
                Ok(())
            })?;
        }
    }

    Ok(())
}
