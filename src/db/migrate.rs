use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Create the `day_entries` table: one row per worked calendar day.
fn create_day_entries_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS day_entries (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            date        TEXT NOT NULL,
            start_time  TEXT NOT NULL,
            end_time    TEXT NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            salary      REAL NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_day_entries_date ON day_entries(date);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Track the last modification of every entry.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20250301_0002_add_updated_at";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !table_has_column(conn, "day_entries", "updated_at")? {
        conn.execute_batch(
            r#"
            ALTER TABLE day_entries ADD COLUMN updated_at TEXT NOT NULL DEFAULT '';
            UPDATE day_entries SET updated_at = created_at WHERE updated_at = '';
            "#,
        )?;
    }

    mark_applied(conn, version, "Added updated_at to day_entries")?;
    success(format!(
        "Migration applied: {} → added 'updated_at' to day_entries",
        version
    ));
    Ok(())
}

/// Enforce one entry per date. Older duplicates are dropped, keeping the
/// most recently inserted row.
fn migrate_unique_entry_date(conn: &Connection) -> Result<()> {
    let version = "20250310_0003_unique_entry_date";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    let duplicates: i64 = conn.query_row(
        "SELECT COUNT(*) FROM day_entries
         WHERE id NOT IN (SELECT MAX(id) FROM day_entries GROUP BY date)",
        [],
        |row| row.get(0),
    )?;

    if duplicates > 0 {
        warning(format!(
            "Removing {} duplicate entries (keeping the latest per date)...",
            duplicates
        ));
    }

    // Dropped without commit on any error, which rolls the whole step back.
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(
        r#"
        DELETE FROM day_entries
        WHERE id NOT IN (SELECT MAX(id) FROM day_entries GROUP BY date);

        DROP INDEX IF EXISTS idx_day_entries_date;
        CREATE UNIQUE INDEX IF NOT EXISTS idx_day_entries_date_unique ON day_entries(date);
        "#,
    )?;

    mark_applied(&tx, version, "Unique index on day_entries.date")?;
    tx.commit()?;
    success(format!(
        "Migration applied: {} → one entry per date",
        version
    ));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by `db::initialize::init_db()`.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "day_entries")? {
        create_day_entries_table(conn)?;
        success("Created day_entries table.");
    }

    migrate_add_updated_at(conn)?;
    migrate_unique_entry_date(conn)?;

    Ok(())
}
