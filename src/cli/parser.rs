use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rWorkCal
#[derive(Parser)]
#[command(
    name = "rworkcal",
    version = env!("CARGO_PKG_VERSION"),
    about = "A work calendar CLI: log daily working hours, compute daily salary and statistics using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override the configured hourly rate for this invocation
    #[arg(global = true, long = "rate", allow_negative_numbers = true)]
    pub rate: Option<f64>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view, check or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,

        #[arg(long = "migrate", help = "Add missing fields to the configuration file")]
        migrate: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or change the hourly rate used to compute salaries
    Rate {
        #[arg(
            long = "set",
            value_name = "AMOUNT",
            allow_negative_numbers = true,
            help = "Persist a new hourly rate"
        )]
        set: Option<f64>,
    },

    /// Log a workday, or edit the entry already logged for that date
    Add {
        /// Date of the workday (YYYY-MM-DD)
        date: String,

        /// Start time (HH:MM)
        #[arg(long = "in", help = "Start time (HH:MM)")]
        start: Option<String>,

        /// End time (HH:MM)
        #[arg(long = "out", help = "End time (HH:MM)")]
        end: Option<String>,

        #[arg(long = "notes", help = "Free-form notes for the day")]
        notes: Option<String>,
    },

    /// Show the entry logged for a date
    Show {
        /// Date of the workday (YYYY-MM-DD)
        date: String,
    },

    /// Delete the entry of a date, or an entry by id
    Del {
        #[arg(required_unless_present = "id")]
        date: Option<String>,

        #[arg(long = "id", conflicts_with = "date", help = "Entry id to delete")]
        id: Option<i64>,

        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// List logged days in a period
    List {
        #[arg(
            long,
            short,
            help = "week | month | year | all | custom (default: month)"
        )]
        period: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Custom period start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "Custom period end (YYYY-MM-DD)")]
        to: Option<String>,
    },

    /// Show hours and salary statistics for a period
    Stats {
        #[arg(
            long,
            short,
            help = "week | month | year | all | custom (default: month)"
        )]
        period: Option<String>,

        #[arg(long = "from", value_name = "DATE", help = "Custom period start (YYYY-MM-DD)")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE", help = "Custom period end (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "details", help = "Also list every day of the period")]
        details: bool,
    },

    /// Export period statistics to a file
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "week | month | year | all | custom (default: month)")]
        period: Option<String>,

        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },
}
