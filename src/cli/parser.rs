use crate::export::ExportFormat;
use clap::{ArgAction, Parser, Subcommand};

/// Command-line interface definition for huskyhours
#[derive(Parser)]
#[command(
    name = "huskyhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log ambassador work shifts and summarize hours and pay by semester",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    /// More diagnostics on stderr (-v info, -vv debug)
    #[arg(global = true, short = 'v', long = "verbose", action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a work shift
    Add {
        /// Date worked (YYYY-MM-DD)
        date: String,

        /// Time of day (HH:MM; "9" or "9:5" are accepted and padded)
        time: String,

        /// What work was done: tour, registration, org wide, other, training
        #[arg(long, short = 'a', default_value = "tour")]
        activity: String,

        /// Number of hours worked
        #[arg(long = "hours", short = 'H', value_parser = parse_hours)]
        hours: f64,
    },

    /// Edit a logged shift (row number as shown by `list`)
    Edit {
        index: usize,

        #[arg(long, help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "New time of day (HH:MM)")]
        time: Option<String>,

        #[arg(long, short = 'a', help = "New activity")]
        activity: Option<String>,

        #[arg(long = "hours", short = 'H', value_parser = parse_hours, help = "New number of hours")]
        hours: Option<f64>,
    },

    /// Delete a logged shift (row number as shown by `list`)
    Del {
        index: usize,

        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Show the work log, newest first
    List {
        #[arg(
            long,
            short,
            help = "Semester filter: 'all' or e.g. 'Spring 2024' (default from config)"
        )]
        semester: Option<String>,
    },

    /// Total hours, pay and shift breakdown
    Summary {
        #[arg(
            long,
            short,
            help = "Semester filter: 'all' or e.g. 'Spring 2024' (default from config)"
        )]
        semester: Option<String>,
    },

    /// List the semester filters available for the current log
    Semesters,

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, help = "Compress the backup into a .zip")]
        compress: bool,

        #[arg(long, short = 'f', help = "Overwrite without confirmation")]
        force: bool,
    },

    /// Export logged shifts
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        /// Output file path (absolute path required)
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short, help = "Semester filter: 'all' or e.g. 'Fall 2024'")]
        semester: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}

/// Hours as a finite number; `NaN` and `inf` parse as f64 but are no shift length.
fn parse_hours(raw: &str) -> Result<f64, String> {
    let hours: f64 = raw
        .trim()
        .parse()
        .map_err(|_| format!("'{}' is not a number", raw))?;

    if hours.is_finite() {
        Ok(hours)
    } else {
        Err("hours must be a finite number".to_string())
    }
}
