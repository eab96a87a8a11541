use clap::{Parser, Subcommand};

/// Command-line interface definition for weekplan
/// CLI application to plan recurring weekly activities with SQLite
#[derive(Parser)]
#[command(
    name = "weekplan",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple weekly planner CLI: recurring subscriptions, per-day time windows and a daily schedule view using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

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

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// List subscriptions (active first) or add a new one
    Subs {
        #[arg(long = "add", value_name = "NAME", help = "Create a new inactive subscription")]
        add: Option<String>,
    },

    /// Activate a subscription and seed its default weekly windows
    Activate {
        /// Subscription name or numeric id
        subscription: String,
    },

    /// Deactivate a subscription and remove all its windows
    Deactivate {
        /// Subscription name or numeric id
        subscription: String,
    },

    /// Show or edit a subscription's weekly windows
    Window {
        /// Subscription name or numeric id
        subscription: String,

        /// Day of the week (monday..sunday, or mon..sun). Omit to list all windows.
        day: Option<String>,

        #[arg(long = "start", help = "Window start time (HH:MM, 24h zero-padded)")]
        start: Option<String>,

        #[arg(long = "end", help = "Window end time (HH:MM); earlier than start means the window crosses midnight")]
        end: Option<String>,
    },

    /// Add a one-off event to the calendar
    Add {
        /// Event title
        title: String,

        #[arg(long = "start", value_name = "DATETIME", help = "Start instant (YYYY-MM-DD HH:MM)")]
        start: String,

        #[arg(long = "end", value_name = "DATETIME", help = "End instant (YYYY-MM-DD HH:MM)")]
        end: String,

        #[arg(long = "desc", help = "Free-text description")]
        description: Option<String>,

        #[arg(long = "location", help = "Optional location")]
        location: Option<String>,

        #[arg(long = "status", help = "Status text (default: Scheduled)")]
        status: Option<String>,
    },

    /// Show the combined schedule for one date (default: today)
    Day {
        /// Date (YYYY-MM-DD)
        date: Option<String>,

        #[arg(long = "json", help = "Emit the day view as JSON")]
        json: bool,
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

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
