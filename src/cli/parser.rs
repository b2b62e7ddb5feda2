use crate::export::{ExportFormat, ExportView};
use clap::{Parser, Subcommand};

/// Command-line interface definition for ludoview
#[derive(Parser)]
#[command(
    name = "ludoview",
    version = env!("CARGO_PKG_VERSION"),
    about = "Catalog, members, late loans and ledger views for a board-game library",
    long_about = None
)]
pub struct Cli {
    /// Override the snapshot file (JSON export of items, users, loans and ledger)
    #[arg(global = true, long = "data", value_name = "FILE")]
    pub data: Option<String>,

    /// Compute the views as of this date instead of today (YYYY-MM-DD)
    #[arg(global = true, long = "today", value_name = "DATE")]
    pub today: Option<String>,

    /// Run in test mode (no config or session file written)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration directory
    Init,

    /// Show the configuration
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,
    },

    /// List catalog items (highest id first)
    Items {
        #[arg(long, short, help = "Match name (case-insensitive) or id")]
        text: Option<String>,

        #[arg(
            long = "exclude-age",
            value_name = "AGE",
            help = "Hide an age bracket (0, 2, 4, 6, 8, 10); repeatable"
        )]
        exclude_age: Vec<u8>,

        #[arg(long = "no-big", help = "Hide oversized games")]
        no_big: bool,

        #[arg(long = "no-outside", help = "Hide outdoor games")]
        no_outside: bool,

        #[arg(long = "only-big-outside", help = "Show only oversized or outdoor games")]
        only_big_outside: bool,

        #[arg(long = "show-disabled", help = "Also show unavailable games")]
        show_disabled: bool,

        #[arg(long, help = "Remember these filters for the next calls")]
        save: bool,

        #[arg(long, help = "Forget remembered filters before applying options")]
        reset: bool,
    },

    /// List members
    Users {
        #[arg(long, short, help = "Match name or email (case-insensitive)")]
        text: Option<String>,

        #[arg(long = "show-disabled", help = "Also show disabled members")]
        show_disabled: bool,

        #[arg(long, help = "Remember these filters for the next calls")]
        save: bool,

        #[arg(long, help = "Forget remembered member filters before applying options")]
        reset: bool,
    },

    /// Open loans past their due date, most overdue first
    Late,

    /// Ledger grouped by day
    Ledger {
        #[arg(long, help = "Show the per-member breakdown of each day")]
        details: bool,
    },

    /// Loan history of a member, by month
    History {
        #[arg(long, value_name = "ID")]
        user: i64,
    },

    /// Catalog statistics
    Stats,

    /// Export a view to a file
    Export {
        #[arg(long, value_enum)]
        view: ExportView,

        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
