use clap::{Parser, Subcommand};

/// Command-line interface definition for rDowntime
#[derive(Parser)]
#[command(
    name = "rdowntime",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track availability: log every status change and report downtime",
    long_about = None
)]
pub struct Cli {
    /// Override the event log path (useful for tests or a custom location)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data directory
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Show the current status
    Status,

    /// Switch between AVAILABLE and UNAVAILABLE
    Toggle,

    /// Show the activity history, most recent first
    History {
        #[arg(long = "summary", help = "Show downtime totals instead of the log")]
        summary: bool,

        #[arg(long = "json", help = "Print events and downtime intervals as JSON")]
        json: bool,
    },

    /// Delete the whole history
    Clear {
        #[arg(long, short = 'f', help = "Do not ask for confirmation")]
        force: bool,
    },

    /// Live elapsed-time readout
    Watch {
        #[arg(
            long,
            help = "Stop after this many refreshes",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        ticks: Option<u64>,
    },

    /// Check the event log for malformed records and alternation problems
    Check,
}
