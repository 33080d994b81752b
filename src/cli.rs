//! CLI argument parsing using clap v4

use clap::{Parser, Subcommand};

/// Staff Roster - personnel roster and leadership succession
///
/// Builds an organization from configuration, lists its staff and runs the
/// leadership succession.
#[derive(Parser, Debug)]
#[command(name = "staff-roster")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase logging verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the leader and the staff list
    Show {
        /// Path to configuration file
        #[arg(short, long, env = "STAFF_ROSTER_CONFIG")]
        config: Option<String>,

        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Resign the leader and install the successor
    Succession {
        /// Path to configuration file
        #[arg(short, long, env = "STAFF_ROSTER_CONFIG")]
        config: Option<String>,
    },

    /// Configuration management
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigSubcommand {
    /// Display the current configuration
    Show {
        /// Path to configuration file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Initialize a new configuration file
    Init {
        /// Path where to create the config file
        #[arg(short, long)]
        path: Option<String>,

        /// Overwrite existing configuration
        #[arg(short, long)]
        force: bool,
    },

    /// Validate a configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        config: Option<String>,
    },
}
