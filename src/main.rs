//! Staff Roster - personnel roster CLI
//!
//! Builds an organization from configuration and drives the roster core:
//! listing staff and handing leadership over to a successor.

mod cli;

use clap::Parser;
use serde::Serialize;
use tracing::{debug, error, info};

use staff_roster::config::{self, RosterConfig};
use staff_roster::logging::{self, LogGuards};
use staff_roster::{Introduce, Organization, Person, Result, StaffMember};

use crate::cli::{Cli, Commands, ConfigSubcommand};

fn main() {
    if let Err(e) = run() {
        error!("{}", e.format_for_log());
        eprint!("{}", e.format_for_terminal());
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config_path = match &cli.command {
        Commands::Config { subcommand } => {
            logging::init_simple(tracing::Level::WARN)?;
            return handle_config_command(subcommand.clone());
        }
        Commands::Show { config, .. } | Commands::Succession { config } => config.clone(),
    };

    let config = RosterConfig::load(config_path.as_deref())?;

    // The guards must be kept alive for the lifetime of the program
    let _log_guards: LogGuards = logging::init_logging(&config.logging, cli.verbose, cli.quiet)?;

    info!(version = env!("CARGO_PKG_VERSION"), "Starting staff roster");

    let org = Organization::from_config(&config)?;

    match cli.command {
        Commands::Show { json, .. } => show(&org, json),
        Commands::Succession { .. } => succession(org),
        Commands::Config { .. } => unreachable!(),
    }
}

/// Serializable view of the organization for `show --json`
#[derive(Serialize)]
struct RosterReport<'a> {
    organization: &'a str,
    leader: &'a Person,
    capacity: usize,
    current_number: usize,
    members: Vec<StaffMember>,
}

fn show(org: &Organization, json: bool) -> Result<()> {
    let roster = org.roster();

    if json {
        let report = RosterReport {
            organization: org.name(),
            leader: org.leader().person(),
            capacity: roster.capacity(),
            current_number: roster.current_number(),
            members: roster.members(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", org.name());
    println!("{}", org.leader().introduction());
    println!();
    print!("{}", roster.display_all());
    Ok(())
}

fn succession(mut org: Organization) -> Result<()> {
    match org.hand_over() {
        Ok(succession) => {
            println!("{} has resigned.", succession.outgoing);
            println!("New leader: {}", org.leader().introduction());
            println!();
            print!("{}", org.roster().display_all());
        }
        Err(notice) => {
            debug!(kind = notice.kind(), "Succession declined");
            println!("Notice: {}", notice);
        }
    }
    Ok(())
}

/// Handle configuration subcommands
fn handle_config_command(subcommand: ConfigSubcommand) -> Result<()> {
    match subcommand {
        ConfigSubcommand::Show { config } => {
            let cfg = RosterConfig::load(config.as_deref())?;
            println!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigSubcommand::Init { path, force } => {
            let written = config::init_config(path.as_deref(), force)?;
            println!("Configuration file created: {}", written.display());
        }
        ConfigSubcommand::Validate { config } => {
            RosterConfig::load(config.as_deref())?;
            println!("Configuration is valid.");
        }
    }

    Ok(())
}
