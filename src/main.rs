mod commands;
mod logging;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use ews_core::config::EwsConfig;

use crate::render::Format;

#[derive(Parser)]
#[command(name = "ews-tz")]
#[command(about = "Resolve IANA time zones into Exchange Web Services time zones")]
struct Cli {
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the EWS SerializableTimeZone for a zone
    Resolve {
        /// IANA zone id (defaults to the configured or system zone)
        #[arg(short, long)]
        zone: Option<String>,

        /// Reference instant (RFC 3339, defaults to now)
        #[arg(long)]
        at: Option<String>,

        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Show the Windows zone name for an IANA zone id
    WindowsId {
        /// IANA zone id (defaults to the configured or system zone)
        zone: Option<String>,
    },
    /// List the IANA zone ids for a Windows zone name
    StandardIds {
        /// e.g. "Pacific Standard Time"
        windows_id: String,
    },
    /// List all known Windows zone names
    Zones,
    /// Show configuration
    Config {
        /// Write a default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // A broken config file only fails the commands that need it, so `config` can report it
    let config = EwsConfig::load();

    logging::init(config.as_ref().ok(), cli.verbose);

    match cli.command {
        Commands::Config { init } => commands::config::run(config, init),
        command => dispatch(command, config?),
    }
}

fn dispatch(command: Commands, config: EwsConfig) -> Result<()> {
    match command {
        Commands::Resolve { zone, at, format } => {
            let zone = commands::select_zone(zone.as_deref(), &config)?;
            commands::resolve::run(zone, at.as_deref(), format)
        }
        Commands::WindowsId { zone } => {
            let zone = commands::select_zone(zone.as_deref(), &config)?;
            commands::windows_id::run(zone)
        }
        Commands::StandardIds { windows_id } => commands::standard_ids::run(&windows_id),
        Commands::Zones => commands::zones::run(),
        Commands::Config { init } => commands::config::run(Ok(config), init),
    }
}
