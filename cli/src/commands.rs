pub mod menu;

use clap::{ArgAction, Parser};
use hotelier_common::config::{Config, DEFAULT_HOTEL_NAME};

#[derive(Parser)]
#[command(name = "hotelier")]
#[command(about = "An interactive booking ledger for a single hotel.")]
pub struct CommandLine {
    /// Name of the hotel shown in reports
    #[arg(long, default_value = DEFAULT_HOTEL_NAME)]
    pub name: String,
    /// Start without the sample rooms and bookings
    #[arg(long)]
    pub no_seed: bool,
    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
    /// Raise log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn to_config(&self) -> Config {
        Config {
            hotel_name: self.name.clone(),
            seed: !self.no_seed,
            no_banner: self.no_banner,
            verbosity: self.verbose,
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
