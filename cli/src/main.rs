mod commands;
mod terminal;

use std::io::{self, Write};

use anyhow::Context;
use commands::CommandLine;
use commands::menu::Menu;
use hotelier_common::config::Config;
use hotelier_core::{Hotel, seed};
use terminal::{logging, print};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    let cfg: Config = commands.to_config();

    logging::init_logging(cfg.verbosity);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print::banner(&mut out, cfg.no_banner)?;

    let mut hotel = Hotel::new(cfg.hotel_name.as_str());
    if cfg.seed {
        seed::populate(&mut hotel).context("failed to seed the startup inventory")?;
    }
    info!("Ledger for {} is open", hotel.name());

    let stdin = io::stdin();
    Menu::new(&mut hotel, stdin.lock(), &mut out)
        .run()
        .context("terminal I/O failed")?;

    print::fat_separator(&mut out)?;
    out.flush()?;
    Ok(())
}
