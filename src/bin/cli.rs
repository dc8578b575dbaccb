// src/bin/cli.rs
use clap::Parser;
use color_eyre::eyre::Result;

use deal_scan::cli::{Cli, ConsoleProgress};
use deal_scan::{log, runner};

fn main() -> Result<()> {
    color_eyre::install()?;
    let _log_guard = log::init();

    let opts = Cli::parse().into_options()?;

    let mut console = ConsoleProgress;
    console.started();
    runner::run(&opts, Some(&mut console))?;
    Ok(())
}
