mod config;
mod platform;

use clap::Parser;

use crate::config::Cli;
use crate::platform::logging::{self, LogDestination};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::initialize(LogDestination::File(cli.log_file.clone()));
    platform::run_app(cli)
}
