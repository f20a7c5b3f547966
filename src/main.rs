mod base;
mod cli;
mod convert;
mod errors;
mod filter;
mod globals;
mod session;

use clap::Parser;
use eyre::Result;
use log::info;

fn main() -> Result<()> {
    // Initialize the logger
    pretty_env_logger::init();

    info!("{} {} started", globals::PROGRAM, globals::VERSION);

    crate::cli::Cli::parse().run()
}
