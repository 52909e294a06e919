mod cli;
mod config;
mod convert;
mod index_cmd;
mod logging;

use std::process;

use anyhow::Result;
use caeli_index::IndexKind;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Spi(args) => index_cmd::run(IndexKind::Spi, args),
        Command::Spei(args) => index_cmd::run(IndexKind::Spei, args),
    }
}
