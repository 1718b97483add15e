mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;
use wp_core::ScopedEvaluationDate;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let _pinned = cli.today.map(|date| {
        tracing::info!(%date, "evaluation date pinned");
        ScopedEvaluationDate::new(date.serial())
    });

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Phase(args) => commands::phase(args),
        Command::Month(args) => commands::month(args),
        Command::Holidays(args) => commands::holidays(args),
        Command::Festivals => commands::festivals(),
        Command::Next => commands::next(),
        Command::Day(args) => commands::day(args),
    }
}
