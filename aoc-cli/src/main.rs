//! AOC CLI - a command-line toolchain for competing in Advent of Code

mod cli;
mod commands;
mod error;

use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .without_time()
        .init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    match args.command {
        Command::Session { token } => commands::session::run(token),
        Command::Template { year, day, file } => commands::template::run(year, day, &file),
        Command::Countdown => commands::countdown::run(),
        Command::Input { year, day } => commands::input::run(year, day),
        Command::Submit {
            year,
            day,
            answer,
            part,
        } => commands::submit::run(year, day, answer, part),
    }
}
