//! CLI argument parsing using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// A command-line toolchain for competing in Advent of Code
#[derive(Parser, Debug)]
#[command(
    name = "aoc",
    about = "A command-line toolchain for competing in Advent of Code",
    version
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Save your session token to the config path
    Session {
        /// Session token for authenticating with AoC (prompted if omitted)
        token: Option<String>,
    },

    /// Generate a solve-file skeleton for a puzzle
    Template {
        year: u16,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
        /// Output file
        #[arg(default_value = "solve.rs")]
        file: PathBuf,
    },

    /// Count down until the next day unlocks, then dump its input
    Countdown,

    /// Print the (cached or fetched) input for a puzzle
    Input {
        year: u16,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
    },

    /// Submit an answer for a puzzle
    Submit {
        year: u16,
        #[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
        day: u8,
        answer: String,
        /// Part to submit against; defaults to 2 once part 1 is marked done
        #[arg(short, long)]
        part: Option<u8>,
    },
}
