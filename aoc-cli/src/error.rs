//! Error types for the CLI

use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Client library error, surfaced as-is
    #[error(transparent)]
    Client(#[from] aoc_client::AocError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
