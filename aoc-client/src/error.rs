//! Error types for the AOC client

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while fetching inputs or submitting answers
#[derive(Error, Debug)]
pub enum AocError {
    /// No session token could be found anywhere
    #[error(
        "no session token found: checked {} and the {env_var} environment variable",
        .path.display()
    )]
    MissingCredential {
        /// The session file path that was checked
        path: PathBuf,
        /// The environment variable that was checked
        env_var: &'static str,
    },

    /// Year or day outside the valid puzzle range
    #[error("invalid puzzle identity: {0}")]
    InvalidIdentity(String),

    /// The site redirected the input request, which it does for stale cookies
    #[error("your session token has likely expired")]
    ExpiredSession,

    /// The puzzle input does not exist (wrong day/year, or not yet unlocked)
    #[error("input data not found; check that your day's puzzle is correct")]
    InputNotFound,

    /// The site rejected the request outright
    #[error("failed to fetch input data; perhaps your session token is invalid?")]
    InvalidSession,

    /// Any other non-200 response
    #[error("request failed with HTTP {status}")]
    FetchFailed {
        /// The status code that was received
        status: reqwest::StatusCode,
    },

    /// Guard against submitting an obviously-uninitialized placeholder
    #[error("cowardly refusing to submit non-answer: {0:?}")]
    RefusedAnswer(String),

    /// Part number outside {1, 2}
    #[error("part argument must either be 1 or 2, got {0}")]
    InvalidPart(u8),

    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Failed to decode response as UTF-8
    #[error("failed to decode response as UTF-8")]
    Encoding,

    /// The response HTML carried no recognizable message element
    #[error("failed to locate the message in the HTML response")]
    HtmlParse,

    /// Client initialization failed
    #[error("client initialization failed: {0}")]
    ClientInit(String),

    /// IO error from the cache, marker or session file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
