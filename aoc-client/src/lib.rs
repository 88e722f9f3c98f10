//! Advent of Code client library
//!
//! Utilities for competing in Advent of Code from the command line: session
//! token storage, puzzle input fetching with a local file cache, and answer
//! submission with verdict classification.
//!
//! # Features
//!
//! - Session token loading from a per-user config file or `AOC_SESSION`
//! - Input fetching with a cache-first fast path (one network fetch per
//!   puzzle, ever)
//! - Answer submission classified as correct / incorrect / other
//! - Secure TLS using rustls, session tokens zeroized in memory
//! - Blocking synchronous API
//! - Well-typed errors using thiserror
//!
//! # Example
//!
//! ```no_run
//! use aoc_client::{Puzzle, PuzzleId, SessionStore, SubmissionResult};
//!
//! # fn main() -> Result<(), aoc_client::AocError> {
//! let session = SessionStore::new()?.load()?;
//! let puzzle = Puzzle::new(PuzzleId::new(2023, 1)?, session)?;
//!
//! // Cached after the first call; later calls never touch the network
//! let input = puzzle.input()?;
//!
//! // Validate first, confirm with the user, then send
//! let submission = puzzle.prepare(1234i64, None)?;
//! match puzzle.submit(&submission)? {
//!     SubmissionResult::Correct => println!("Correct!"),
//!     SubmissionResult::Incorrect => println!("Incorrect"),
//!     SubmissionResult::Other(message) => println!("{}", message),
//! }
//! # Ok(())
//! # }
//! ```

mod cache;
mod client;
mod error;
mod identity;
mod parser;
mod puzzle;
mod session;

pub use cache::InputCache;
pub use client::{AocClient, AocClientBuilder, SubmissionResult, USER_AGENT};
pub use error::AocError;
pub use identity::{FIRST_AOC_YEAR, PuzzleId, aoc_now};
pub use puzzle::{
    Answer, PART1_DONE_DIR, Puzzle, PuzzleBuilder, RETRY_ATTEMPTS, RETRY_DELAY, Submission,
    fetch_with_retry,
};
pub use session::{SESSION_ENV_VAR, SessionStore};
