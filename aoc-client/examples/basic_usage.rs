//! Basic usage example for the AOC client
//!
//! This example demonstrates how to:
//! - Load a session token (config file or AOC_SESSION)
//! - Fetch puzzle input through the local cache
//! - Prepare and submit an answer
//!
//! Note: this requires a valid AOC session cookie. You can get yours from
//! your browser's cookies after logging in to adventofcode.com.

use aoc_client::{Puzzle, PuzzleId, SessionStore, SubmissionResult};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = SessionStore::new()?.load()?;

    let id = PuzzleId::new(2023, 1)?;
    let puzzle = Puzzle::new(id, session)?;

    println!("Fetching input for {}...", id);
    let input = puzzle.input()?;
    println!("✓ Input fetched ({} bytes)", input.len());
    println!(
        "First 100 chars: {}",
        input.chars().take(100).collect::<String>()
    );

    // Prepare validates the answer and resolves the part; nothing is sent yet
    let submission = puzzle.prepare("12345", None)?;
    println!(
        "Submitting {:?} for part {}...",
        submission.answer(),
        submission.part()
    );

    match puzzle.submit(&submission)? {
        SubmissionResult::Correct => println!("✓ That's the right answer!"),
        SubmissionResult::Incorrect => println!("✗ That's not the right answer"),
        SubmissionResult::Other(message) => println!("ℹ {}", message.trim()),
    }

    Ok(())
}
