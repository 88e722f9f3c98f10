//! `aoc submit` - confirm and submit an answer

use crate::commands::prompt;
use crate::error::CliError;
use aoc_client::{Puzzle, PuzzleId, SessionStore, SubmissionResult};
use colored::Colorize;

pub fn run(year: u16, day: u8, answer: String, part: Option<u8>) -> Result<(), CliError> {
    let session = SessionStore::new()?.load()?;
    let puzzle = Puzzle::new(PuzzleId::new(year, day)?, session)?;

    // Guards (refused answers, bad part) run before the user is prompted
    let submission = puzzle.prepare(answer, part)?;

    let question = format!(
        "Are you sure you want to submit {:?} for part {}?",
        submission.answer(),
        submission.part()
    );
    if !prompt::confirm(&question)? {
        // Declined: end cleanly with no result
        return Ok(());
    }

    match puzzle.submit(&submission)? {
        SubmissionResult::Correct => println!("{}", "That's the right answer!".green()),
        SubmissionResult::Incorrect => println!("{}", "That's not the right answer.".red()),
        SubmissionResult::Other(message) => println!("{}", message.trim().yellow()),
    }
    Ok(())
}
