//! `aoc input` - print a puzzle's input

use crate::error::CliError;
use aoc_client::{Puzzle, PuzzleId, SessionStore};

pub fn run(year: u16, day: u8) -> Result<(), CliError> {
    let session = SessionStore::new()?.load()?;
    let puzzle = Puzzle::new(PuzzleId::new(year, day)?, session)?;

    print!("{}", puzzle.input()?);
    Ok(())
}
