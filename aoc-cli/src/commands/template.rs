//! `aoc template` - generate a solve-file skeleton

use crate::error::CliError;
use std::path::Path;

const TEMPLATE: &str = r#"use aoc_client::{Puzzle, PuzzleId, SessionStore};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let session = SessionStore::new()?.load()?;
    let puzzle = Puzzle::new(PuzzleId::new({year}, {day})?, session)?;

    let input = puzzle.input()?;
    let input = input.trim_end_matches('\n');

    let mut answer: Option<i64> = None;

    for _line in input.lines() {
        // solve here
    }

    if let Some(answer) = answer.take() {
        let submission = puzzle.prepare(answer, None)?;
        println!("{:?}", puzzle.submit(&submission)?);
    }
    Ok(())
}
"#;

/// Render the skeleton with the year and day substituted
fn render(year: u16, day: u8) -> String {
    TEMPLATE
        .replace("{year}", &year.to_string())
        .replace("{day}", &day.to_string())
}

pub fn run(year: u16, day: u8, file: &Path) -> Result<(), CliError> {
    std::fs::write(file, render(year, day))?;
    println!("Wrote template for {} day {} to {:?}.", year, day, file);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_year_and_day() {
        let rendered = render(2023, 7);
        assert!(rendered.contains("PuzzleId::new(2023, 7)"));
        assert!(!rendered.contains("{year}"));
        assert!(!rendered.contains("{day}"));
    }

    #[test]
    fn test_run_writes_file() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("solve.rs");

        run(2024, 3, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("PuzzleId::new(2024, 3)"));
    }
}
