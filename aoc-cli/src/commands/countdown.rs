//! `aoc countdown` - wait until the next day unlocks, then dump its input

use crate::error::CliError;
use aoc_client::{
    Puzzle, PuzzleId, RETRY_ATTEMPTS, RETRY_DELAY, SessionStore, aoc_now, fetch_with_retry,
};
use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveTime};
use colored::Colorize;

pub fn run() -> Result<(), CliError> {
    let start = next_unlock(aoc_now());
    let (year, day) = (start.year() as u16, start.day() as u8);

    println!(
        "{}",
        format!("Counting down from Advent of Code {}, Day {}...", year, day).white()
    );

    loop {
        let now = aoc_now();
        if now >= start {
            break;
        }
        let left = start - now;
        let secs = left.num_seconds();
        let (hours, rem) = (secs / 3600, secs % 3600);
        let (minutes, seconds) = (rem / 60, rem % 60);
        println!("{}", format!("{:02}:{:02}:{:02}", hours, minutes, seconds).white());
        std::thread::sleep(std::time::Duration::from_secs(1));
    }

    let session = SessionStore::new()?.load()?;
    let puzzle = Puzzle::new(PuzzleId::new(year, day)?, session)?;

    let input = fetch_with_retry(&puzzle, RETRY_ATTEMPTS, RETRY_DELAY)?;
    println!("{}", input.trim_end_matches('\n'));
    Ok(())
}

/// The upcoming midnight on the AoC clock; puzzles unlock at midnight Eastern
fn next_unlock(now: DateTime<FixedOffset>) -> DateTime<FixedOffset> {
    let tomorrow = now.date_naive() + Days::new(1);
    tomorrow
        .and_time(NaiveTime::MIN)
        .and_local_timezone(*now.offset())
        .single()
        .expect("fixed offsets have no ambiguous local times")
}
