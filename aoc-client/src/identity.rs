//! Puzzle identity and the Advent of Code clock

use crate::error::AocError;
use chrono::{DateTime, Datelike, FixedOffset, Utc};
use std::fmt;

/// The first year an Advent of Code event ran
pub const FIRST_AOC_YEAR: u16 = 2015;

// Advent of Code begins at midnight US/Eastern; the event runs in December,
// so a fixed EST offset is sufficient for date math.
const EST_OFFSET_SECS: i32 = -5 * 3600;

/// Current time on the Advent of Code clock
pub fn aoc_now() -> DateTime<FixedOffset> {
    let est = FixedOffset::east_opt(EST_OFFSET_SECS).expect("static offset is in range");
    Utc::now().with_timezone(&est)
}

/// A `(year, day)` pair uniquely selecting one puzzle.
///
/// Validated at construction: year must be between 2015 and the current year
/// on the AoC clock, day between 1 and 25.
///
/// # Example
///
/// ```
/// use aoc_client::PuzzleId;
///
/// let id = PuzzleId::new(2023, 1).unwrap();
/// assert_eq!(id.year(), 2023);
/// assert!(PuzzleId::new(2014, 1).is_err());
/// assert!(PuzzleId::new(2023, 26).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PuzzleId {
    year: u16,
    day: u8,
}

impl PuzzleId {
    /// Create an identity, validating the year and day ranges
    ///
    /// # Errors
    ///
    /// Returns `AocError::InvalidIdentity` if the year is outside
    /// `[2015, current year]` or the day outside `[1, 25]`.
    pub fn new(year: u16, day: u8) -> Result<Self, AocError> {
        let max_year = aoc_now().year() as u16;
        if !(FIRST_AOC_YEAR..=max_year).contains(&year) {
            return Err(AocError::InvalidIdentity(format!(
                "year must be between {} and {}, got {}",
                FIRST_AOC_YEAR, max_year, year
            )));
        }
        if !(1..=25).contains(&day) {
            return Err(AocError::InvalidIdentity(format!(
                "day must be between 1 and 25, got {}",
                day
            )));
        }
        Ok(Self { year, day })
    }

    /// Identity for the current day on the AoC clock.
    ///
    /// Fails outside the 1st-25th of a month, like any other out-of-range day.
    pub fn today() -> Result<Self, AocError> {
        let now = aoc_now();
        Self::new(now.year() as u16, now.day() as u8)
    }

    /// The event year
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The day number (1-25)
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for PuzzleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} day {}", self.year, self.day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundary_years() {
        assert!(PuzzleId::new(2015, 1).is_ok());
        assert!(PuzzleId::new(2014, 1).is_err());
        let max_year = aoc_now().year() as u16;
        assert!(PuzzleId::new(max_year, 25).is_ok());
        assert!(PuzzleId::new(max_year + 1, 1).is_err());
    }

    #[test]
    fn boundary_days() {
        assert!(PuzzleId::new(2020, 1).is_ok());
        assert!(PuzzleId::new(2020, 25).is_ok());
        assert!(PuzzleId::new(2020, 0).is_err());
        assert!(PuzzleId::new(2020, 26).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(10))]

        #[test]
        fn prop_valid_range_constructs(day in 1u8..=25u8) {
            let max_year = aoc_now().year() as u16;
            for year in [FIRST_AOC_YEAR, max_year] {
                let id = PuzzleId::new(year, day).unwrap();
                prop_assert_eq!(id.year(), year);
                prop_assert_eq!(id.day(), day);
            }
        }

        #[test]
        fn prop_out_of_range_rejected(
            year in 1990u16..2015u16,
            day in 26u8..=100u8,
        ) {
            prop_assert!(matches!(
                PuzzleId::new(year, 1),
                Err(AocError::InvalidIdentity(_))
            ));
            prop_assert!(matches!(
                PuzzleId::new(2020, day),
                Err(AocError::InvalidIdentity(_))
            ));
        }
    }
}
