//! Typed input parsing helpers
//!
//! Explicit parsing functions returning typed results: the terse way to go
//! from raw puzzle input to numbers, lines and grids.

use regex::Regex;
use std::sync::LazyLock;

static SIGNED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"-?\d+").expect("static regex is valid"));
static UNSIGNED_INT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("static regex is valid"));
static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\w+").expect("static regex is valid"));

/// The lines of the input
pub fn lines(s: &str) -> Vec<&str> {
    s.lines().collect()
}

/// Blank-line-separated blocks of the input
pub fn blocks(s: &str) -> Vec<&str> {
    s.split("\n\n").collect()
}

/// Every signed integer (`-?\d+`) in the input, in order of appearance
pub fn ints(s: &str) -> Vec<i64> {
    SIGNED_INT
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Every unsigned integer (`\d+`) in the input; a leading minus sign is not
/// part of the match, so `-2` yields `2`
pub fn uints(s: &str) -> Vec<u64> {
    UNSIGNED_INT
        .find_iter(s)
        .filter_map(|m| m.as_str().parse().ok())
        .collect()
}

/// Every word (`\w+`) in the input
pub fn words(s: &str) -> Vec<&str> {
    WORD.find_iter(s).map(|m| m.as_str()).collect()
}

/// The input as a 2-D grid of characters, one row per line
pub fn char_grid(s: &str) -> Vec<Vec<char>> {
    s.lines().map(|l| l.chars().collect()).collect()
}
