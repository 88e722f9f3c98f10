//! Helper functions for writing Advent of Code solutions
//!
//! Pure string/list/grid conveniences, usable independently of the network
//! client. Input parsing is explicit and typed: `ints` returns `Vec<i64>`,
//! `lines` returns `Vec<&str>`, and so on.

pub mod chunk;
pub mod grid;
pub mod parse;
pub mod succ;

pub use chunk::{adjacent, chunks, chunks_step};
pub use grid::{D4, D8, eye, fill, fill3, flatten, flatten3, rotate, rotate_cw};
pub use parse::{blocks, char_grid, ints, lines, uints, words};
pub use succ::{SuccError, succ};
