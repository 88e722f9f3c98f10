//! Grid construction and transforms

/// The four cardinal neighbor offsets
pub const D4: [(i32, i32); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

/// The eight neighbor offsets including diagonals
pub const D8: [(i32, i32); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 0),
    (-1, 1),
];

pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &str = "0123456789";
pub const VOWELS: &str = "aeiou";
pub const CONSONANTS: &str = "bcdfghjklmnpqrstvwxyz";

/// The `n` x `n` identity matrix
pub fn eye(n: usize) -> Vec<Vec<u64>> {
    (0..n)
        .map(|i| (0..n).map(|j| u64::from(i == j)).collect())
        .collect()
}

/// A `rows` x `cols` grid filled with copies of `value`.
///
/// Rank is part of the type in Rust, so the n-dimensional fill is one
/// function per rank; see [`fill3`]. For one dimension use `vec![value; n]`.
pub fn fill<T: Clone>(rows: usize, cols: usize, value: T) -> Vec<Vec<T>> {
    vec![vec![value; cols]; rows]
}

/// An `x` x `y` x `z` grid filled with copies of `value`
pub fn fill3<T: Clone>(x: usize, y: usize, z: usize, value: T) -> Vec<Vec<Vec<T>>> {
    vec![vec![vec![value; z]; y]; x]
}

/// Flatten one level of nesting
pub fn flatten<T>(grid: Vec<Vec<T>>) -> Vec<T> {
    grid.into_iter().flatten().collect()
}

/// Flatten two levels of nesting
pub fn flatten3<T>(grid: Vec<Vec<Vec<T>>>) -> Vec<T> {
    grid.into_iter().flatten().flatten().collect()
}

/// Rotate a grid 90 degrees clockwise
pub fn rotate_cw<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    (0..cols)
        .map(|c| (0..rows).rev().map(|r| grid[r][c].clone()).collect())
        .collect()
}

/// Rotate a grid 90 degrees clockwise `n` times; only `n & 3` matters
pub fn rotate<T: Clone>(grid: &[Vec<T>], n: u32) -> Vec<Vec<T>> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    match n & 3 {
        0 => grid.to_vec(),
        1 => rotate_cw(grid),
        2 => grid
            .iter()
            .rev()
            .map(|row| row.iter().rev().cloned().collect())
            .collect(),
        // counter-clockwise: transpose, then reverse the row order
        _ => (0..cols)
            .rev()
            .map(|c| (0..rows).map(|r| grid[r][c].clone()).collect())
            .collect(),
    }
}
