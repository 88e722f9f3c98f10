//! Chunking and windowing

/// Split `seq` into pieces of `size` elements, advancing by `step` between
/// piece starts. With `partial = false`, trailing pieces shorter than `size`
/// are dropped.
///
/// # Panics
///
/// Panics if `size` or `step` is zero, matching `slice::chunks`.
///
/// # Example
///
/// ```
/// use aoc_helpers::chunks_step;
///
/// assert_eq!(
///     chunks_step(&[1, 2, 3, 4, 5], 2, 2, true),
///     vec![vec![1, 2], vec![3, 4], vec![5]]
/// );
/// assert_eq!(
///     chunks_step(&[1, 2, 3, 4, 5], 2, 2, false),
///     vec![vec![1, 2], vec![3, 4]]
/// );
/// ```
pub fn chunks_step<T: Clone>(seq: &[T], size: usize, step: usize, partial: bool) -> Vec<Vec<T>> {
    assert!(size > 0, "size must be positive");
    assert!(step > 0, "step must be positive");

    let high = if partial {
        seq.len()
    } else {
        (seq.len() + 1).saturating_sub(size)
    };

    let mut out = Vec::new();
    let mut i = 0;
    while i < high {
        out.push(seq[i..seq.len().min(i + size)].to_vec());
        i += step;
    }
    out
}

/// Split `seq` into non-overlapping chunks of `size`, dropping a short tail
pub fn chunks<T: Clone>(seq: &[T], size: usize) -> Vec<Vec<T>> {
    chunks_step(seq, size, size, false)
}

/// Overlapping windows of `size` adjacent elements (pairs by default in the
/// classic puzzle usage; pass 3 for triplets, and so on)
pub fn adjacent<T: Clone>(seq: &[T], size: usize) -> Vec<Vec<T>> {
    chunks_step(seq, size, 1, false)
}
