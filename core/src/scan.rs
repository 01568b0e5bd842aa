use crate::case::Bounds;

/// Counts disjoint contiguous windows whose running sum lands in `bounds`,
/// scanning left to right.
///
/// The window grows by one element per step and is shrunk from the left
/// while its sum exceeds the upper bound. The moment the sum is in range
/// the window is counted, the sum resets to zero, and a fresh window
/// starts right after the current index. O(N) amortized: each index is
/// added once and discarded at most once.
///
/// An element larger than `bounds.hi` on its own empties the window before
/// the range check, so it only counts when the emptied sum 0 is itself in
/// range. The left-shrink assumes advancing the left edge lowers the sum;
/// negative elements break that assumption and get no special handling,
/// so on mixed-sign input some in-range windows go uncounted.
///
/// The accumulator is `i128`; sums of `i64` elements cannot overflow it.
pub fn count_windows(values: &[i64], bounds: Bounds) -> usize {
    let mut sum: i128 = 0;
    let mut window_start = 0usize;
    let mut matches = 0usize;

    for (i, &v) in values.iter().enumerate() {
        sum += i128::from(v);
        while sum > i128::from(bounds.hi) && window_start <= i {
            sum -= i128::from(values[window_start]);
            window_start += 1;
        }
        if bounds.contains(sum) {
            matches += 1;
            sum = 0;
            window_start = i + 1;
        }
    }

    matches
}
