//! Three-way divide-and-conquer summation.
//!
//! The core folds the input in consecutive groups of three: each group
//! collapses to a partial sum, the partial sums form a buffer one third the
//! size, and the buffer is summed the same way. Work stays linear in the
//! input length while recursion depth is logarithmic.

use crate::errors::SumError;

/// Number of elements folded by a single base-case pass.
const GROUP_SIZE: usize = 3;

/// Sum the first `length` elements of `values` by recursive three-way
/// partitioning.
///
/// `length` may be any prefix of the slice; zero sums to zero. A `length`
/// larger than the slice is rejected with [`SumError::LengthOutOfBounds`]
/// rather than read out of bounds.
///
/// The result equals the flat linear sum of the prefix for any input whose
/// sum is representable in `i64`.
pub fn recursive_sum(values: &[i64], length: usize) -> Result<i64, SumError> {
    if length > values.len() {
        return Err(SumError::LengthOutOfBounds {
            length,
            available: values.len(),
        });
    }
    Ok(sum_groups(&values[..length]))
}

/// Flat single-pass sum over a whole slice.
///
/// Serves as the base-case kernel of [`recursive_sum`] and as the reference
/// oracle in tests and benchmarks.
pub fn linear_sum(values: &[i64]) -> i64 {
    values.iter().sum()
}

/// Pure recursion over a prefix already known to be in bounds.
///
/// Invariant: the partial-sum buffer holds exactly `ceil(len / 3)` entries,
/// one per group, so each level shrinks the input by a factor of at least
/// three and the recursion terminates.
fn sum_groups(values: &[i64]) -> i64 {
    if values.len() <= GROUP_SIZE {
        return linear_sum(values);
    }

    let mut sums = Vec::with_capacity(values.len().div_ceil(GROUP_SIZE));
    for group in values.chunks(GROUP_SIZE) {
        sums.push(sum_groups(group));
    }
    sum_groups(&sums)
}
