//! Order and dispersion statistics over sample windows.
//!
//! Median uses Quickselect on a scratch copy, so callers keep their window
//! untouched. Standard deviation is the population one (`ddof = 0`).

// External dependencies
use core::cmp::Ordering::Greater;
use num_traits::Float;
use num_traits::float::TotalOrder;

// Internal dependencies
use crate::math::cast;

/// Population standard deviation of `len` values.
pub fn std_dev<T, I>(vals: I, len: usize) -> T
where
    T: Float,
    I: IntoIterator<Item = T> + Clone,
{
    if len == 0 {
        return T::zero();
    }
    let n: T = cast(len);
    let mu = vals.clone().into_iter().fold(T::zero(), |acc, v| acc + v) / n;
    let sq = vals.into_iter().fold(T::zero(), |acc, v| {
        let d = v - mu;
        acc + d * d
    });
    (sq / n).sqrt()
}

/// Weighted mean `sum(v_i * w_i) / sum(w_i)` over paired values.
pub fn weighted_mean<T, I>(vals: I, weights: &[T]) -> T
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    let (num, den) = vals
        .into_iter()
        .zip(weights.iter())
        .fold((T::zero(), T::zero()), |(num, den), (v, &w)| {
            (num + v * w, den + w)
        });
    num / den
}

/// Median computed in place using Quickselect.
///
/// Even-length input averages the two middle values. Values are ordered by
/// `total_cmp`, so NaN sorts above every number. Reorders `vals`.
#[inline]
pub fn median_inplace<T: Float + TotalOrder>(vals: &mut [T]) -> T {
    let n = vals.len();
    if n == 0 {
        return T::zero();
    }

    let mid = n / 2;

    if n.is_multiple_of(2) {
        // Even length: average of two middle values
        vals.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
        let upper = vals[mid];

        // Largest value of the lower half
        let lower = vals[..mid]
            .iter()
            .copied()
            .fold(vals[0], |acc, v| if v.total_cmp(&acc) == Greater { v } else { acc });

        (lower + upper) / cast(2.0)
    } else {
        // Odd length: middle value
        vals.select_nth_unstable_by(mid, |a, b| a.total_cmp(b));
        vals[mid]
    }
}
