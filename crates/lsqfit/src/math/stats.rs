//! Residual dispersion statistics.
//!
//! Root-mean-square of residuals and the bias-corrected observational
//! standard deviation derived from it.

// External dependencies
use num_traits::Float;

/// Root-mean-square of `residuals`: `sqrt(Σ r² / n)`.
///
/// Returns zero for an empty slice.
pub fn rms<T: Float>(residuals: &[T]) -> T {
    if residuals.is_empty() {
        return T::zero();
    }
    let n = T::from(residuals.len()).unwrap_or(T::one());
    let sum_sq = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
    (sum_sq / n).sqrt()
}

/// Unweighted observational standard deviation: `sqrt(rms² · n / (n - 1))`.
///
/// Returns `None` when `n < 2`, where the correction is undefined.
pub fn observational_sigma<T: Float>(rms: T, n: usize) -> Option<T> {
    if n < 2 {
        return None;
    }
    let n_t = T::from(n)?;
    Some((rms * rms * n_t / (n_t - T::one())).sqrt())
}
