//! Parameter uncertainties from an unweighted fit.
//!
//! ## Purpose
//!
//! Without a weighting matrix the covariance `(AᵀA)⁻¹` is only known up to
//! the observational variance. This module estimates that variance from the
//! RMS residual and scales the parameter standard deviations by it.
//!
//! ## Key concepts
//!
//! * `obs_sigma = sqrt(rms² · n / (n - 1))`
//! * `sigma_alpha = obs_sigma · sqrt(cov[0][0])`
//! * `sigma_beta  = obs_sigma · sqrt(cov[1][1])`
//!
//! ## Non-goals
//!
//! * This module does not compute confidence or prediction intervals.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::observational_sigma;
use crate::primitives::errors::LsqError;
use crate::primitives::matrix::Matrix;

// ============================================================================
// Uncertainty
// ============================================================================

/// One-sigma uncertainties of the fitted parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Uncertainty<T> {
    /// Bias-corrected observational standard deviation.
    pub obs_sigma: T,

    /// Standard deviation of the intercept.
    pub sigma_alpha: T,

    /// Standard deviation of the slope.
    pub sigma_beta: T,
}

impl<T: Float> Uncertainty<T> {
    /// Fewest observations for which the variance correction is defined.
    pub const MIN_POINTS: usize = 2;

    /// Scale the covariance diagonal by the observational sigma.
    ///
    /// # Errors
    ///
    /// * `ShapeMismatch` if `covariance` is not 2x2.
    /// * `TooFewPoints` if `n < 2`.
    pub fn compute(covariance: &Matrix<T>, rms: T, n: usize) -> Result<Self, LsqError> {
        covariance.ensure_shape(2, 2)?;
        let obs_sigma = observational_sigma(rms, n).ok_or(LsqError::TooFewPoints {
            got: n,
            min: Self::MIN_POINTS,
        })?;

        Ok(Self {
            obs_sigma,
            sigma_alpha: obs_sigma * covariance[(0, 0)].sqrt(),
            sigma_beta: obs_sigma * covariance[(1, 1)].sqrt(),
        })
    }
}
