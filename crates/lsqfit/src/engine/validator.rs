//! Input validation for least-squares configuration and data.
//!
//! ## Purpose
//!
//! This module provides validation functions for refinement parameters and
//! input observations. Every check returns `Result<(), LsqError>` and fails
//! fast on the first violation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not filter or correct invalid inputs.
//! * This module does not perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for least-squares configuration and input data.
pub struct Validator;

impl Validator {
    /// Upper bound on refinement iterations.
    pub const MAX_ITERATIONS: usize = 1000;

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate paired observation sequences.
    ///
    /// Checks, in order: non-empty, equal length, at least `min_points`,
    /// all values finite.
    pub fn validate_inputs<T: Float>(x: &[T], y: &[T], min_points: usize) -> Result<(), LsqError> {
        if x.is_empty() || y.is_empty() {
            return Err(LsqError::EmptyInput);
        }

        let n = x.len();
        if n != y.len() {
            return Err(LsqError::MismatchedInputs {
                x_len: n,
                y_len: y.len(),
            });
        }

        if n < min_points {
            return Err(LsqError::TooFewPoints {
                got: n,
                min: min_points,
            });
        }

        for (i, (&xi, &yi)) in x.iter().zip(y.iter()).enumerate() {
            if !xi.is_finite() {
                return Err(LsqError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    xi.to_f64().unwrap_or(f64::NAN)
                )));
            }
            if !yi.is_finite() {
                return Err(LsqError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    yi.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the number of refinement iterations.
    pub fn validate_iterations(iterations: usize) -> Result<(), LsqError> {
        if iterations == 0 || iterations > Self::MAX_ITERATIONS {
            return Err(LsqError::InvalidIterations(iterations));
        }
        Ok(())
    }

    /// Validate the RMS multiple used as the rejection threshold.
    pub fn validate_rejection_factor<T: Float>(factor: T) -> Result<(), LsqError> {
        if !factor.is_finite() || factor <= T::zero() {
            return Err(LsqError::InvalidRejectionFactor(
                factor.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the relative singularity tolerance.
    pub fn validate_tolerance<T: Float>(tol: T) -> Result<(), LsqError> {
        if !tol.is_finite() || tol < T::zero() {
            return Err(LsqError::InvalidTolerance(tol.to_f64().unwrap_or(f64::NAN)));
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), LsqError> {
        if let Some(param) = duplicate_param {
            return Err(LsqError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
