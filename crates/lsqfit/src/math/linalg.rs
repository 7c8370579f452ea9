//! Closed-form linear algebra for the two-parameter normal equations.
//!
//! ## Purpose
//!
//! This module provides the determinant, inverse, and matrix-vector product
//! needed to solve `(AᵀA) · state = Aᵀb` for a straight-line model.
//!
//! ## Design notes
//!
//! * **Fast path**: The inverse is the 2x2 adjugate over the determinant.
//! * **Guarded**: Anything other than a 2x2 matrix is rejected with `ShapeMismatch`.
//! * **Explicit failure**: Singular matrices return `SingularMatrix` instead of
//!   producing infinities or NaN.
//!
//! ## Key concepts
//!
//! * **Relative singularity test**: `|det| <= tol * max(|m00*m11|, |m01*m10|)`.
//!   The determinant is compared against the magnitude of the two products it
//!   is the difference of, so the test is independent of the units of `x`.
//!
//! ## Non-goals
//!
//! * This module does not invert matrices larger than 2x2.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;
use crate::primitives::matrix::Matrix;

/// Floor of the default relative tolerance for the singularity test.
pub const DEFAULT_SINGULAR_TOLERANCE: f64 = 1e-10;

/// Multiple of machine epsilon the default tolerance never drops below.
pub const SINGULAR_EPSILON_FACTOR: f64 = 1024.0;

/// Default relative tolerance for `T`: `max(1e-10, 1024 * T::epsilon())`.
///
/// Accumulating `n * Σx² - (Σx)²` in `T` leaves a rounding residue of a few
/// `n * epsilon` relative to the matrix scale. For `f64` the floor dominates
/// (`1024 * 2.2e-16 ≈ 2.3e-13`); for `f32` the epsilon term does (`≈ 1.2e-4`),
/// so identical abscissae still fail the test.
pub fn default_singular_tolerance<T: Float>() -> T {
    let floor = T::from(DEFAULT_SINGULAR_TOLERANCE).unwrap_or_else(T::epsilon);
    let factor = T::from(SINGULAR_EPSILON_FACTOR).unwrap_or_else(T::one);
    floor.max(factor * T::epsilon())
}

// ============================================================================
// Determinant and Inverse
// ============================================================================

/// Determinant of a 2x2 matrix: `m00*m11 - m01*m10`.
pub fn determinant<T: Float>(m: &Matrix<T>) -> Result<T, LsqError> {
    m.ensure_shape(2, 2)?;
    Ok(m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)])
}

/// Whether `det` is indistinguishable from zero for the matrix `m`.
fn is_singular<T: Float>(m: &Matrix<T>, det: T, tol: T) -> bool {
    if !det.is_finite() {
        return true;
    }
    let scale = (m[(0, 0)] * m[(1, 1)])
        .abs()
        .max((m[(0, 1)] * m[(1, 0)]).abs());
    scale == T::zero() || det.abs() <= tol * scale
}

/// Inverse of a 2x2 matrix.
///
/// # Errors
///
/// * `ShapeMismatch` if `m` is not 2x2.
/// * `SingularMatrix` if the determinant fails the relative singularity test.
pub fn inverse<T: Float>(m: &Matrix<T>, tol: T) -> Result<Matrix<T>, LsqError> {
    let det = determinant(m)?;

    if is_singular(m, det, tol) {
        return Err(LsqError::SingularMatrix {
            determinant: det.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(Matrix::from_rows(&[
        [m[(1, 1)] / det, -m[(0, 1)] / det],
        [-m[(1, 0)] / det, m[(0, 0)] / det],
    ]))
}

// ============================================================================
// Products
// ============================================================================

/// Matrix-vector product: `out[r] = Σ_c a[r][c] * b[c]`.
pub fn mat_vec<T: Float>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>, LsqError> {
    if a.cols() != b.len() {
        return Err(LsqError::ShapeMismatch {
            expected: (a.cols(), 1),
            got: (b.len(), 1),
        });
    }

    Ok((0..a.rows())
        .map(|r| {
            a.row(r)
                .iter()
                .zip(b.iter())
                .fold(T::zero(), |acc, (&arc, &bc)| acc + arc * bc)
        })
        .collect())
}
