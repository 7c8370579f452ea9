//! Normal-equations assembly and solution.
//!
//! ## Purpose
//!
//! This module forms the normal equations `(AᵀA) · state = Aᵀb` for the model
//! `y = alpha + beta * x` and solves them for the state vector and its
//! unweighted covariance.
//!
//! ## Design notes
//!
//! * **Single pass**: `AᵀA` and `Aᵀb` are accumulated in one sweep over the data.
//! * **Stateless**: Every refit rebuilds both from scratch; nothing is updated incrementally.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * `AᵀA = [[n, Σx], [Σx, Σx²]]` depends only on `x`.
//! * `Aᵀb = [Σy, Σxy]`.
//! * The covariance is `(AᵀA)⁻¹`; its diagonal holds the parameter variances
//!   before scaling by the observational variance.
//!
//! ## Non-goals
//!
//! * This module does not weight observations.
//! * This module does not decide which observations participate.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::LinearModel;
use crate::math::linalg::{inverse, mat_vec};
use crate::primitives::errors::LsqError;
use crate::primitives::matrix::Matrix;

/// Fewest observations for which `AᵀA` can be non-singular.
pub const MIN_SOLVE_POINTS: usize = 2;

// ============================================================================
// Normal Equations
// ============================================================================

/// The two components of the least-squares general solution.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalEquations<T> {
    /// Information matrix `AᵀA` (2x2, symmetric).
    pub ata: Matrix<T>,

    /// Right-hand side `Aᵀb` (length 2).
    pub atb: Vec<T>,
}

/// Result of solving the normal equations once.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution<T> {
    /// Fitted intercept and slope.
    pub model: LinearModel<T>,

    /// Unweighted covariance `(AᵀA)⁻¹`.
    pub covariance: Matrix<T>,
}

impl<T: Float> NormalEquations<T> {
    /// Accumulate `AᵀA` and `Aᵀb` from paired observations.
    ///
    /// # Errors
    ///
    /// * `MismatchedInputs` if `x` and `y` differ in length.
    /// * `TooFewPoints` if fewer than two observations are given.
    pub fn build(x: &[T], y: &[T]) -> Result<Self, LsqError> {
        if x.len() != y.len() {
            return Err(LsqError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.len() < MIN_SOLVE_POINTS {
            return Err(LsqError::TooFewPoints {
                got: x.len(),
                min: MIN_SOLVE_POINTS,
            });
        }

        let mut ata = Matrix::zeros(2, 2);
        let mut atb = vec![T::zero(); 2];

        for (&xi, &yi) in x.iter().zip(y.iter()) {
            ata[(0, 0)] = ata[(0, 0)] + T::one();
            ata[(0, 1)] = ata[(0, 1)] + xi;
            ata[(1, 0)] = ata[(1, 0)] + xi;
            ata[(1, 1)] = ata[(1, 1)] + xi * xi;

            atb[0] = atb[0] + yi;
            atb[1] = atb[1] + xi * yi;
        }

        Ok(Self { ata, atb })
    }

    /// Invert `AᵀA` and solve for the state vector.
    ///
    /// # Errors
    ///
    /// * `SingularMatrix` if `AᵀA` cannot be inverted (e.g. all `x` equal).
    pub fn solve(&self, singular_tolerance: T) -> Result<Solution<T>, LsqError> {
        let covariance = inverse(&self.ata, singular_tolerance)?;
        let state = mat_vec(&covariance, &self.atb)?;
        let model = LinearModel::from_state(&state)?;
        Ok(Solution { model, covariance })
    }
}
