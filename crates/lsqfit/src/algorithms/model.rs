//! Straight-line model propagation and residuals.
//!
//! The fitted state `[alpha, beta]` is propagated over the observed `x`
//! values to produce expected `y` values; residuals are observed minus
//! expected.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;

// ============================================================================
// Linear Model
// ============================================================================

/// Fitted model `y = alpha + beta * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel<T> {
    /// Intercept.
    pub alpha: T,

    /// Slope.
    pub beta: T,
}

impl<T: Float> LinearModel<T> {
    /// Create a model from intercept and slope.
    pub fn new(alpha: T, beta: T) -> Self {
        Self { alpha, beta }
    }

    /// Create a model from a two-element state vector `[alpha, beta]`.
    pub fn from_state(state: &[T]) -> Result<Self, LsqError> {
        match state {
            [alpha, beta] => Ok(Self::new(*alpha, *beta)),
            _ => Err(LsqError::ShapeMismatch {
                expected: (2, 1),
                got: (state.len(), 1),
            }),
        }
    }

    /// State vector `[alpha, beta]`.
    pub fn state(&self) -> [T; 2] {
        [self.alpha, self.beta]
    }

    /// Expected `y` at a single abscissa.
    #[inline]
    pub fn predict(&self, x: T) -> T {
        self.alpha + self.beta * x
    }

    /// Expected `y` for every `x`, in the same order.
    pub fn propagate(&self, x: &[T]) -> Vec<T> {
        x.iter().map(|&xi| self.predict(xi)).collect()
    }
}

// ============================================================================
// Residuals
// ============================================================================

/// Elementwise `y_obs[i] - y_pred[i]`.
pub fn residuals<T: Float>(y_obs: &[T], y_pred: &[T]) -> Result<Vec<T>, LsqError> {
    if y_obs.len() != y_pred.len() {
        return Err(LsqError::MismatchedInputs {
            x_len: y_obs.len(),
            y_len: y_pred.len(),
        });
    }
    Ok(y_obs
        .iter()
        .zip(y_pred.iter())
        .map(|(&o, &p)| o - p)
        .collect())
}
