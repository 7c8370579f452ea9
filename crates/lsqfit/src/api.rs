//! High-level API for least-squares fitting.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry point. A fluent builder
//! collects the refinement parameters, validates them once in `build()`, and
//! produces a model that can be fitted to any number of datasets.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with defaults for every parameter.
//! * **Validated**: Parameters are checked when `.build()` is called; inputs when `.fit()` is.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create an [`LsqBuilder`] via `LeastSquares::new()`.
//! 2. Chain configuration methods (`.iterations()`, `.rejection_factor()`, etc.).
//! 3. Call `.build()` to obtain a [`LeastSquaresModel`], then `.fit(&x, &y)`.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::engine::executor::{MIN_REFINE_POINTS, RefinementExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::model::LinearModel;
pub use crate::algorithms::rejection::Rejected;
pub use crate::engine::executor::RefinementConfig;
pub use crate::engine::output::{IterationReport, LsqResult};
pub use crate::evaluation::uncertainty::Uncertainty;
pub use crate::primitives::errors::LsqError;
pub use crate::primitives::matrix::Matrix;
pub use crate::primitives::observations::{Observation, ObservationSet};

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a least-squares refinement.
#[derive(Debug, Clone)]
pub struct LsqBuilder<T> {
    /// Number of reject-and-refit iterations.
    pub iterations: Option<usize>,

    /// RMS multiple beyond which observations are rejected.
    pub rejection_factor: Option<T>,

    /// Relative tolerance for the singular-matrix test.
    pub singular_tolerance: Option<T>,

    /// Stop as soon as an iteration rejects nothing.
    pub stop_when_stable: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: Float> Default for LsqBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> LsqBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            iterations: None,
            rejection_factor: None,
            singular_tolerance: None,
            stop_when_stable: None,
            duplicate_param: None,
        }
    }

    /// Set the number of reject-and-refit iterations (default 2).
    pub fn iterations(mut self, iterations: usize) -> Self {
        if self.iterations.is_some() {
            self.duplicate_param = Some("iterations");
        }
        self.iterations = Some(iterations);
        self
    }

    /// Set the RMS multiple used as the rejection threshold (default 2.0).
    pub fn rejection_factor(mut self, factor: T) -> Self {
        if self.rejection_factor.is_some() {
            self.duplicate_param = Some("rejection_factor");
        }
        self.rejection_factor = Some(factor);
        self
    }

    /// Set the relative tolerance for detecting a singular `AᵀA`.
    ///
    /// The default is `max(1e-10, 1024 * T::epsilon())`: `1e-10` for `f64`,
    /// about `1.2e-4` for `f32`.
    ///
    /// The test compares `|det|` against `n * Σx²`, so abscissae with a large
    /// common offset relative to their spread are reported as singular even
    /// when the determinant is exact. With `x = 1e6 + [0, 1, ..., 7]` the
    /// determinant is 336 against a scale of about `6.4e13`, a ratio of
    /// `5e-12` that falls below the `f64` default. Center `x` (for example
    /// subtract the first timestamp) before fitting, or pass `0.0` to reject
    /// only an exactly zero determinant.
    pub fn singular_tolerance(mut self, tol: T) -> Self {
        if self.singular_tolerance.is_some() {
            self.duplicate_param = Some("singular_tolerance");
        }
        self.singular_tolerance = Some(tol);
        self
    }

    /// Stop before the iteration limit once an iteration rejects nothing.
    pub fn stop_when_stable(mut self) -> Self {
        if self.stop_when_stable.is_some() {
            self.duplicate_param = Some("stop_when_stable");
        }
        self.stop_when_stable = Some(true);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<LeastSquaresModel<T>, LsqError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let defaults = RefinementConfig::<T>::default();
        let config = RefinementConfig {
            iterations: self.iterations.unwrap_or(defaults.iterations),
            rejection_factor: self.rejection_factor.unwrap_or(defaults.rejection_factor),
            singular_tolerance: self
                .singular_tolerance
                .unwrap_or(defaults.singular_tolerance),
            stop_when_stable: self.stop_when_stable.unwrap_or(defaults.stop_when_stable),
        };

        Validator::validate_iterations(config.iterations)?;
        Validator::validate_rejection_factor(config.rejection_factor)?;
        Validator::validate_tolerance(config.singular_tolerance)?;

        Ok(LeastSquaresModel {
            executor: RefinementExecutor::new(config),
        })
    }
}

// ============================================================================
// Model
// ============================================================================

/// A validated least-squares refinement, ready to fit data.
#[derive(Debug, Clone)]
pub struct LeastSquaresModel<T> {
    executor: RefinementExecutor<T>,
}

impl<T: Float> LeastSquaresModel<T> {
    /// Configuration the model was built with.
    pub fn config(&self) -> &RefinementConfig<T> {
        self.executor.config()
    }

    /// Fit `y = alpha + beta * x` with iterative outlier rejection.
    pub fn fit(&self, x: &[T], y: &[T]) -> Result<LsqResult<T>, LsqError> {
        Validator::validate_inputs(x, y, MIN_REFINE_POINTS)?;
        self.executor.run(x, y)
    }
}
