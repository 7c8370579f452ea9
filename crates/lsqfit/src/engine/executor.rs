//! Execution engine for iterative least-squares refinement.
//!
//! ## Purpose
//!
//! This module runs the refinement state machine:
//!
//! ```text
//! REJECT → BUILD → INVERT → SOLVE → PROPAGATE → RESIDUALS → RMS → (REJECT | STOP)
//! ```
//!
//! Each iteration first rejects observations using the residuals and RMS of
//! the *previous* iteration, then refits on what remains.
//!
//! ## Design notes
//!
//! * The first iteration rejects against all-zero residuals and a zero RMS,
//!   so it always fits the full input.
//! * The threshold lags the fit by one iteration; it is never recomputed from
//!   the iteration's own residuals.
//! * Any failure aborts the run; there is no partial recovery.
//! * Generic over `Float` types to support f32 and f64.
//!
//! ## Invariants
//!
//! * Every fit uses at least [`MIN_REFINE_POINTS`] observations.
//! * The observation set only shrinks between iterations.
//!
//! ## Non-goals
//!
//! * This module does not validate raw input (handled by `validator`).
//! * This module does not format results (handled by `output`).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use tracing::{debug, warn};

// Internal dependencies
use crate::algorithms::model::residuals;
use crate::algorithms::normal_equations::NormalEquations;
use crate::algorithms::rejection::{reject_outliers, rejection_threshold};
use crate::engine::output::{IterationReport, LsqResult};
use crate::evaluation::uncertainty::Uncertainty;
use crate::math::linalg::default_singular_tolerance;
use crate::math::stats::rms;
use crate::primitives::errors::LsqError;
use crate::primitives::observations::ObservationSet;

/// Fewest observations a refinement fit may use (variance needs `n - 1 > 1`).
pub const MIN_REFINE_POINTS: usize = 3;

#[inline]
fn as_f64<T: Float>(v: T) -> f64 {
    v.to_f64().unwrap_or(f64::NAN)
}

// ============================================================================
// Configuration
// ============================================================================

/// Configuration for refinement execution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinementConfig<T> {
    /// Maximum number of fit iterations (at least 1).
    pub iterations: usize,

    /// Observations with `|r| > rejection_factor * rms_prev` are dropped.
    pub rejection_factor: T,

    /// Relative tolerance for the singular-matrix test.
    pub singular_tolerance: T,

    /// Stop early once an iteration after the first drops nothing.
    pub stop_when_stable: bool,
}

impl<T: Float> Default for RefinementConfig<T> {
    fn default() -> Self {
        Self {
            iterations: 2,
            rejection_factor: T::from(2.0).unwrap_or_else(|| T::one() + T::one()),
            singular_tolerance: default_singular_tolerance(),
            stop_when_stable: false,
        }
    }
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the reject-and-refit loop.
#[derive(Debug, Clone)]
pub struct RefinementExecutor<T> {
    config: RefinementConfig<T>,
}

impl<T: Float> Default for RefinementExecutor<T> {
    fn default() -> Self {
        Self::new(RefinementConfig::default())
    }
}

impl<T: Float> RefinementExecutor<T> {
    /// Create an executor from a configuration.
    pub fn new(config: RefinementConfig<T>) -> Self {
        Self { config }
    }

    /// Active configuration.
    pub fn config(&self) -> &RefinementConfig<T> {
        &self.config
    }

    /// Run the full refinement loop on `x` and `y`.
    pub fn run(&self, x: &[T], y: &[T]) -> Result<LsqResult<T>, LsqError> {
        let initial = ObservationSet::new(x, y)?;
        let zeros = vec![T::zero(); initial.len()];

        let mut reports: Vec<IterationReport<T>> = Vec::with_capacity(self.config.iterations);
        let mut converged = false;

        for iteration in 1..=self.config.iterations {
            let report = match reports.last() {
                Some(prev) => self.step(iteration, &prev.observations, &prev.residuals, prev.rms)?,
                None => self.step(iteration, &initial, &zeros, T::zero())?,
            };

            let stable = iteration > 1 && report.dropped.is_empty();
            reports.push(report);

            if self.config.stop_when_stable && stable {
                debug!(iteration, "no observations rejected, stopping");
                converged = true;
                break;
            }
        }

        Ok(LsqResult {
            iterations: reports,
            converged,
        })
    }

    /// Perform one iteration: reject with the previous residuals, then refit.
    ///
    /// `prev_residuals` must hold one residual per observation in
    /// `observations`; `prev_rms` is the RMS those residuals produced.
    pub fn step(
        &self,
        iteration: usize,
        observations: &ObservationSet<T>,
        prev_residuals: &[T],
        prev_rms: T,
    ) -> Result<IterationReport<T>, LsqError> {
        // REJECT
        let threshold = rejection_threshold(prev_rms, self.config.rejection_factor);
        let outcome = reject_outliers(observations, prev_residuals, threshold)?;
        for d in &outcome.dropped {
            debug!(
                iteration,
                index = d.observation.index,
                x = as_f64(d.observation.x),
                y = as_f64(d.observation.y),
                residual = as_f64(d.residual),
                "dropping observation"
            );
        }

        let retained = outcome.retained;
        let n = retained.len();
        if n < MIN_REFINE_POINTS {
            warn!(iteration, remaining = n, "too few observations after rejection");
            return Err(LsqError::InsufficientObservations {
                iteration,
                remaining: n,
                min: MIN_REFINE_POINTS,
            });
        }

        // BUILD, INVERT, SOLVE
        let normal_equations = NormalEquations::build(retained.x(), retained.y())?;
        let solution = normal_equations
            .solve(self.config.singular_tolerance)
            .inspect_err(|e| warn!(iteration, error = %e, "normal equations could not be solved"))?;

        // PROPAGATE, RESIDUALS, RMS
        let predicted = solution.model.propagate(retained.x());
        let residuals = residuals(retained.y(), &predicted)?;
        let rms = rms(&residuals);
        let uncertainty = Uncertainty::compute(&solution.covariance, rms, n)?;

        debug!(
            iteration,
            retained = n,
            dropped = outcome.dropped.len(),
            alpha = as_f64(solution.model.alpha),
            beta = as_f64(solution.model.beta),
            rms = as_f64(rms),
            "refit complete"
        );

        Ok(IterationReport {
            iteration,
            dropped: outcome.dropped,
            observations: retained,
            normal_equations,
            covariance: solution.covariance,
            model: solution.model,
            predicted,
            residuals,
            rms,
            uncertainty,
        })
    }
}
