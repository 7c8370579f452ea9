//! Output types for least-squares refinement.
//!
//! ## Purpose
//!
//! This module defines the per-iteration report and the overall result of a
//! refinement run, together with the console listing produced by `Display`.
//!
//! ## Design notes
//!
//! * **Complete**: Each report carries everything computed in its iteration.
//! * **Generics**: Results are generic over `Float` types.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * `observations`, `predicted`, and `residuals` of a report have equal length.
//! * Reports are ordered by iteration number, starting at 1.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations beyond trivial accessors.
//! * This module does not provide serialization.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use num_traits::Float;

// Internal dependencies
use crate::algorithms::model::LinearModel;
use crate::algorithms::normal_equations::NormalEquations;
use crate::algorithms::rejection::Rejected;
use crate::evaluation::uncertainty::Uncertainty;
use crate::primitives::matrix::Matrix;
use crate::primitives::observations::ObservationSet;

// ============================================================================
// Iteration Report
// ============================================================================

/// Everything computed in one refinement iteration.
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport<T> {
    /// Iteration number, starting at 1.
    pub iteration: usize,

    /// Observations removed before this iteration's fit.
    pub dropped: Vec<Rejected<T>>,

    /// Observations the fit was computed on.
    pub observations: ObservationSet<T>,

    /// `AᵀA` and `Aᵀb` for the retained observations.
    pub normal_equations: NormalEquations<T>,

    /// Unweighted covariance `(AᵀA)⁻¹`.
    pub covariance: Matrix<T>,

    /// Fitted model.
    pub model: LinearModel<T>,

    /// Propagated `y` values.
    pub predicted: Vec<T>,

    /// Signed residuals (observed - predicted).
    pub residuals: Vec<T>,

    /// RMS of `residuals`.
    pub rms: T,

    /// Observational sigma and parameter standard deviations.
    pub uncertainty: Uncertainty<T>,
}

impl<T: Float> IterationReport<T> {
    /// Number of observations used in the fit.
    pub fn n(&self) -> usize {
        self.observations.len()
    }

    /// State vector `[alpha, beta]`.
    pub fn state(&self) -> [T; 2] {
        self.model.state()
    }

    /// Residual magnitudes.
    pub fn abs_residuals(&self) -> Vec<T> {
        self.residuals.iter().map(|r| r.abs()).collect()
    }
}

impl<T: Float + Display> Display for IterationReport<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "********* Loop #{} *********", self.iteration)?;

        for d in &self.dropped {
            writeln!(
                f,
                "Dropping observation {}: ({}, {})",
                d.observation.index, d.observation.x, d.observation.y
            )?;
        }

        let ata = &self.normal_equations.ata;
        let atb = &self.normal_equations.atb;
        writeln!(f, "ATA matrix  {}  {}", ata[(0, 0)], ata[(0, 1)])?;
        writeln!(f, "            {}  {}", ata[(1, 0)], ata[(1, 1)])?;
        writeln!(f, "ATb matrix  {}  {}", atb[0], atb[1])?;

        writeln!(f)?;
        writeln!(f, "Calculated Y values")?;
        for v in &self.predicted {
            write!(f, "{:.6} ", v)?;
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "Residual values")?;
        for v in self.abs_residuals() {
            write!(f, "{:.6} ", v)?;
        }
        writeln!(f)?;

        writeln!(f)?;
        writeln!(f, "RMS: {:.6}", self.rms)?;

        writeln!(f)?;
        writeln!(f, "State:")?;
        writeln!(
            f,
            "alpha {:.6} +/- {:.6}",
            self.model.alpha, self.uncertainty.sigma_alpha
        )?;
        writeln!(
            f,
            "beta  {:.6} +/- {:.6}",
            self.model.beta, self.uncertainty.sigma_beta
        )
    }
}

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a refinement run.
#[derive(Debug, Clone, PartialEq)]
pub struct LsqResult<T> {
    /// One report per completed iteration.
    pub iterations: Vec<IterationReport<T>>,

    /// Whether the run stopped early because an iteration dropped nothing.
    pub converged: bool,
}

impl<T: Float> LsqResult<T> {
    /// Number of iterations performed.
    pub fn iterations_used(&self) -> usize {
        self.iterations.len()
    }

    /// Report of the last iteration.
    pub fn final_report(&self) -> Option<&IterationReport<T>> {
        self.iterations.last()
    }

    /// Model fitted in the last iteration.
    pub fn final_model(&self) -> Option<LinearModel<T>> {
        self.final_report().map(|r| r.model)
    }

    /// Observations used by the last fit.
    pub fn retained(&self) -> Option<&ObservationSet<T>> {
        self.final_report().map(|r| &r.observations)
    }

    /// Every observation dropped during the run, in the order they were dropped.
    pub fn dropped(&self) -> impl Iterator<Item = &Rejected<T>> {
        self.iterations.iter().flat_map(|r| r.dropped.iter())
    }
}

impl<T: Float + Display> Display for LsqResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Summary:")?;
        if let Some(first) = self.iterations.first() {
            writeln!(f, "  Observations: {}", first.n())?;
        }
        if let Some(last) = self.final_report() {
            writeln!(f, "  Retained:     {}", last.n())?;
        }
        writeln!(f, "  Iterations:   {}", self.iterations_used())?;
        if self.converged {
            writeln!(f, "  Stopped:      no further rejections")?;
        }

        for report in &self.iterations {
            writeln!(f)?;
            write!(f, "{}", report)?;
        }

        Ok(())
    }
}
