//! RMS-threshold outlier rejection.
//!
//! ## Purpose
//!
//! This module removes observations whose residual magnitude exceeds a fixed
//! multiple of the RMS residual, before the next refit.
//!
//! ## Design notes
//!
//! * **Pure**: The pass is a function of (observations, residuals, threshold).
//! * **Single pass**: Retained and dropped observations are split in one sweep.
//! * **Order preserving**: Retained observations keep their relative order.
//!
//! ## Key concepts
//!
//! * An observation is dropped iff `|r_i| > threshold` (strict). A residual
//!   exactly on the threshold is kept.
//! * With all-zero residuals and a zero threshold nothing is dropped, which is
//!   how the first refinement iteration passes through unchanged.
//!
//! ## Non-goals
//!
//! * This module does not compute residuals or RMS.
//! * This module does not downweight points; rejection is all-or-nothing.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;
use crate::primitives::observations::{Observation, ObservationSet};

// ============================================================================
// Types
// ============================================================================

/// An observation removed by the rejection pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rejected<T> {
    /// The dropped observation.
    pub observation: Observation<T>,

    /// Residual that exceeded the threshold.
    pub residual: T,
}

/// Result of one rejection pass.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectionOutcome<T> {
    /// Observations that passed the threshold.
    pub retained: ObservationSet<T>,

    /// Observations removed, in original order.
    pub dropped: Vec<Rejected<T>>,
}

// ============================================================================
// Rejection
// ============================================================================

/// Threshold `factor * rms`.
#[inline]
pub fn rejection_threshold<T: Float>(rms: T, factor: T) -> T {
    factor * rms
}

/// Split `observations` into retained and dropped by `|residual| > threshold`.
///
/// # Errors
///
/// * `ShapeMismatch` if there is not exactly one residual per observation.
pub fn reject_outliers<T: Float>(
    observations: &ObservationSet<T>,
    residuals: &[T],
    threshold: T,
) -> Result<RejectionOutcome<T>, LsqError> {
    if residuals.len() != observations.len() {
        return Err(LsqError::ShapeMismatch {
            expected: (observations.len(), 1),
            got: (residuals.len(), 1),
        });
    }

    let mut retained = ObservationSet::with_capacity(observations.len());
    let mut dropped = Vec::new();

    for (observation, &residual) in observations.iter().zip(residuals.iter()) {
        if residual.abs() > threshold {
            dropped.push(Rejected {
                observation,
                residual,
            });
        } else {
            retained.push(observation);
        }
    }

    Ok(RejectionOutcome { retained, dropped })
}
