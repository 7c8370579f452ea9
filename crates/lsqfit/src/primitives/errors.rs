//! Error types for least-squares operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building,
//! solving, and refining a linear least-squares fit.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (lengths, shapes, determinant).
//! * **Local**: Every error belongs to a single fit attempt; there is no retry policy.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty, mismatched, too short, or non-finite sequences.
//! 2. **Shape validation**: Matrix and vector dimensions at operation boundaries.
//! 3. **Numerical hazards**: Singular normal-equations matrices.
//! 4. **Refinement failures**: Outlier rejection leaving too few observations.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for least-squares operations.
#[derive(Debug, Clone, PartialEq)]
pub enum LsqError {
    /// Input sequences are empty.
    EmptyInput,

    /// `x` and `y` sequences must have the same number of elements.
    MismatchedInputs {
        /// Number of elements in the `x` sequence.
        x_len: usize,
        /// Number of elements in the `y` sequence.
        y_len: usize,
    },

    /// Number of observations is below the minimum for the requested operation.
    TooFewPoints {
        /// Number of observations provided.
        got: usize,
        /// Minimum required observations.
        min: usize,
    },

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Matrix or vector dimensions do not match what the operation requires.
    ///
    /// Shapes are `(rows, cols)`; vectors are reported as `(len, 1)`.
    ShapeMismatch {
        /// Shape required by the operation.
        expected: (usize, usize),
        /// Shape actually supplied.
        got: (usize, usize),
    },

    /// The matrix determinant is zero (or numerically indistinguishable from zero).
    SingularMatrix {
        /// Determinant that failed the singularity test.
        determinant: f64,
    },

    /// Outlier rejection left too few observations to estimate variance.
    InsufficientObservations {
        /// Refinement iteration (1-based) at which the failure occurred.
        iteration: usize,
        /// Observations remaining after rejection.
        remaining: usize,
        /// Minimum observations required.
        min: usize,
    },

    /// Refinement requires between 1 and 1000 iterations.
    InvalidIterations(usize),

    /// Rejection factor must be positive and finite.
    InvalidRejectionFactor(f64),

    /// Singularity tolerance must be non-negative and finite.
    InvalidTolerance(f64),

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for LsqError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequences are empty"),
            Self::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {x_len} points, y has {y_len}")
            }
            Self::TooFewPoints { got, min } => {
                write!(f, "Too few points: got {got}, need at least {min}")
            }
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::ShapeMismatch { expected, got } => {
                write!(
                    f,
                    "Shape mismatch: expected {}x{}, got {}x{}",
                    expected.0, expected.1, got.0, got.1
                )
            }
            Self::SingularMatrix { determinant } => {
                write!(f, "Singular matrix: determinant {determinant} is too close to zero")
            }
            Self::InsufficientObservations {
                iteration,
                remaining,
                min,
            } => {
                write!(
                    f,
                    "Insufficient observations at iteration {iteration}: {remaining} remain after rejection, need at least {min}"
                )
            }
            Self::InvalidIterations(iter) => {
                write!(f, "Invalid iterations: {iter} (must be in [1, 1000])")
            }
            Self::InvalidRejectionFactor(k) => {
                write!(f, "Invalid rejection factor: {k} (must be > 0 and finite)")
            }
            Self::InvalidTolerance(tol) => {
                write!(f, "Invalid tolerance: {tol} (must be >= 0 and finite)")
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for LsqError {}
