//! Paired observation storage.
//!
//! ## Purpose
//!
//! This module holds the `(x, y)` observation pairs being fitted, together
//! with the position each pair had in the caller's original input. Outlier
//! rejection shrinks the set between iterations; the original index lets
//! reports name dropped points the way the caller numbered them.
//!
//! ## Invariants
//!
//! * `x`, `y`, and `index` always have the same length.
//! * Original indices are strictly increasing (rejection preserves order).

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
// Observation
// ============================================================================

/// A single `(x, y)` observation and its position in the original input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation<T> {
    /// Index of this observation in the caller's input sequences.
    pub index: usize,

    /// Independent variable.
    pub x: T,

    /// Observed dependent variable.
    pub y: T,
}

// ============================================================================
// Observation Set
// ============================================================================

/// Ordered, index-paired observation sequences.
#[derive(Debug, Clone, PartialEq)]
pub struct ObservationSet<T> {
    x: Vec<T>,
    y: Vec<T>,
    index: Vec<usize>,
}

impl<T: Float> ObservationSet<T> {
    /// Pair `x` and `y` by position.
    pub fn new(x: &[T], y: &[T]) -> Result<Self, LsqError> {
        if x.len() != y.len() {
            return Err(LsqError::MismatchedInputs {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self {
            x: x.to_vec(),
            y: y.to_vec(),
            index: (0..x.len()).collect(),
        })
    }

    /// Empty set with room for `n` observations.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            index: Vec::with_capacity(n),
        }
    }

    /// Append one observation.
    pub fn push(&mut self, obs: Observation<T>) {
        debug_assert!(
            self.index.last().is_none_or(|&last| last < obs.index),
            "observations must stay in original order"
        );
        self.x.push(obs.x);
        self.y.push(obs.y);
        self.index.push(obs.index);
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Whether the set holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Independent variable values.
    pub fn x(&self) -> &[T] {
        &self.x
    }

    /// Observed dependent variable values.
    pub fn y(&self) -> &[T] {
        &self.y
    }

    /// Original input positions.
    pub fn indices(&self) -> &[usize] {
        &self.index
    }

    /// Observation at position `i` of the current set.
    pub fn get(&self, i: usize) -> Option<Observation<T>> {
        if i >= self.len() {
            return None;
        }
        Some(Observation {
            index: self.index[i],
            x: self.x[i],
            y: self.y[i],
        })
    }

    /// Iterate over the observations in order.
    pub fn iter(&self) -> impl Iterator<Item = Observation<T>> + '_ {
        self.index
            .iter()
            .zip(self.x.iter().zip(self.y.iter()))
            .map(|(&index, (&x, &y))| Observation { index, x, y })
    }
}
