//! Dense matrix storage with explicit shapes.
//!
//! ## Purpose
//!
//! This module provides a small owned, row-major matrix type used for the
//! normal-equations matrix and its inverse. Dimensions travel with the data so
//! that operations can check shapes at their boundary instead of assuming them.
//!
//! ## Design notes
//!
//! * **Owned**: Storage is a single `Vec<T>` plus `(rows, cols)`.
//! * **Checked**: Constructors and products return `ShapeMismatch` on bad dimensions.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Non-goals
//!
//! * This module does not implement decompositions or general inverses.
//! * This module does not aim to be a general linear-algebra engine.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Index, IndexMut};
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::LsqError;

// ============================================================================
// Matrix
// ============================================================================

/// Owned row-major dense matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Float> Matrix<T> {
    // ========================================================================
    // Constructors
    // ========================================================================

    /// Create a `rows x cols` matrix filled with zeros.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::zero(); rows * cols],
        }
    }

    /// Create an `n x n` identity matrix.
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m[(i, i)] = T::one();
        }
        m
    }

    /// Wrap row-major `data` as a `rows x cols` matrix.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self, LsqError> {
        if data.len() != rows * cols {
            return Err(LsqError::ShapeMismatch {
                expected: (rows, cols),
                got: (data.len(), 1),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a matrix from fixed-width rows.
    pub fn from_rows<const C: usize>(rows: &[[T; C]]) -> Self {
        let mut data = Vec::with_capacity(rows.len() * C);
        for row in rows {
            data.extend_from_slice(row);
        }
        Self {
            rows: rows.len(),
            cols: C,
            data,
        }
    }

    // ========================================================================
    // Shape Queries
    // ========================================================================

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Fail with `ShapeMismatch` unless the matrix is exactly `rows x cols`.
    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<(), LsqError> {
        if self.shape() != (rows, cols) {
            return Err(LsqError::ShapeMismatch {
                expected: (rows, cols),
                got: self.shape(),
            });
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Row-major view of the underlying storage.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Borrow row `r`.
    pub fn row(&self, r: usize) -> &[T] {
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Main diagonal entries.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self[(i, i)])
            .collect()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// Matrix product `self * other`.
    pub fn matmul(&self, other: &Matrix<T>) -> Result<Matrix<T>, LsqError> {
        if self.cols != other.rows {
            return Err(LsqError::ShapeMismatch {
                expected: (self.cols, other.cols),
                got: other.shape(),
            });
        }

        let mut out = Matrix::zeros(self.rows, other.cols);
        for r in 0..self.rows {
            for c in 0..other.cols {
                let mut acc = T::zero();
                for k in 0..self.cols {
                    acc = acc + self[(r, k)] * other[(k, c)];
                }
                out[(r, c)] = acc;
            }
        }
        Ok(out)
    }

    /// Largest absolute elementwise difference to `other`, or `None` on shape mismatch.
    pub fn max_abs_diff(&self, other: &Matrix<T>) -> Option<T> {
        if self.shape() != other.shape() {
            return None;
        }
        Some(
            self.data
                .iter()
                .zip(other.data.iter())
                .fold(T::zero(), |acc, (&a, &b)| acc.max((a - b).abs())),
        )
    }
}

// ============================================================================
// Indexing
// ============================================================================

impl<T> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        debug_assert!(r < self.rows && c < self.cols, "Matrix index out of bounds");
        &self.data[r * self.cols + c]
    }
}

impl<T> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        debug_assert!(r < self.rows && c < self.cols, "Matrix index out of bounds");
        &mut self.data[r * self.cols + c]
    }
}
