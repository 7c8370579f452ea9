//! Tests for the dense matrix and observation containers.
//!
//! ## Test Organization
//!
//! 1. **Matrix** - Construction, shape checks, products
//! 2. **Observations** - Pairing, indexing, iteration

use lsqfit::internals::primitives::errors::LsqError;
use lsqfit::internals::primitives::matrix::Matrix;
use lsqfit::internals::primitives::observations::{Observation, ObservationSet};

// ============================================================================
// Matrix Tests
// ============================================================================

/// Test row-major construction and indexing.
#[test]
fn test_matrix_construction() {
    let m = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);

    assert_eq!(m.shape(), (2, 3));
    assert_eq!(m.rows(), 2);
    assert_eq!(m.cols(), 3);
    assert_eq!(m[(1, 0)], 4.0);
    assert_eq!(m.row(1), &[4.0, 5.0, 6.0]);
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    assert_eq!(m.diagonal(), vec![1.0, 5.0]);

    let v = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    assert_eq!(v, m);
}

/// Test from_vec rejects data of the wrong length.
#[test]
fn test_matrix_from_vec_wrong_length() {
    let res = Matrix::from_vec(2, 2, vec![1.0f64, 2.0, 3.0]);
    assert!(matches!(
        res,
        Err(LsqError::ShapeMismatch {
            expected: (2, 2),
            got: (3, 1)
        })
    ));
}

/// Test shape enforcement.
#[test]
fn test_matrix_ensure_shape() {
    let m = Matrix::<f64>::zeros(2, 2);
    assert!(m.ensure_shape(2, 2).is_ok());
    assert!(matches!(
        m.ensure_shape(3, 1),
        Err(LsqError::ShapeMismatch {
            expected: (3, 1),
            got: (2, 2)
        })
    ));
}

/// Test the matrix product against known values.
#[test]
fn test_matrix_matmul() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[0.0, 1.0], [1.0, 0.0]]);

    let ab = a.matmul(&b).unwrap();
    assert_eq!(ab, Matrix::from_rows(&[[2.0, 1.0], [4.0, 3.0]]));
    assert_eq!(a.matmul(&Matrix::identity(2)).unwrap(), a);

    let c = Matrix::<f64>::zeros(3, 1);
    assert!(matches!(a.matmul(&c), Err(LsqError::ShapeMismatch { .. })));
}

/// Test elementwise comparison.
#[test]
fn test_matrix_max_abs_diff() {
    let a = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    let b = Matrix::from_rows(&[[1.0, 2.5], [2.0, 4.0]]);

    assert_eq!(a.max_abs_diff(&b), Some(1.0));
    assert_eq!(a.max_abs_diff(&Matrix::zeros(2, 3)), None);
}

// ============================================================================
// Observation Tests
// ============================================================================

/// Test pairing assigns original indices.
#[test]
fn test_observation_set_new() {
    let set = ObservationSet::new(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();

    assert_eq!(set.len(), 3);
    assert!(!set.is_empty());
    assert_eq!(set.indices(), &[0, 1, 2]);
    assert_eq!(
        set.get(1),
        Some(Observation {
            index: 1,
            x: 2.0,
            y: 5.0
        })
    );
    assert_eq!(set.get(3), None);
}

/// Test mismatched sequences are rejected.
#[test]
fn test_observation_set_mismatched() {
    let res = ObservationSet::new(&[1.0, 2.0], &[1.0]);
    assert!(matches!(
        res,
        Err(LsqError::MismatchedInputs { x_len: 2, y_len: 1 })
    ));
}

/// Test pushing preserves the caller's indices.
#[test]
fn test_observation_set_push() {
    let mut set = ObservationSet::with_capacity(2);
    assert!(set.is_empty());

    set.push(Observation {
        index: 3,
        x: 1.0,
        y: 2.0,
    });
    set.push(Observation {
        index: 7,
        x: 3.0,
        y: 4.0,
    });

    assert_eq!(set.indices(), &[3, 7]);
    assert_eq!(set.x(), &[1.0, 3.0]);
    assert_eq!(set.y(), &[2.0, 4.0]);

    let collected: Vec<usize> = set.iter().map(|o| o.index).collect();
    assert_eq!(collected, vec![3, 7]);
}
