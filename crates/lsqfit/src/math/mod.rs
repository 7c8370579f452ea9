//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure numerical functions:
//! - 2x2 determinant and closed-form inverse
//! - Matrix-vector products
//! - Residual dispersion statistics (RMS, observational sigma)
//!
//! These are reusable building blocks with no knowledge of the refinement loop.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Small fixed-shape linear algebra.
pub mod linalg;

/// Residual statistics.
pub mod stats;
