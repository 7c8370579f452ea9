//! Layer 5: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the fit by coordinating the algorithms layer
//! (normal equations, propagation, rejection) with evaluation. It owns the
//! refinement loop and its stopping rules.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine ← You are here
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Refinement execution engine.
pub mod executor;

/// Validation utilities.
pub mod validator;

/// Output types for refinement runs.
pub mod output;
