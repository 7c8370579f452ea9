//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer turns a solved fit into quality measures: the observational
//! standard deviation and the resulting parameter uncertainties.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Parameter standard deviations.
pub mod uncertainty;
