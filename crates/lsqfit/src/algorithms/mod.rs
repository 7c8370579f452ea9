//! Layer 3: Algorithms
//!
//! This layer implements the least-squares building blocks: normal-equations
//! assembly and solution, straight-line propagation and residuals, and the
//! RMS-threshold rejection pass. It is orchestrated by the engine layer.

// Normal-equations assembly and solution.
pub mod normal_equations;

// Straight-line model propagation and residuals.
pub mod model;

// Outlier rejection between refits.
pub mod rejection;
