//! # lsqfit: Linear Least Squares with Iterative Outlier Rejection
//!
//! Ordinary least-squares estimation of the straight line `y = alpha + beta * x`
//! from paired observations, refined by repeatedly discarding observations
//! whose residual exceeds a multiple of the RMS residual and refitting.
//!
//! The method follows the linear least-squares examples of Vallado,
//! *Fundamentals of Astrodynamics and Applications*, chapter 10.
//!
//! ## Quick Start
//!
//! ```rust
//! use lsqfit::prelude::*;
//!
//! let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
//! let y = vec![1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 7.0, 6.0];
//!
//! let model = LeastSquares::new()
//!     .iterations(2)          // two reject-and-refit passes
//!     .rejection_factor(2.0)  // drop |r| > 2 * RMS of the previous pass
//!     .build()?;
//!
//! let result = model.fit(&x, &y)?;
//!
//! // The point at index 6 is rejected before the second fit.
//! assert_eq!(result.iterations[1].dropped[0].observation.index, 6);
//! println!("{}", result);
//! # Result::<(), LsqError>::Ok(())
//! ```
//!
//! ## How Refinement Works
//!
//! Each iteration:
//!
//! 1. Rejects observations with `|r_i| > k * RMS`, using the residuals and RMS
//!    of the *previous* iteration (all zero before the first).
//! 2. Builds the normal equations `AᵀA = [[n, Σx], [Σx, Σx²]]`, `Aᵀb = [Σy, Σxy]`.
//! 3. Inverts `AᵀA` in closed form and solves for `[alpha, beta]`.
//! 4. Propagates the model, computes residuals and their RMS.
//! 5. Scales the covariance diagonal by `sqrt(RMS² · n / (n - 1))` to obtain
//!    parameter uncertainties.
//!
//! ## Result and Error Handling
//!
//! `fit` returns `Result<LsqResult<T>, LsqError>`. A singular normal-equations
//! matrix (for example, all `x` equal) or a rejection pass that leaves fewer
//! than three observations aborts the run with a typed error:
//!
//! ```rust
//! use lsqfit::prelude::*;
//!
//! let model = LeastSquares::new().build()?;
//! let err = model.fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).unwrap_err();
//! assert!(matches!(err, LsqError::SingularMatrix { .. }));
//! # Result::<(), LsqError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Iteration progress and dropped observations are emitted as `tracing`
//! events at `debug` level; failures at `warn`. Install any `tracing`
//! subscriber to see them.
//!
//! ## no_std
//!
//! Disable default features to build without the standard library:
//!
//! ```toml
//! [dependencies]
//! lsqfit = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and errors.
mod primitives;

// Layer 2: Math - pure numerical functions.
mod math;

// Layer 3: Algorithms - normal equations, propagation, rejection.
mod algorithms;

// Layer 4: Evaluation - parameter uncertainties.
mod evaluation;

// Layer 5: Engine - refinement loop, validation, output.
mod engine;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        IterationReport, LeastSquaresModel, LinearModel, LsqBuilder as LeastSquares, LsqError,
        LsqResult, Matrix, Observation, ObservationSet, RefinementConfig, Rejected, Uncertainty,
    };
}

// Internal modules.
//
// Re-exports the layer modules so the individual operations (determinant,
// inverse, normal-equations builder, rejection pass, ...) can be used and
// tested on their own.
#[doc(hidden)]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
