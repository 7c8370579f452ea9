//! Vallado Example 10-1: Linear Least Squares
//!
//! Fits `y = alpha + beta * x` to eight clean observations. Two passes are
//! run; neither rejects anything, so both listings are identical.
//!
//! Set `RUST_LOG=lsqfit=debug` to see the per-iteration trace.

#[cfg(feature = "std")]
use lsqfit::prelude::*;
#[cfg(feature = "std")]
use tracing_subscriber::EnvFilter;

#[cfg(feature = "std")]
fn main() -> Result<(), LsqError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("{}", "=".repeat(60));
    println!("Example 10-1: Linear Least Squares");
    println!("{}", "=".repeat(60));
    println!();

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let y = vec![1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 4.0, 6.0];

    let result = LeastSquares::new().iterations(2).build()?.fit(&x, &y)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Observations: 8
      Retained:     8
      Iterations:   2

    ********* Loop #1 ********* (Loop #2 is identical)
    ATA matrix  8  36
                36  204
    ATb matrix  24  136

    Calculated Y values
    0.666667 1.333333 2.000000 2.666667 3.333333 4.000000 4.666667 5.333333

    Residual values
    0.333333 0.333333 0.000000 0.333333 0.333333 0.000000 0.666667 0.666667

    RMS: 0.408248

    State:
    alpha -0.000000 +/- 0.340068
    beta  0.666667 +/- 0.067344
    */

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
