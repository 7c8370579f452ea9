//! Vallado Example 10-2: Linear Least Squares with Outlier Rejection
//!
//! Same abscissae as Example 10-1, but the seventh observation is moved
//! from 4 to 7. The first pass flags it (|r| = 1.51 > 2 * 0.695) and the
//! second pass refits the remaining seven points.
//!
//! Set `RUST_LOG=lsqfit=debug` to see which observations are dropped as
//! the loop runs.

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
    println!("Example 10-2: Linear Least Squares with Outlier Rejection");
    println!("{}", "=".repeat(60));
    println!();

    let x = vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
    let y = vec![1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 7.0, 6.0];

    let model = LeastSquares::new()
        .iterations(2)
        .rejection_factor(2.0)
        .build()?;

    let result = model.fit(&x, &y)?;
    println!("{}", result);

    /* Expected Output:
    Summary:
      Observations: 8
      Retained:     7
      Iterations:   2

    ********* Loop #1 *********
    ATA matrix  8  36
                36  204
    ATb matrix  27  157
    ...
    RMS: 0.695436

    State:
    alpha -0.428571 +/- 0.579293
    beta  0.845238 +/- 0.114717

    ********* Loop #2 *********
    Dropping observation 6: (7, 7)
    ATA matrix  7  29
                29  155
    ATb matrix  20  108

    Calculated Y values
    0.590164 1.311475 2.032787 2.754098 3.475410 4.196721 5.639344

    Residual values
    0.409836 0.311475 0.032787 0.245902 0.475410 0.196721 0.360656

    RMS: 0.321005

    State:
    alpha -0.131148 +/- 0.276348
    beta  0.721311 +/- 0.058727
    */

    if let Some(line) = result.final_model() {
        println!("Prediction at x = 10: {:.6}", line.predict(10.0));
    }

    Ok(())
}

#[cfg(not(feature = "std"))]
fn main() {}
