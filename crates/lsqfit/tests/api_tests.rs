//! Tests for the high-level builder API and result formatting.
//!
//! ## Test Organization
//!
//! 1. **Builder** - Defaults, overrides, validation, duplicates
//! 2. **Fitting** - End-to-end through the public API
//! 3. **Display** - Console listing

use approx::assert_relative_eq;

use lsqfit::prelude::*;

// ============================================================================
// Helper Functions
// ============================================================================

fn example_10_2() -> (Vec<f64>, Vec<f64>) {
    (
        vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0],
        vec![1.0, 1.0, 2.0, 3.0, 3.0, 4.0, 7.0, 6.0],
    )
}

// ============================================================================
// Builder Tests
// ============================================================================

/// Test default configuration.
#[test]
fn test_builder_defaults() {
    let model = LeastSquares::<f64>::new().build().unwrap();
    let config = model.config();

    assert_eq!(config.iterations, 2);
    assert_eq!(config.rejection_factor, 2.0);
    assert_eq!(config.singular_tolerance, 1e-10);
    assert!(!config.stop_when_stable);
}

/// Test configured values are carried into the model.
#[test]
fn test_builder_overrides() {
    let model = LeastSquares::new()
        .iterations(5)
        .rejection_factor(3.0)
        .singular_tolerance(1e-8)
        .stop_when_stable()
        .build()
        .unwrap();
    let config = model.config();

    assert_eq!(config.iterations, 5);
    assert_eq!(config.rejection_factor, 3.0);
    assert_eq!(config.singular_tolerance, 1e-8);
    assert!(config.stop_when_stable);
}

/// Test invalid parameters are rejected at build time.
#[test]
fn test_builder_invalid_parameters() {
    assert!(matches!(
        LeastSquares::<f64>::new().iterations(0).build(),
        Err(LsqError::InvalidIterations(0))
    ));
    assert!(matches!(
        LeastSquares::new().rejection_factor(-2.0).build(),
        Err(LsqError::InvalidRejectionFactor(_))
    ));
    assert!(matches!(
        LeastSquares::new().singular_tolerance(f64::NAN).build(),
        Err(LsqError::InvalidTolerance(_))
    ));
}

/// Test setting a parameter twice is an error.
#[test]
fn test_builder_duplicate_parameter() {
    let res = LeastSquares::<f64>::new().iterations(2).iterations(3).build();
    assert!(matches!(
        res,
        Err(LsqError::DuplicateParameter {
            parameter: "iterations"
        })
    ));

    let res = LeastSquares::<f64>::new()
        .stop_when_stable()
        .stop_when_stable()
        .build();
    assert!(matches!(res, Err(LsqError::DuplicateParameter { .. })));
}

// ============================================================================
// Fitting Tests
// ============================================================================

/// Test the Example 10-2 workflow through the public API.
#[test]
fn test_fit_example_10_2() {
    let (x, y) = example_10_2();
    let result = LeastSquares::new().build().unwrap().fit(&x, &y).unwrap();

    let dropped: Vec<&Rejected<f64>> = result.dropped().collect();
    assert_eq!(dropped.len(), 1);
    assert_eq!(dropped[0].observation.index, 6);

    let model = result.final_model().unwrap();
    assert_relative_eq!(model.alpha, -0.131148, epsilon = 1e-6);
    assert_relative_eq!(model.beta, 0.721311, epsilon = 1e-6);
    assert_eq!(result.retained().unwrap().len(), 7);
}

/// Test the fitted model predicts at new abscissae.
#[test]
fn test_fit_predict() {
    let (x, y) = example_10_2();
    let result = LeastSquares::new().build().unwrap().fit(&x, &y).unwrap();
    let model = result.final_model().unwrap();

    assert_relative_eq!(model.predict(0.0), model.alpha, epsilon = 1e-15);
    assert_relative_eq!(
        model.predict(10.0),
        model.alpha + 10.0 * model.beta,
        epsilon = 1e-12
    );
}

/// Test inputs are validated before fitting.
#[test]
fn test_fit_validates_inputs() {
    let model = LeastSquares::<f64>::new().build().unwrap();

    assert!(matches!(model.fit(&[], &[]), Err(LsqError::EmptyInput)));
    assert!(matches!(
        model.fit(&[1.0, 2.0, 3.0], &[1.0, 2.0]),
        Err(LsqError::MismatchedInputs { .. })
    ));
    assert!(matches!(
        model.fit(&[1.0, 2.0], &[1.0, 2.0]),
        Err(LsqError::TooFewPoints { got: 2, min: 3 })
    ));
    assert!(matches!(
        model.fit(&[1.0, 2.0, f64::NAN], &[1.0, 2.0, 3.0]),
        Err(LsqError::InvalidNumericValue(_))
    ));
}

/// Test a singular design surfaces as an error rather than NaN.
#[test]
fn test_fit_singular() {
    let model = LeastSquares::<f64>::new().build().unwrap();
    let res = model.fit(&[1.5, 1.5, 1.5, 1.5], &[0.0, 1.0, 2.0, 3.0]);

    assert!(matches!(res, Err(LsqError::SingularMatrix { .. })));
}

/// Test identical f32 abscissae surface as SingularMatrix with the defaults.
#[test]
fn test_fit_f32_identical_x_is_singular() {
    let model = LeastSquares::<f32>::new().build().unwrap();

    for (c, n) in [(0.1f32, 11usize), (0.3, 7), (0.7, 11), (123.456, 11)] {
        let x = vec![c; n];
        let y: Vec<f32> = (0..n).map(|i| i as f32).collect();
        let res = model.fit(&x, &y);

        assert!(
            matches!(res, Err(LsqError::SingularMatrix { .. })),
            "x = {} repeated {} times should be singular, got {:?}",
            c,
            n,
            res
        );
    }
}

/// Test the Example 10-2 workflow still succeeds in f32 with the defaults.
#[test]
fn test_fit_f32_example_10_2() {
    let x: Vec<f32> = (1..=8).map(|v| v as f32).collect();
    let y = vec![1.0f32, 1.0, 2.0, 3.0, 3.0, 4.0, 7.0, 6.0];
    let result = LeastSquares::new().build().unwrap().fit(&x, &y).unwrap();

    assert_eq!(result.dropped().next().unwrap().observation.index, 6);
    let model = result.final_model().unwrap();
    assert_relative_eq!(model.beta, 44.0f32 / 61.0, epsilon = 1e-4);
}

/// Test a large common offset in x trips the relative test unless disabled.
#[test]
fn test_fit_large_offset_needs_zero_tolerance() {
    let (x, y) = example_10_2();
    let shifted: Vec<f64> = x.iter().map(|v| 1e6 + v).collect();

    let default = LeastSquares::new().build().unwrap().fit(&shifted, &y);
    assert!(matches!(default, Err(LsqError::SingularMatrix { .. })));

    let result = LeastSquares::new()
        .singular_tolerance(0.0)
        .build()
        .unwrap()
        .fit(&shifted, &y)
        .unwrap();
    assert_eq!(result.dropped().next().unwrap().observation.index, 6);
    assert_relative_eq!(result.final_model().unwrap().beta, 44.0 / 61.0, epsilon = 1e-4);
}

/// Test the model can be reused across datasets.
#[test]
fn test_model_reuse() {
    let model = LeastSquares::new().iterations(1).build().unwrap();

    let a = model.fit(&[0.0, 1.0, 2.0], &[0.0, 1.0, 2.0]).unwrap();
    let b = model.fit(&[0.0, 1.0, 2.0], &[1.0, 1.0, 1.0]).unwrap();

    assert_relative_eq!(a.final_model().unwrap().beta, 1.0, epsilon = 1e-12);
    assert_relative_eq!(b.final_model().unwrap().beta, 0.0, epsilon = 1e-12);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the iteration listing contains the textbook sections.
#[test]
fn test_report_display() {
    let (x, y) = example_10_2();
    let result = LeastSquares::new().build().unwrap().fit(&x, &y).unwrap();
    let text = result.iterations[1].to_string();

    assert!(text.contains("********* Loop #2 *********"));
    assert!(text.contains("Dropping observation 6: (7, 7)"));
    assert!(text.contains("ATA matrix  7  29"));
    assert!(text.contains("ATb matrix  20  108"));
    assert!(text.contains("Calculated Y values"));
    assert!(text.contains("Residual values"));
    assert!(text.contains("RMS: 0.321005"));
    assert!(text.contains("alpha -0.131148 +/- "));
    assert!(text.contains("beta  0.721311 +/- "));
}

/// Test residual listing is unsigned.
#[test]
fn test_abs_residuals() {
    let (x, y) = example_10_2();
    let result = LeastSquares::new().iterations(1).build().unwrap().fit(&x, &y).unwrap();
    let report = &result.iterations[0];

    for (a, r) in report.abs_residuals().iter().zip(report.residuals.iter()) {
        assert_eq!(*a, r.abs());
    }
}

/// Test the summary header.
#[test]
fn test_result_display_summary() {
    let (x, y) = example_10_2();
    let result = LeastSquares::new()
        .iterations(5)
        .stop_when_stable()
        .build()
        .unwrap()
        .fit(&x, &y)
        .unwrap();
    let text = result.to_string();

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Observations: 8"));
    assert!(text.contains("Retained:     7"));
    assert!(text.contains("Iterations:   3"));
    assert!(text.contains("no further rejections"));
}
