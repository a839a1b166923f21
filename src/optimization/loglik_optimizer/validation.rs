//! Validation helpers for log-likelihood optimization.
//!
//! This module centralizes common consistency checks used across the
//! optimizer interface:
//!
//! - **Tolerance checks**: [`verify_tol_grad`], [`verify_tol_cost`] ensure
//!   numeric tolerances are finite and strictly positive when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks log-likelihood outputs
//!   for finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`OptError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{Grad, Theta},
};

/// Validate the optional gradient-norm tolerance.
///
/// - Accepts `None` (no stopping rule on gradient).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance (for convergence).
///
/// - Accepts `None` (no stopping rule on cost change).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`OptError::InvalidTolCost`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_cost(tol: Option<f64>) -> OptResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(OptError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`OptError::GradientDimMismatch`] if length does not match `dim`.
/// - [`OptError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> OptResult<()> {
    if grad.len() != dim {
        return Err(OptError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Returns
/// The owned `Theta` if valid.
///
/// # Errors
/// - [`OptError::MissingThetaHat`] if no vector was provided.
/// - [`OptError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> OptResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(OptError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(OptError::MissingThetaHat),
    }
}

/// Validate that a scalar log-likelihood value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`OptError::NonFiniteCost`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> OptResult<()> {
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Acceptance/rejection rules of the tolerance verifiers.
    // - Dimension and finiteness rules of `validate_grad`.
    // - Presence and finiteness rules of `validate_theta_hat`.
    //
    // They intentionally DO NOT cover:
    // - Solver construction or execution (covered in builders/run tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the three verdicts of `verify_tol_grad`: pass, non-finite,
    // and non-positive.
    //
    // Given
    // -----
    // - `None`, `Some(1e-8)`, `Some(f64::NAN)`, `Some(0.0)`.
    //
    // Expect
    // ------
    // - `Ok` for the first two, `InvalidTolGrad` for the last two.
    fn verify_tol_grad_accepts_and_rejects() {
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_grad(Some(1e-8)).is_ok());
        assert!(matches!(verify_tol_grad(Some(f64::NAN)), Err(OptError::InvalidTolGrad { .. })));
        assert!(matches!(verify_tol_grad(Some(0.0)), Err(OptError::InvalidTolGrad { .. })));
    }

    #[test]
    // Purpose
    // -------
    // Verify that `validate_grad` rejects a wrong-length gradient and a
    // gradient containing NaN, and accepts a clean one.
    //
    // Given
    // -----
    // - Gradients of length 2 and 3 against an expected dimension of 3.
    //
    // Expect
    // ------
    // - `GradientDimMismatch`, `InvalidGradient`, and `Ok` respectively.
    fn validate_grad_enforces_shape_and_finiteness() {
        let short = array![1.0, 2.0];
        let with_nan = array![1.0, f64::NAN, 3.0];
        let clean = array![1.0, 2.0, 3.0];

        assert!(matches!(
            validate_grad(&short, 3),
            Err(OptError::GradientDimMismatch { expected: 3, found: 2 })
        ));
        assert!(matches!(
            validate_grad(&with_nan, 3),
            Err(OptError::InvalidGradient { index: 1, .. })
        ));
        assert!(validate_grad(&clean, 3).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Verify that `validate_theta_hat` unwraps a finite vector and rejects
    // a missing or non-finite one.
    //
    // Given
    // -----
    // - `None`, a vector with `inf`, and a finite vector.
    //
    // Expect
    // ------
    // - `MissingThetaHat`, `InvalidThetaHat`, and the owned vector.
    fn validate_theta_hat_checks_presence_and_finiteness() {
        assert!(matches!(validate_theta_hat(None), Err(OptError::MissingThetaHat)));
        assert!(matches!(
            validate_theta_hat(Some(array![0.0, f64::INFINITY])),
            Err(OptError::InvalidThetaHat { index: 1, .. })
        ));
        let theta = validate_theta_hat(Some(array![0.5, 1.5])).expect("finite vector accepted");
        assert_eq!(theta, array![0.5, 1.5]);
    }
}
