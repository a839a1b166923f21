//! Fitted parameters and solve diagnostics.
//!
//! The mutable half of a fitted model, kept separate from the immutable
//! [`crate::nullmodel::core::degrees::DegreeStructure`]: the
//! maximum-likelihood parameter vector in both parametrizations
//! ([`UBCMParams`]), the normalized solve report ([`SolveDiagnostics`]),
//! and the derived status flags ([`ModelStatus`]).

use ndarray::{Array1, ArrayView1};

use crate::nullmodel::{
    core::{options::SolveMethod, validation::validate_transformed},
    errors::{ModelError, ModelResult},
};

/// Maximum-likelihood parameters of a fitted model, in both spaces.
///
/// Maintains the invariant `x == exp(-theta)` coordinatewise. `x` entries
/// are finite and non-negative; `theta` entries are never NaN but may be
/// `+∞` for zero-degree classes, whose transformed parameter is exactly
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct UBCMParams {
    theta: Array1<f64>,
    x: Array1<f64>,
}

impl UBCMParams {
    /// Build parameters from a θ-vector, deriving `x = exp(-θ)`.
    ///
    /// # Errors
    /// - [`ModelError::NonFiniteParameter`] if any θ entry is NaN or `-∞`
    ///   (which would transform to an infinite `x`).
    pub fn from_theta(theta: Array1<f64>) -> ModelResult<Self> {
        for (index, &value) in theta.iter().enumerate() {
            if value.is_nan() || value == f64::NEG_INFINITY {
                return Err(ModelError::NonFiniteParameter { index, value });
            }
        }
        let x = theta.mapv(|t| (-t).exp());
        Ok(Self { theta, x })
    }

    /// Build parameters from an x-vector, deriving `θ = -ln(x)`.
    ///
    /// Zero coordinates are admissible and transform to `θ = +∞`.
    ///
    /// # Errors
    /// - [`ModelError::InvalidTransformedParameter`] if any entry is
    ///   negative or non-finite.
    pub fn from_x(x: Array1<f64>) -> ModelResult<Self> {
        validate_transformed(x.view())?;
        let theta = x.mapv(|v| -v.ln());
        Ok(Self { theta, x })
    }

    /// Parameter vector θ, one entry per degree class.
    pub fn theta(&self) -> ArrayView1<'_, f64> {
        self.theta.view()
    }

    /// Transformed parameters `x = exp(-θ)`.
    pub fn x(&self) -> ArrayView1<'_, f64> {
        self.x.view()
    }
}

/// Normalized report of one solve, common to both methods.
///
/// - `method`: which iteration rule produced the parameters.
/// - `converged`: whether the residual/step norm reached tolerance within
///   the iteration cap. A `false` here is the non-fatal convergence
///   warning of the crate: the best iterate is still stored and usable.
/// - `iterations`: iterations performed.
/// - `residual_norm`: final gradient norm (Newton) or ∞-norm of the final
///   step (fixed point), when available.
/// - `status`: human-readable termination status.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveDiagnostics {
    pub method: SolveMethod,
    pub converged: bool,
    pub iterations: usize,
    pub residual_norm: Option<f64>,
    pub status: String,
}

/// Derived status flags of a model, mirroring which caches are populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelStatus {
    pub parameters_computed: bool,
    pub matrix_computed: bool,
    pub variance_computed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The θ/x correspondence in both construction directions.
    // - Admissibility of zero x-coordinates (infinite θ) and rejection of
    //   NaN/negative inputs.
    //
    // They intentionally DO NOT cover:
    // - How parameters are produced (solver tests) or consumed (matrix
    //   tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `from_theta` and `from_x` are mutually consistent.
    //
    // Given
    // -----
    // - θ = [0.5, -1.0, 2.0].
    //
    // Expect
    // ------
    // - `from_theta(θ).x == exp(-θ)` and `from_x(exp(-θ)).theta ≈ θ`.
    fn theta_and_x_constructions_agree() {
        // Arrange
        let theta = array![0.5, -1.0, 2.0];

        // Act
        let from_theta = UBCMParams::from_theta(theta.clone()).expect("finite theta accepted");
        let from_x =
            UBCMParams::from_x(from_theta.x().to_owned()).expect("positive x accepted");

        // Assert
        for k in 0..3 {
            assert_abs_diff_eq!(from_theta.x()[k], (-theta[k]).exp(), epsilon = 1e-15);
            assert_abs_diff_eq!(from_x.theta()[k], theta[k], epsilon = 1e-12);
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the zero-degree boundary: `x = 0` is admissible and maps to
    // `θ = +∞`, while NaN θ and negative x are rejected.
    //
    // Given
    // -----
    // - x = [0, 0.5], θ = [NaN], x = [-0.1].
    //
    // Expect
    // ------
    // - The first constructs with an infinite θ entry; the others fail.
    fn boundary_and_invalid_inputs() {
        let params = UBCMParams::from_x(array![0.0, 0.5]).expect("zero coordinate admissible");
        assert_eq!(params.theta()[0], f64::INFINITY);
        assert!(matches!(
            UBCMParams::from_theta(array![f64::NAN]),
            Err(ModelError::NonFiniteParameter { index: 0, .. })
        ));
        assert!(matches!(
            UBCMParams::from_x(array![-0.1]),
            Err(ModelError::InvalidTransformedParameter { index: 0, .. })
        ));
    }
}
