//! fixed_point — generic fixed-point iteration runner.
//!
//! Purpose
//! -------
//! Provide the second solve formulation of the crate: direct fixed-point
//! iteration `x^(t+1) = T(x^(t))` in a transformed parameter space. For the
//! degree-constrained null model the map `T` is the degree-conservation
//! condition in `x = exp(-θ)` space, and its fixed point coincides with the
//! unique maximizer found by the gradient-based path, so the two solvers are
//! interchangeable up to numerical tolerance.
//!
//! Key behaviors
//! -------------
//! - Define [`FixedPointMap`], the map-plus-validation trait mirroring the
//!   shape of `LogLikelihood` (a `Data` payload, an `apply` step, and a
//!   `check` hook called once before iterating).
//! - Define [`FixedPointOptions`] (validated step tolerance and iteration
//!   cap) and [`FixedPointOutcome`] (best iterate plus diagnostics).
//! - Expose [`iterate`], the runner: applies the map until the ∞-norm of
//!   the step falls below tolerance or the iteration cap is hit.
//!
//! Invariants & assumptions
//! ------------------------
//! - Iterates must stay finite and non-negative; the runner aborts with a
//!   structured error the first time the map produces a NaN, infinity, or
//!   negative coordinate.
//! - Running out of iterations is **not** an error: the best iterate is
//!   returned with `converged == false`, matching the partial-failure
//!   policy of the gradient path.
//! - The map is applied sequentially; each iterate depends on the previous
//!   one, so no concurrency is exploitable across iterations.
//!
//! Testing notes
//! -------------
//! - Unit tests here drive the runner on a scalar contraction with a known
//!   fixed point and on a map that leaves the admissible region.
//! - Agreement with the gradient-based solver on the real likelihood is an
//!   integration-test concern.

use ndarray::Array1;

use crate::optimization::errors::{OptError, OptResult};

/// A fixed-point map `T` over non-negative parameter vectors.
///
/// Implementors supply the iteration step of a fixed-point solve together
/// with an upfront validation hook, in the same shape as `LogLikelihood`:
///
/// - `type Data`: per-model data carried into `apply`/`check`.
/// - `apply(&x, &Data) -> OptResult<Array1<f64>>`: one application of `T`.
/// - `check(&x0, &Data) -> OptResult<()>`: reject invalid starting points
///   before any iteration runs.
pub trait FixedPointMap {
    type Data: 'static;

    fn apply(&self, x: &Array1<f64>, data: &Self::Data) -> OptResult<Array1<f64>>;
    fn check(&self, x0: &Array1<f64>, data: &Self::Data) -> OptResult<()>;
}

/// Validated configuration for a fixed-point run.
///
/// - `tol_step`: stop once `max_k |x_k^(t+1) - x_k^(t)| < tol_step`.
/// - `max_iter`: hard cap on iterations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedPointOptions {
    pub tol_step: f64,
    pub max_iter: usize,
}

impl FixedPointOptions {
    /// Construct validated fixed-point options.
    ///
    /// # Errors
    /// - [`OptError::InvalidTolGrad`] if `tol_step` is non-finite or ≤ 0
    ///   (the step tolerance plays the residual-tolerance role here).
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(tol_step: f64, max_iter: usize) -> OptResult<Self> {
        if !tol_step.is_finite() {
            return Err(OptError::InvalidTolGrad {
                tol: tol_step,
                reason: "Step tolerance must be finite.",
            });
        }
        if tol_step <= 0.0 {
            return Err(OptError::InvalidTolGrad {
                tol: tol_step,
                reason: "Step tolerance must be positive.",
            });
        }
        if max_iter == 0 {
            return Err(OptError::InvalidMaxIter {
                max_iter,
                reason: "Maximum iterations must be greater than zero.",
            });
        }
        Ok(Self { tol_step, max_iter })
    }
}

/// Result of a fixed-point run.
///
/// - `x_hat`: last iterate (the best available approximation of the fixed
///   point whether or not the run converged).
/// - `converged`: `true` if the step norm fell below tolerance within the
///   iteration cap.
/// - `iterations`: number of map applications performed.
/// - `step_norm`: ∞-norm of the final step.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedPointOutcome {
    pub x_hat: Array1<f64>,
    pub converged: bool,
    pub iterations: usize,
    pub step_norm: f64,
}

/// Iterate a [`FixedPointMap`] to (approximate) convergence.
///
/// # Behavior
/// - Validates `x0` via `map.check`.
/// - Repeatedly applies the map, validating each iterate for length,
///   finiteness, and non-negativity.
/// - Stops when the ∞-norm of the step falls below `opts.tol_step`
///   (`converged = true`) or after `opts.max_iter` applications
///   (`converged = false`, best iterate still returned).
///
/// # Errors
/// - Propagates `map.check` / `map.apply` failures.
/// - [`OptError::IterateDimMismatch`] if the map changes the vector length.
/// - [`OptError::NonFiniteIterate`] / [`OptError::NegativeIterate`] if an
///   iterate leaves the admissible region.
pub fn iterate<M: FixedPointMap>(
    map: &M, x0: Array1<f64>, data: &M::Data, opts: &FixedPointOptions,
) -> OptResult<FixedPointOutcome> {
    map.check(&x0, data)?;
    let dim = x0.len();
    let mut x = x0;
    let mut step_norm = f64::INFINITY;
    let mut iterations = 0;
    while iterations < opts.max_iter {
        let x_next = map.apply(&x, data)?;
        validate_iterate(&x_next, dim)?;
        step_norm =
            x_next.iter().zip(x.iter()).map(|(a, b)| (a - b).abs()).fold(0.0_f64, f64::max);
        x = x_next;
        iterations += 1;
        if step_norm < opts.tol_step {
            return Ok(FixedPointOutcome { x_hat: x, converged: true, iterations, step_norm });
        }
    }
    Ok(FixedPointOutcome { x_hat: x, converged: false, iterations, step_norm })
}

/// Validate one fixed-point iterate: correct length, finite, non-negative.
fn validate_iterate(x: &Array1<f64>, dim: usize) -> OptResult<()> {
    if x.len() != dim {
        return Err(OptError::IterateDimMismatch { expected: dim, found: x.len() });
    }
    for (index, &value) in x.iter().enumerate() {
        if !value.is_finite() {
            return Err(OptError::NonFiniteIterate { index, value });
        }
        if value < 0.0 {
            return Err(OptError::NegativeIterate { index, value });
        }
    }
    Ok(())
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
    // - Convergence of the runner on a contraction with a known fixed point.
    // - The iteration-cap path returning the best iterate unconverged.
    // - Rejection of maps that leave the admissible region.
    // - Option validation.
    //
    // They intentionally DO NOT cover:
    // - The degree-conservation map itself (nullmodel unit/integration tests).
    // -------------------------------------------------------------------------

    /// Coordinatewise contraction `x ↦ (x + c) / 2` with fixed point `c`.
    struct Halfway;

    impl FixedPointMap for Halfway {
        type Data = Array1<f64>;

        fn apply(&self, x: &Array1<f64>, c: &Array1<f64>) -> OptResult<Array1<f64>> {
            Ok((x + c) / 2.0)
        }

        fn check(&self, _x0: &Array1<f64>, _c: &Array1<f64>) -> OptResult<()> {
            Ok(())
        }
    }

    /// Map that immediately produces a NaN coordinate.
    struct Poison;

    impl FixedPointMap for Poison {
        type Data = ();

        fn apply(&self, x: &Array1<f64>, _data: &()) -> OptResult<Array1<f64>> {
            let mut out = x.clone();
            out[0] = f64::NAN;
            Ok(out)
        }

        fn check(&self, _x0: &Array1<f64>, _data: &()) -> OptResult<()> {
            Ok(())
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the runner converges to the known fixed point of a simple
    // contraction and reports `converged = true`.
    //
    // Given
    // -----
    // - The map `x ↦ (x + c)/2` with `c = (1, 2)`, started from zero.
    //
    // Expect
    // ------
    // - `x_hat ≈ c` within 1e-8 and a converged outcome.
    fn iterate_converges_on_contraction() {
        // Arrange
        let c = array![1.0, 2.0];
        let opts = FixedPointOptions::new(1e-10, 200).expect("options should be valid");

        // Act
        let outcome =
            iterate(&Halfway, array![0.0, 0.0], &c, &opts).expect("iteration should succeed");

        // Assert
        assert!(outcome.converged);
        assert_abs_diff_eq!(outcome.x_hat[0], 1.0, epsilon = 1e-8);
        assert_abs_diff_eq!(outcome.x_hat[1], 2.0, epsilon = 1e-8);
        assert!(outcome.step_norm < 1e-10);
    }

    #[test]
    // Purpose
    // -------
    // Verify the partial-failure policy: hitting the iteration cap returns
    // the best iterate with `converged = false` instead of erroring.
    //
    // Given
    // -----
    // - The same contraction but only 3 allowed iterations and a very
    //   tight tolerance.
    //
    // Expect
    // ------
    // - `Ok` outcome, `converged == false`, `iterations == 3`.
    fn iterate_reports_nonconvergence_at_cap() {
        // Arrange
        let c = array![1.0, 2.0];
        let opts = FixedPointOptions::new(1e-15, 3).expect("options should be valid");

        // Act
        let outcome =
            iterate(&Halfway, array![0.0, 0.0], &c, &opts).expect("iteration should succeed");

        // Assert
        assert!(!outcome.converged);
        assert_eq!(outcome.iterations, 3);
    }

    #[test]
    // Purpose
    // -------
    // Verify that a map producing NaN aborts the run with
    // `NonFiniteIterate`.
    //
    // Given
    // -----
    // - The poisoned map.
    //
    // Expect
    // ------
    // - `Err(OptError::NonFiniteIterate { index: 0, .. })`.
    fn iterate_rejects_non_finite_iterates() {
        let opts = FixedPointOptions::new(1e-8, 10).expect("options should be valid");
        let result = iterate(&Poison, array![1.0, 1.0], &(), &opts);
        assert!(matches!(result, Err(OptError::NonFiniteIterate { index: 0, .. })));
    }

    #[test]
    // Purpose
    // -------
    // Check option validation: non-positive tolerances and a zero
    // iteration cap are rejected.
    //
    // Given
    // -----
    // - `tol_step = 0.0` and `max_iter = 0` configurations.
    //
    // Expect
    // ------
    // - Both constructions fail with the corresponding `OptError`.
    fn fixed_point_options_are_validated() {
        assert!(matches!(
            FixedPointOptions::new(0.0, 10),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            FixedPointOptions::new(1e-8, 0),
            Err(OptError::InvalidMaxIter { .. })
        ));
    }
}
