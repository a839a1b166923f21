//! Public API surface for log-likelihood maximization.
//!
//! - [`LogLikelihood`]: trait users implement for their model.
//! - [`MLEOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`OptimOutcome`]: normalized result returned by the high-level `maximize` API.
//!
//! Convention: we *maximize* a user log-likelihood `ℓ(θ)` by minimizing the cost
//! `c(θ) = -ℓ(θ)`. The analytic gradient supplied by the user is the gradient
//! of the log-likelihood (`∇ℓ(θ)`); the adapter flips the sign as needed.
use crate::optimization::{
    errors::{OptError, OptResult},
    loglik_optimizer::{
        Cost, FnEvalMap, Grad, Theta,
        validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
    },
};
use argmin::core::{TerminationReason, TerminationStatus};
use argmin_math::ArgminL2Norm;
use std::str::FromStr;

/// User-implemented log-likelihood interface.
///
/// You maximize `ℓ(θ)`; internally we minimize the cost `c(θ) = -ℓ(θ)`.
/// The gradient method returns the gradient of the log-likelihood
/// `∇ℓ(θ)` (the adapter flips the sign to match the cost). Unlike a
/// general-purpose optimizer there is no finite-difference fallback:
/// the models in this crate have closed-form gradients, and the solver
/// evaluates the gradient at every iteration, so it is a required method.
///
/// - `type Data`: per-model data carried into `value`/`grad`/`check`.
///
/// Required:
/// - `value(&Theta, &Data) -> OptResult<Cost>`: evaluate `ℓ(θ)`.
/// - `grad(&Theta, &Data) -> OptResult<Grad>`: analytic gradient `∇ℓ(θ)`.
/// - `check(&Theta, &Data) -> OptResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
pub trait LogLikelihood {
    type Data: 'static;

    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost>;
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad>;
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()>;
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `OptError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = OptError;

    /// Parse a line-search choice from a string (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(OptError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `line_searcher: LineSearcher` — line-search algorithm used by L-BFGS.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size; `None` uses the
///   default of [`crate::optimization::loglik_optimizer::DEFAULT_LBFGS_MEM`].
#[derive(Debug, Clone, PartialEq)]
pub struct MLEOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl MLEOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of numeric fields is
    /// performed inside [`Tolerances::new`].
    ///
    /// # Errors
    /// - [`OptError::InvalidLBFGSMem`] if `lbfgs_mem` is `Some(0)`.
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> OptResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(OptError::InvalidLBFGSMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for MLEOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances::new(Some(1e-8), None, Some(500)).unwrap(),
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`OptError::NoTolerancesProvided`] if all three are `None`.
    /// - [`OptError::InvalidTolGrad`] / [`OptError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - [`OptError::InvalidMaxIter`] if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> OptResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(OptError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(OptError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `maximize`.
///
/// - `theta_hat`: best parameter vector found.
/// - `value`: best **log-likelihood** value `ℓ(θ)` (not the cost).
/// - `converged`: `true` only if the solver terminated because a tolerance
///   was reached; running out of iterations reports `false` while still
///   carrying the best iterate (the partial-failure policy of the crate).
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`.
/// - `grad_norm`: norm of the last available gradient, if present.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimOutcome {
    pub theta_hat: Theta,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
    pub grad_norm: Option<f64>,
}

impl OptimOutcome {
    /// Build a validated [`OptimOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `value` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`: only
    ///   `SolverConverged` / `TargetCostReached` count as convergence;
    ///   `MaxItersReached` and every other reason keep the best iterate but
    ///   report `converged = false`.
    /// - Computes `grad_norm` if a gradient was provided.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `value`.
    pub fn new(
        theta_hat_opt: Option<Theta>, value: f64, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap, grad: Option<Grad>,
    ) -> OptResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(value)?;
        let status = match &termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => format!("{reason:?}"),
        };
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        let iterations = iterations as usize;
        let grad_norm = grad.map(|g| g.l2_norm());
        Ok(Self { theta_hat, value, converged, status, iterations, fn_evals, grad_norm })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use std::collections::HashMap;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `LineSearcher` keyword parsing, including rejection of unknown names.
    // - `Tolerances` construction rules.
    // - Convergence classification in `OptimOutcome::new`.
    //
    // They intentionally DO NOT cover:
    // - End-to-end solver behavior (integration tests) or adapter sign
    //   conventions (adapter unit tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify case-insensitive parsing of line-search names and the error
    // on unknown keywords.
    //
    // Given
    // -----
    // - The strings "morethuente", "HAGERZHANG", and "bisection".
    //
    // Expect
    // ------
    // - The first two parse to their variants; the third yields
    //   `OptError::InvalidLineSearch`.
    fn line_searcher_parses_case_insensitively() {
        assert_eq!("morethuente".parse::<LineSearcher>(), Ok(LineSearcher::MoreThuente));
        assert_eq!("HAGERZHANG".parse::<LineSearcher>(), Ok(LineSearcher::HagerZhang));
        assert!(matches!(
            "bisection".parse::<LineSearcher>(),
            Err(OptError::InvalidLineSearch { .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Check that `Tolerances::new` rejects an all-`None` configuration and
    // non-positive tolerances, and accepts a sane configuration.
    //
    // Given
    // -----
    // - (None, None, None), a negative gradient tolerance, and a valid
    //   (Some(1e-8), None, Some(100)) triple.
    //
    // Expect
    // ------
    // - `NoTolerancesProvided`, `InvalidTolGrad`, and `Ok` respectively.
    fn tolerances_enforce_construction_rules() {
        assert!(matches!(Tolerances::new(None, None, None), Err(OptError::NoTolerancesProvided)));
        assert!(matches!(
            Tolerances::new(Some(-1.0), None, Some(10)),
            Err(OptError::InvalidTolGrad { .. })
        ));
        assert!(Tolerances::new(Some(1e-8), None, Some(100)).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Confirm that `OptimOutcome::new` reports `converged = false` when the
    // solver merely ran out of iterations, while still returning the best
    // iterate.
    //
    // Given
    // -----
    // - A finite `theta_hat` and a `MaxItersReached` termination status.
    //
    // Expect
    // ------
    // - `Ok` outcome with `converged == false` and the iterate preserved.
    fn max_iters_reached_is_not_convergence() {
        // Arrange
        let theta = array![0.5, -0.25];
        let termination = TerminationStatus::Terminated(TerminationReason::MaxItersReached);

        // Act
        let outcome =
            OptimOutcome::new(Some(theta.clone()), -3.5, termination, 40, HashMap::new(), None)
                .expect("outcome should validate");

        // Assert
        assert!(!outcome.converged);
        assert_eq!(outcome.theta_hat, theta);
        assert_eq!(outcome.iterations, 40);
    }

    #[test]
    // Purpose
    // -------
    // Confirm that a `SolverConverged` termination is classified as
    // convergence.
    //
    // Given
    // -----
    // - A finite `theta_hat` and a `SolverConverged` termination status.
    //
    // Expect
    // ------
    // - `converged == true`.
    fn solver_converged_is_convergence() {
        // Arrange
        let termination = TerminationStatus::Terminated(TerminationReason::SolverConverged);

        // Act
        let outcome =
            OptimOutcome::new(Some(array![1.0]), -1.0, termination, 7, HashMap::new(), None)
                .expect("outcome should validate");

        // Assert
        assert!(outcome.converged);
    }
}
