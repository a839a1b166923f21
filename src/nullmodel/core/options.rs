//! Run-time options for null-model fitting.
//!
//! Bundles the solve-method choice, the initial-guess policy, and the
//! optimizer configuration into one validated options value carried by the
//! model. The optimizer tolerances ([`Tolerances`]) are shared by both
//! solve paths: the gradient path reads `tol_grad`/`tol_cost`/`max_iter`
//! directly, the fixed-point path reuses `tol_grad` as its step tolerance
//! and `max_iter` as its iteration cap.

use std::str::FromStr;

use crate::{
    nullmodel::{
        core::init::InitialGuess,
        errors::ModelError,
    },
    optimization::loglik_optimizer::MLEOptions,
};

/// Iterative method used to find the maximum-likelihood parameters.
///
/// Variants:
/// - `Newton`: quasi-Newton (L-BFGS) solve of the gradient condition
///   `∇L(θ) = 0` in θ-space.
/// - `FixedPoint`: direct iteration of the degree-conservation map in
///   x-space.
///
/// Both methods target the same unique optimum; they differ in iteration
/// rule and numerical robustness.
///
/// Parsing:
/// `FromStr` accepts the case-insensitive keywords `"newton"` and
/// `"fixedpoint"`. Unknown names fail with [`ModelError::UnknownMethod`]
/// before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveMethod {
    Newton,
    FixedPoint,
}

impl FromStr for SolveMethod {
    type Err = ModelError;

    /// Parse a solve-method keyword (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "newton" => Ok(SolveMethod::Newton),
            "fixedpoint" => Ok(SolveMethod::FixedPoint),
            _ => Err(ModelError::UnknownMethod {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'Newton' or 'FixedPoint'.",
            }),
        }
    }
}

/// Model-level options: solve method, initial guess, and optimizer setup.
#[derive(Debug, Clone, PartialEq)]
pub struct UBCMOptions {
    /// Iterative method used by `fit`.
    pub method: SolveMethod,
    /// Starting-point policy, materialized at fit time.
    pub init: InitialGuess,
    /// Optimizer configuration (tolerances, line search, verbosity).
    pub mle_opts: MLEOptions,
}

impl UBCMOptions {
    /// Bundle validated components into a model options value.
    ///
    /// The individual pieces validate themselves on construction
    /// (`Tolerances::new`, `MLEOptions::new`, guess parsing); this
    /// constructor only assembles them.
    pub fn new(method: SolveMethod, init: InitialGuess, mle_opts: MLEOptions) -> Self {
        Self { method, init, mle_opts }
    }
}

impl Default for UBCMOptions {
    /// Newton solve from the `FromNodeDegrees` guess with the default
    /// optimizer configuration.
    fn default() -> Self {
        Self {
            method: SolveMethod::Newton,
            init: InitialGuess::FromNodeDegrees,
            mle_opts: MLEOptions::default(),
        }
    }
}
