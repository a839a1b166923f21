//! loglik_optimizer::types — shared numeric aliases and solver wiring.
//!
//! Centralizes the core numeric types and solver aliases used by the
//! log-likelihood optimizer so the rest of the optimization code can stay
//! agnostic to `ndarray` and Argmin generics.
//!
//! Conventions
//! -----------
//! - `Theta` and `Grad` are treated conceptually as column vectors with
//!   length equal to the number of free parameters (one per reduced
//!   degree class in the null-model use case).
//! - `Cost` is always a scalar `f64` in log-likelihood space; higher
//!   layers handle any sign flips between cost and log-likelihood.
//! - `DEFAULT_LBFGS_MEM` encodes the typical history size for L-BFGS;
//!   callers may override this via per-run options.

use argmin::solver::{
    linesearch::{HagerZhangLineSearch, MoreThuenteLineSearch},
    quasinewton::LBFGS,
};
use ndarray::Array1;
use std::collections::HashMap;

/// Parameter vector `θ` for log-likelihood optimization.
///
/// Alias for `ndarray::Array1<f64>`, used as the canonical parameter type
/// throughout the optimizer.
pub type Theta = Array1<f64>;

/// Gradient vector `∇ℓ(θ)` or `∇c(θ)` for optimization.
///
/// Alias for `ndarray::Array1<f64>`, matching the shape of `Theta`.
pub type Grad = Array1<f64>;

/// Scalar objective value used by the optimizer.
///
/// In this crate, this is the cost `c(θ) = -ℓ(θ)` derived from a
/// log-likelihood `ℓ(θ)`.
pub type Cost = f64;

/// Function-evaluation counters as reported by the solver.
///
/// Maps human-readable counter names (e.g., `"cost_count"`) to counts.
pub type FnEvalMap = HashMap<String, u64>;

/// Default history size (`m`) for L-BFGS runs.
pub const DEFAULT_LBFGS_MEM: usize = 7;

/// Hager–Zhang line search specialized to this crate’s numeric types.
pub type HagerZhangLS = HagerZhangLineSearch<Theta, Grad, Cost>;

/// More–Thuente line search specialized to this crate’s numeric types.
pub type MoreThuenteLS = MoreThuenteLineSearch<Theta, Grad, Cost>;

/// L-BFGS solver wired to the Hager–Zhang line search.
pub type LbfgsHagerZhang = LBFGS<HagerZhangLS, Theta, Grad, Cost>;

/// L-BFGS solver wired to the More–Thuente line search.
pub type LbfgsMoreThuente = LBFGS<MoreThuenteLS, Theta, Grad, Cost>;
