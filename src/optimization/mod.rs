//! optimization — solver stack, numerical helpers, and unified error surface.
//!
//! Purpose
//! -------
//! Provide a cohesive optimization layer for maximum-entropy model fitting,
//! combining an Argmin-backed log-likelihood maximizer (the Newton-type
//! path), a fixed-point iteration runner, numerically stable transforms,
//! and a single error/result surface. Callers implement a log-likelihood
//! and a fixed-point map, choose tolerances, and obtain fitted parameters
//! and diagnostics without touching backend solver details.
//!
//! Key behaviors
//! -------------
//! - Expose a high-level API for **maximizing log-likelihoods** `ℓ(θ)`
//!   (`loglik_optimizer`), including configuration of L-BFGS solvers, line
//!   searches, and stopping criteria.
//! - Expose a generic fixed-point iteration runner (`fixed_point`) for
//!   models whose stationarity condition is a self-map in a transformed
//!   parameter space.
//! - Supply shared numerical primitives (`numerical_stability`) used by
//!   likelihood kernels that would overflow in naive form.
//! - Normalize configuration issues, numerical failures, and backend solver
//!   errors into a single enum (`errors::OptError`) with a common result
//!   alias (`OptResult<T>`).
//!
//! Invariants & assumptions
//! ------------------------
//! - Optimizers operate on an unconstrained parameter vector `θ` and assume
//!   entries are finite once validation has passed; invalid states are
//!   reported as `OptError`, not panics.
//! - Log-likelihood implementations treat domain violations as recoverable
//!   errors surfaced through the optimization layer.
//! - The fixed-point runner assumes the map keeps iterates non-negative and
//!   finite for admissible inputs; non-finite iterates abort the run with a
//!   structured error.
//!
//! Conventions
//! -----------
//! - All solvers conceptually maximize a log-likelihood `ℓ(θ)` by minimizing
//!   an internal cost `c(θ) = -ℓ(θ)`; user-facing APIs and outcomes are
//!   expressed in terms of `ℓ`.
//! - Parameters and gradients are represented with `ndarray`-based aliases
//!   (`Theta`, `Grad`).
//! - Public entrypoints that can fail return `OptResult<T>`; callers never
//!   see raw Argmin errors.
//! - This layer performs no I/O; optional progress reporting lives behind
//!   the `obs_slog` feature in the runner.
//!
//! Downstream usage
//! ----------------
//! - Model types implement `LogLikelihood` and call `maximize` with a
//!   parameter guess, data payload, and `MLEOptions` to obtain an
//!   `OptimOutcome`.
//! - Models with a degree-conservation fixed point implement
//!   `FixedPointMap` and call `fixed_point::iterate`.
//!
//! Testing notes
//! -------------
//! - Unit tests in the submodules focus on local concerns: solver wiring
//!   and tolerance handling, fixed-point convergence on contractions, and
//!   stable-transform tail behavior.
//! - End-to-end solver behavior on a real likelihood is exercised by the
//!   null-model integration tests.

pub mod errors;
pub mod fixed_point;
pub mod loglik_optimizer;
pub mod numerical_stability;

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use maxent_graphs::optimization::prelude::*;
//
// to import the main optimization surface in a single line.

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::fixed_point::{FixedPointMap, FixedPointOptions, FixedPointOutcome};
    pub use super::loglik_optimizer::prelude::*;
    pub use super::numerical_stability::prelude::*;
}
