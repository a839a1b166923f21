//! loglik_optimizer — MLE-friendly, argmin-powered log-likelihood optimizer.
//!
//! Purpose
//! -------
//! Provide a high-level, Argmin-backed optimization layer for **maximizing
//! log-likelihoods** `ℓ(θ)`. Callers implement a single trait,
//! [`LogLikelihood`], and invoke [`maximize`] to run L-BFGS with a
//! configurable line search and tolerances. In the null-model stack this is
//! the Newton-type solve path: a quasi-Newton iteration driven by the
//! analytic gradient, stopping when the gradient residual `∇ℓ(θ)` is below
//! tolerance.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied log-likelihoods `ℓ(θ)` into Argmin-compatible
//!   cost functions `c(θ) = -ℓ(θ)` via [`adapter::ArgMinAdapter`].
//! - Expose a single, user-facing entrypoint [`maximize`] that:
//!   - validates the initial guess with [`LogLikelihood::check`],
//!   - selects an L-BFGS solver via [`builders`] based on
//!     [`traits::LineSearcher`],
//!   - executes the solver via [`run::run_lbfgs`], and
//!   - normalizes results into an [`OptimOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`MLEOptions`]) and
//!   validation logic ([`validation`]) so downstream code can assume sane,
//!   finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The optimizer **always maximizes** a log-likelihood `ℓ(θ)` by minimizing
//!   a cost `c(θ) = -ℓ(θ)`; user code implements `ℓ(θ)` and `∇ℓ(θ)`,
//!   **never** the cost directly.
//! - [`LogLikelihood::value`] and [`LogLikelihood::grad`] must treat invalid
//!   inputs as recoverable [`crate::optimization::errors::OptError`] values,
//!   not panics.
//! - Parameters live in an unconstrained optimizer space as [`Theta`]
//!   (`Array1<f64>`); any mapping from constrained to unconstrained space
//!   happens in the model layer.
//! - Running out of iterations is reported through
//!   `OptimOutcome::converged == false` while still carrying the best
//!   iterate; it is not an error.
//!
//! Downstream usage
//! ----------------
//! - Model types implement [`LogLikelihood`], then call [`maximize`] with a
//!   model instance, an initial [`Theta`], a data payload, and an
//!   [`MLEOptions`] configuration.
//! - Higher-level front-ends interact only with the re-exported surface:
//!   [`maximize`], [`LogLikelihood`], [`MLEOptions`], [`Tolerances`],
//!   [`OptimOutcome`], plus numeric aliases from [`types`].
//!
//! Testing notes
//! -------------
//! - Unit tests in submodules cover sign conventions and gradient handling
//!   in [`adapter`], solver construction and tolerance wiring in
//!   [`builders`], and configuration/outcome invariants in [`traits`].
//! - Integration tests exercise [`maximize`] on the degree-constrained
//!   likelihood end to end.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod run;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::maximize;
pub use self::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use maxent_graphs::optimization::loglik_optimizer::prelude::*;
//
// to import the main optimizer surface in a single line.

pub mod prelude {
    pub use super::api::maximize;
    pub use super::traits::{LineSearcher, LogLikelihood, MLEOptions, OptimOutcome, Tolerances};
    pub use super::types::{Cost, Grad, Theta};
}
