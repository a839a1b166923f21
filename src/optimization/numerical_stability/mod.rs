//! numerical_stability — numerically robust scalar transformations.
//!
//! Purpose
//! -------
//! Collect the stable scalar transforms used by the maximum-entropy
//! likelihood kernels. The degree-constrained log-likelihood contains
//! `ln(1 + exp(-θ_k - θ_k'))` terms and edge probabilities of the logistic
//! form `1 / (1 + exp(θ_k + θ_k'))`; both overflow or lose precision in
//! naive form once fitted parameters grow large in magnitude, which is the
//! routine regime for very sparse or very dense degree classes.
//!
//! Key behaviors
//! -------------
//! - Provide a guarded softplus (`safe_softplus`) for the pairwise
//!   log-partition terms of the likelihood.
//! - Provide a guarded logistic (`safe_logistic`) for per-pair edge
//!   probabilities in theta-space.
//!
//! Conventions
//! -----------
//! - All routines are pure `f64 -> f64` helpers suitable for tight inner
//!   loops; no logging, no I/O, no global state.
//! - Domain validation happens in the model layer; these helpers accept any
//!   finite input and degrade gracefully on infinities.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`transformations`] check agreement with the naive
//!   formulas on safe grids and well-behaved saturation in the tails.

pub mod transformations;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::transformations::{safe_logistic, safe_softplus};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::transformations::{safe_logistic, safe_softplus};
}
