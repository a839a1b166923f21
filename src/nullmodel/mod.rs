//! nullmodel — degree-constrained maximum-entropy null models.
//!
//! Purpose
//! -------
//! Provide the full null-model stack for undirected graphs constrained on
//! their degree sequence: degree reduction, likelihood kernels, fitting by
//! quasi-Newton or fixed-point iteration, reconstruction of the expected
//! adjacency and its per-entry dispersion, and independent-edge sampling.
//! This is the surface most consumers should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the structural and numerical building blocks in [`core`]:
//!   the reduced degree structure, graph capability trait, likelihood
//!   kernels, initial-guess policies, options, parameter types, and
//!   validation.
//! - Expose the user-facing model API in [`models`] via [`UBCMModel`] and
//!   the closed capability trait [`MaxEntNullModel`].
//! - Reconstruct dense ensemble summaries in [`matrix`] and draw
//!   realizations in [`sample`].
//! - Centralize domain errors in [`errors`] (`ModelError` and the
//!   `ModelResult` alias) so callers see a uniform error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Degree sequences are validated at construction: at least two nodes,
//!   every degree strictly below the node count. Zero degrees are admitted
//!   with a non-fatal warning.
//! - The reduced structure is immutable for the life of a model; fitted
//!   parameters and matrix caches are write-once per solve and gated by
//!   the status flags.
//! - Both solve methods target the same strictly concave objective and
//!   agree at the optimum up to numerical tolerance.
//! - A model is a single-writer, multiple-reader value; concurrent fits on
//!   one instance are not supported (use one model per concurrent fit).
//!
//! Conventions
//! -----------
//! - Indexing is 0-based; degree classes are sorted ascending.
//! - Matrices are dense, symmetric, `n×n`, with zero diagonal.
//! - The stack performs no I/O; the only logging consists of the non-fatal
//!   warnings for zero degrees and for convergence shortfall, emitted
//!   through the `log` facade.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Build a model from a degree sequence or any [`DegreeSource`] via
//!      [`UBCMModel::from_degrees`] / [`UBCMModel::from_graph`] with
//!      [`UBCMOptions`] (method, initial guess, tolerances).
//!   2. Fit by `model.fit()`; inspect [`SolveDiagnostics`] for the
//!      convergence report.
//!   3. Read `expected_matrix()` / `std_dev_matrix()` (lazy, cached) and
//!      draw realizations with `sample()`.
//! - Downstream statistical testing (z-scores of graph metrics against the
//!   ensemble) consumes the matrices and samples; it is out of scope here.
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover the reduction invariants, likelihood
//!   kernels against finite differences, guess policies, and validation
//!   boundaries.
//! - Unit tests in [`models`] cover trait conformance, precondition
//!   errors, and a full fixed-point fit.
//! - The integration suite exercises both solve methods end to end,
//!   including the degree-consistency and Monte-Carlo properties.

pub mod core;
pub mod errors;
pub mod matrix;
pub mod models;
pub mod sample;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the everyday types most users need. More specialized items
// (validation helpers, low-level kernels) remain under their submodules.

pub use self::core::{
    DegreeSource, DegreeStructure, InitialGuess, ModelStatus, SampledGraph, SolveDiagnostics,
    SolveMethod, UBCMOptions, UBCMParams,
};

pub use self::errors::{ModelError, ModelResult};

pub use self::models::{MaxEntNullModel, UBCMModel};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use maxent_graphs::nullmodel::prelude::*;
//
// to import the main null-model surface in a single line.

pub mod prelude {
    pub use super::{
        DegreeSource, DegreeStructure, InitialGuess, MaxEntNullModel, ModelError, ModelResult,
        ModelStatus, SampledGraph, SolveDiagnostics, SolveMethod, UBCMModel, UBCMOptions,
        UBCMParams,
    };
}
