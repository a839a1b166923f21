//! maxent_graphs — maximum-entropy null models for undirected graphs.
//!
//! Purpose
//! -------
//! Fit "maximum-entropy" null models of graphs: given the observed degree
//! sequence, find the unique probability distribution over graphs that is
//! maximally random while reproducing the degrees in expectation. The
//! crate produces per-class maximum-likelihood parameters, the expected
//! (probabilistic) adjacency matrix, the per-entry Bernoulli standard
//! deviation, and independent-edge graph realizations. These feed
//! downstream statistical tests (z-scores of network metrics against the
//! ensemble), which live outside this crate.
//!
//! Key behaviors
//! -------------
//! - Re-export the two layers of the crate as its public surface:
//!   [`nullmodel`] (degree reduction, the UBCM model, matrices, sampling)
//!   and [`optimization`] (the L-BFGS maximizer, the fixed-point runner,
//!   stable transforms, and the optimizer error surface).
//! - Keep the likelihood machinery generic: models plug into the solvers
//!   through the `LogLikelihood` and `FixedPointMap` traits.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerics run on `f64` `ndarray` containers; inner loops
//!   over degree classes and matrix rows parallelize with rayon, so
//!   floating-point summation order (and thus the last bits of results)
//!   may differ between runs and thread counts.
//! - Graph construction/parsing, the directed and weighted variants,
//!   persistence, plotting, and CLI surfaces are out of scope; callers
//!   bring anything exposing a node count and a degree sequence.
//! - Sampling uses the thread-local RNG; there is no cross-run
//!   reproducibility contract.
//!
//! Downstream usage
//! ----------------
//! - Most callers need only the null-model prelude:
//!
//! ```no_run
//! use maxent_graphs::nullmodel::prelude::*;
//! use ndarray::array;
//!
//! let mut model =
//!     UBCMModel::from_degrees(array![4usize, 3, 3, 3, 2], UBCMOptions::default())?;
//! model.fit()?;
//! let expected = model.expected_matrix()?;
//! # let _ = expected;
//! # Ok::<(), maxent_graphs::nullmodel::ModelError>(())
//! ```
//!
//! Testing notes
//! -------------
//! - Unit tests live beside the modules they cover; the integration suite
//!   under `tests/` drives the full pipeline (build, fit with both
//!   methods, reconstruct, sample).

pub mod nullmodel;
pub mod optimization;
