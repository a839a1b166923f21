//! Initial-guess policies for the null-model solvers.
//!
//! Purpose
//! -------
//! Provide the starting-point strategies for both solve methods. Guesses
//! are defined in `x`-space (`x = exp(-θ)`), where the scale heuristics
//! are natural: a class of degree `K` should start near `K` divided by a
//! global scale of the network. The two deterministic policies differ only
//! in that scale; the random policy draws i.i.d. uniform coordinates; the
//! explicit policy hands the solver a user-supplied θ-vector unchanged.
//!
//! Key behaviors
//! -------------
//! - [`InitialGuess::FromNodeDegrees`]: `x₀_k = K_k / √n`.
//! - [`InitialGuess::FromLinkCount`]: `x₀_k = K_k / √(2L)` with
//!   `2L = Σ_i d_i`.
//! - [`InitialGuess::Random`]: i.i.d. `Uniform(0, 1)` draws per class.
//! - [`InitialGuess::Explicit`]: user-supplied θ-vector, validated for
//!   length and finiteness against the class count.
//! - Keyword parsing via `FromStr` for the three non-explicit policies.
//!
//! Invariants & assumptions
//! ------------------------
//! - Materialized `x₀` coordinates are floored at [`GUESS_FLOOR`] so that
//!   `θ₀ = -ln(x₀)` stays finite even for zero-degree classes; the floor
//!   only affects the starting point, never the fitted optimum.
//! - Guess materialization needs the reduced structure (class count and
//!   degree totals) and therefore happens at fit time, not at parse time.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand_distr::Uniform;
use std::str::FromStr;

use crate::nullmodel::{
    core::{degrees::DegreeStructure, validation::validate_initial_guess},
    errors::{ModelError, ModelResult},
};

/// Smallest admissible starting coordinate in `x`-space.
///
/// Zero-degree classes would otherwise start at `x₀ = 0`, i.e.
/// `θ₀ = +∞`, which the gradient path cannot represent. The floor keeps
/// the start finite; the solvers are free to move toward the boundary from
/// there.
pub const GUESS_FLOOR: f64 = 1e-12;

/// Starting-point policy for a solve.
///
/// Variants:
/// - `FromNodeDegrees`: reduced degrees scaled by `1/√n`.
/// - `FromLinkCount`: reduced degrees scaled by `1/√(2L)`.
/// - `Random`: i.i.d. `Uniform(0, 1)` coordinates.
/// - `Explicit(θ)`: a full θ-vector; must match the class count.
///
/// Parsing:
/// `FromStr` accepts the case-insensitive keywords `"fromnodedegrees"`,
/// `"fromlinkcount"`, and `"random"`. Unknown keywords fail with
/// [`ModelError::UnknownInitialGuess`] before any computation starts.
#[derive(Debug, Clone, PartialEq)]
pub enum InitialGuess {
    FromNodeDegrees,
    FromLinkCount,
    Random,
    Explicit(Array1<f64>),
}

impl FromStr for InitialGuess {
    type Err = ModelError;

    /// Parse an initial-guess keyword (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fromnodedegrees" => Ok(InitialGuess::FromNodeDegrees),
            "fromlinkcount" => Ok(InitialGuess::FromLinkCount),
            "random" => Ok(InitialGuess::Random),
            _ => Err(ModelError::UnknownInitialGuess {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'FromNodeDegrees', \
                         'FromLinkCount', or 'Random'.",
            }),
        }
    }
}

impl InitialGuess {
    /// Materialize the starting point in `x`-space for a given structure.
    ///
    /// # Behavior
    /// - Deterministic policies scale the reduced degrees by `1/√n` or
    ///   `1/√(2L)` respectively and floor the result at [`GUESS_FLOOR`].
    /// - `Random` draws one `Uniform(0, 1)` coordinate per class (floored
    ///   the same way; a draw of exactly zero is astronomically unlikely
    ///   but would break the θ-transform).
    /// - `Explicit(θ)` validates the vector against the class count and
    ///   returns `x₀ = exp(-θ)`.
    ///
    /// # Errors
    /// - [`ModelError::GuessLengthMismatch`] / [`ModelError::NonFiniteGuess`]
    ///   for invalid explicit vectors.
    pub fn initial_x(&self, structure: &DegreeStructure) -> ModelResult<Array1<f64>> {
        let kappa = structure.values();
        match self {
            InitialGuess::FromNodeDegrees => {
                let scale = (structure.node_count() as f64).sqrt();
                Ok(kappa.mapv(|k| (k / scale).max(GUESS_FLOOR)))
            }
            InitialGuess::FromLinkCount => {
                let total_degree: f64 = structure.degrees().iter().map(|&d| d as f64).sum();
                let scale = total_degree.sqrt();
                if scale > 0.0 {
                    Ok(kappa.mapv(|k| (k / scale).max(GUESS_FLOOR)))
                } else {
                    Ok(Array1::from_elem(structure.class_count(), GUESS_FLOOR))
                }
            }
            InitialGuess::Random => {
                let draws =
                    Array1::random(structure.class_count(), Uniform::new(0.0, 1.0));
                Ok(draws.mapv(|v: f64| v.max(GUESS_FLOOR)))
            }
            InitialGuess::Explicit(theta) => {
                validate_initial_guess(theta.view(), structure.class_count())?;
                Ok(theta.mapv(|t| (-t).exp()))
            }
        }
    }

    /// Materialize the starting point in θ-space for a given structure.
    ///
    /// Explicit guesses are returned verbatim (no round-trip through
    /// `x`-space); the other policies are the negative log of their
    /// [`InitialGuess::initial_x`] counterpart.
    ///
    /// # Errors
    /// Same as [`InitialGuess::initial_x`].
    pub fn initial_theta(&self, structure: &DegreeStructure) -> ModelResult<Array1<f64>> {
        match self {
            InitialGuess::Explicit(theta) => {
                validate_initial_guess(theta.view(), structure.class_count())?;
                Ok(theta.clone())
            }
            other => Ok(other.initial_x(structure)?.mapv(|x| -x.ln())),
        }
    }
}
