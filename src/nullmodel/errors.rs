//! Errors for maximum-entropy null models (degree-sequence validation,
//! solver configuration, fitted-state preconditions, and sampling).
//!
//! This module defines the model error type, [`ModelError`], used across the
//! null-model stack. It implements `Display`/`Error` and converts from the
//! optimizer error type so solver failures surface with a uniform shape.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/ndarray).
//! - Degree sequences are non-negative integers, one per node, in original
//!   node order.
//! - Construction-time errors (argument and domain errors) are raised
//!   immediately and are unrecoverable for that call; convergence shortfall
//!   is **not** an error and is reported through solve diagnostics instead.
use crate::optimization::errors::OptError;

/// Crate-wide result alias for null-model operations that may produce
/// [`ModelError`].
pub type ModelResult<T> = Result<T, ModelError>;

/// Unified error type for null-model construction, fitting, and sampling.
///
/// Covers argument errors (malformed input, unknown keywords), the domain
/// error for structurally degenerate sequences, dimension mismatches,
/// precondition violations (reading derived quantities before fitting), and
/// normalized solver failures.
#[derive(Debug, Clone, PartialEq)]
pub enum ModelError {
    // ---- Degree-sequence validation (argument/domain errors) ----
    /// Degree sequence is empty.
    EmptyDegreeSequence,

    /// Degree sequence has fewer than two nodes.
    TooFewNodes { n: usize },

    /// A node's degree reaches or exceeds the node count; the model has no
    /// admissible parametrization for such a sequence.
    DegenerateDegree { index: usize, degree: usize, n: usize },

    // ---- Solver configuration (argument errors) ----
    /// Unknown solve-method keyword.
    UnknownMethod { name: String, reason: &'static str },

    /// Unknown initial-guess keyword.
    UnknownInitialGuess { name: String, reason: &'static str },

    /// Explicit initial guess does not match the reduced parameter count.
    GuessLengthMismatch { expected: usize, actual: usize },

    /// Explicit initial guess entries must be finite.
    NonFiniteGuess { index: usize, value: f64 },

    // ---- Fitted-state preconditions ----
    /// Derived quantity requested before the model was fitted.
    NotFitted,

    // ---- Parameters ----
    /// Fitted parameter is NaN (transformed parameters must be well defined).
    NonFiniteParameter { index: usize, value: f64 },

    /// Transformed parameters `x = exp(-θ)` must be non-negative and finite.
    InvalidTransformedParameter { index: usize, value: f64 },

    // ---- Sampling ----
    /// Edge probability outside [0, 1] encountered while sampling.
    InvalidEdgeProbability { row: usize, col: usize, value: f64 },

    // ---- Estimation / optimizer ----
    /// Solver failed; includes a human-readable status/reason.
    SolveFailed { status: String },
}

impl std::error::Error for ModelError {}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Degree-sequence validation ----
            ModelError::EmptyDegreeSequence => {
                write!(f, "Degree sequence is empty.")
            }
            ModelError::TooFewNodes { n } => {
                write!(f, "Degree sequence has {n} node(s); at least two are required.")
            }
            ModelError::DegenerateDegree { index, degree, n } => {
                write!(
                    f,
                    "Degree {degree} at index {index} reaches the node count {n}; the sequence is degenerate for this model."
                )
            }

            // ---- Solver configuration ----
            ModelError::UnknownMethod { name, reason } => {
                write!(f, "Unknown solve method '{name}': {reason}")
            }
            ModelError::UnknownInitialGuess { name, reason } => {
                write!(f, "Unknown initial guess '{name}': {reason}")
            }
            ModelError::GuessLengthMismatch { expected, actual } => {
                write!(f, "Initial guess length mismatch: expected {expected}, actual {actual}")
            }
            ModelError::NonFiniteGuess { index, value } => {
                write!(f, "Initial guess entry at index {index} is non-finite: {value}")
            }

            // ---- Fitted-state preconditions ----
            ModelError::NotFitted => {
                write!(f, "Model has not been fitted yet.")
            }

            // ---- Parameters ----
            ModelError::NonFiniteParameter { index, value } => {
                write!(f, "Parameter at index {index} is not well defined: {value}")
            }
            ModelError::InvalidTransformedParameter { index, value } => {
                write!(
                    f,
                    "Transformed parameter at index {index} is invalid: {value}, must be finite and non-negative"
                )
            }

            // ---- Sampling ----
            ModelError::InvalidEdgeProbability { row, col, value } => {
                write!(f, "Edge probability at ({row}, {col}) is invalid: {value}, must lie in [0, 1]")
            }

            // ---- Estimation / optimizer ----
            ModelError::SolveFailed { status } => {
                write!(f, "Solve failed: {status}")
            }
        }
    }
}

impl From<OptError> for ModelError {
    fn from(err: OptError) -> Self {
        ModelError::SolveFailed { status: err.to_string() }
    }
}
