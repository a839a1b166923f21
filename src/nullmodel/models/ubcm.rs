//! Undirected degree-constrained model: construction, fitting, and
//! reconstruction.
//!
//! This module wires the degree-constrained null model to the solver layer.
//! A [`UBCMModel`] owns an immutable [`DegreeStructure`] (the reduced degree
//! sequence), run-time [`UBCMOptions`], and the write-once fitted state:
//! solve diagnostics, parameters in both spaces, and the lazily computed
//! matrix caches.
//!
//! Key ideas:
//! - Parameters live in the unconstrained θ-space with `x = exp(-θ)`; the
//!   log-likelihood is strictly concave in θ, so both solve paths reach the
//!   same unique optimum.
//! - The model implements [`LogLikelihood`] (value/gradient/check against
//!   its own structure) for the quasi-Newton path and [`FixedPointMap`]
//!   (degree-conservation map in x-space) for the fixed-point path; `fit`
//!   dispatches on `options.method` and normalizes either outcome into
//!   [`SolveDiagnostics`].
//! - Convergence shortfall is a warning, not an error: the best iterate is
//!   kept, `converged` is reported `false`, and downstream reconstruction
//!   stays available as an approximate fit.

use ndarray::{Array1, Array2};

use crate::{
    nullmodel::{
        core::{
            degrees::DegreeStructure,
            graph::{DegreeSource, SampledGraph},
            likelihood::{fixed_point_map, gradient, log_likelihood},
            options::{SolveMethod, UBCMOptions},
            params::{ModelStatus, SolveDiagnostics, UBCMParams},
        },
        errors::{ModelError, ModelResult},
        matrix, sample,
    },
    optimization::{
        errors::{OptError, OptResult},
        fixed_point::{self, FixedPointMap, FixedPointOptions},
        loglik_optimizer::{Cost, Grad, LogLikelihood, Theta, maximize},
    },
};

/// Fallback step tolerance for the fixed-point path when the shared
/// tolerances carry no explicit rule.
const DEFAULT_STEP_TOL: f64 = 1e-10;

/// Fallback iteration cap for the fixed-point path.
const DEFAULT_SWEEP_CAP: usize = 5000;

/// Undirected degree-constrained maximum-entropy model.
///
/// Holds the immutable reduced structure, the solve configuration, and the
/// fitted state populated by [`UBCMModel::fit`]. Matrices are computed
/// lazily on first request and cached; `status` reports which stages have
/// run.
///
/// # Notes
/// - One instance per concurrent fit: the type is a single-writer,
///   multiple-reader value and is not designed for concurrent mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct UBCMModel {
    /// Reduced degree structure (immutable after construction).
    structure: DegreeStructure,
    /// Solve configuration.
    options: UBCMOptions,
    /// Solve diagnostics (populated after `fit`).
    results: Option<SolveDiagnostics>,
    /// Fitted parameters in both spaces (populated after `fit`).
    fitted_params: Option<UBCMParams>,
    /// Expected adjacency cache (populated on demand).
    expected: Option<Array2<f64>>,
    /// Bernoulli standard-deviation cache (populated on demand).
    std_dev: Option<Array2<f64>>,
}

impl UBCMModel {
    /// Build a model from a degree sequence.
    ///
    /// # Errors
    /// - [`ModelError::EmptyDegreeSequence`] / [`ModelError::TooFewNodes`]
    ///   for sequences shorter than two nodes.
    /// - [`ModelError::DegenerateDegree`] if some degree reaches the node
    ///   count.
    ///
    /// Zero degrees are admitted with a non-fatal `log::warn!`.
    pub fn from_degrees(degrees: Array1<usize>, options: UBCMOptions) -> ModelResult<Self> {
        Ok(Self {
            structure: DegreeStructure::from_degrees(degrees)?,
            options,
            results: None,
            fitted_params: None,
            expected: None,
            std_dev: None,
        })
    }

    /// Build a model from anything exposing the graph capability.
    ///
    /// Only the node count and the degree sequence are consumed; edges are
    /// never inspected.
    ///
    /// # Errors
    /// Same as [`UBCMModel::from_degrees`].
    pub fn from_graph<G: DegreeSource>(graph: &G, options: UBCMOptions) -> ModelResult<Self> {
        Self::from_degrees(graph.degree_sequence(), options)
    }

    /// Fit the model by maximum likelihood and cache parameters and
    /// diagnostics.
    ///
    /// ## Steps
    /// 1. Materialize the starting point from `options.init` (explicit
    ///    vectors are validated against the class count here).
    /// 2. Dispatch on `options.method`:
    ///    - `Newton`: maximize `L(θ)` via L-BFGS (`maximize`), driven by the
    ///      analytic gradient.
    ///    - `FixedPoint`: iterate the degree-conservation map in x-space
    ///      (`fixed_point::iterate`).
    /// 3. Normalize the outcome into [`SolveDiagnostics`]; emit a
    ///    `log::warn!` if tolerance was not reached within the iteration
    ///    cap (the best iterate is kept either way).
    /// 4. Store [`UBCMParams`] and invalidate the matrix caches.
    ///
    /// ## Errors
    /// - Guess validation errors
    ///   ([`ModelError::GuessLengthMismatch`] / [`ModelError::NonFiniteGuess`]).
    /// - [`ModelError::SolveFailed`] for structural solver failures
    ///   (line-search breakdown, non-finite iterates). Running out of
    ///   iterations is **not** an error.
    pub fn fit(&mut self) -> ModelResult<()> {
        let (diagnostics, params) = match self.options.method {
            SolveMethod::Newton => {
                let theta0 = self.options.init.initial_theta(&self.structure)?;
                let outcome = maximize(&*self, theta0, &self.structure, &self.options.mle_opts)?;
                let diagnostics = SolveDiagnostics {
                    method: SolveMethod::Newton,
                    converged: outcome.converged,
                    iterations: outcome.iterations,
                    residual_norm: outcome.grad_norm,
                    status: outcome.status,
                };
                (diagnostics, UBCMParams::from_theta(outcome.theta_hat)?)
            }
            SolveMethod::FixedPoint => {
                let x0 = self.options.init.initial_x(&self.structure)?;
                let opts = self.fixed_point_options()?;
                let outcome = fixed_point::iterate(&*self, x0, &self.structure, &opts)?;
                let diagnostics = SolveDiagnostics {
                    method: SolveMethod::FixedPoint,
                    converged: outcome.converged,
                    iterations: outcome.iterations,
                    residual_norm: Some(outcome.step_norm),
                    status: if outcome.converged {
                        "StepToleranceReached".to_string()
                    } else {
                        "MaxItersReached".to_string()
                    },
                };
                (diagnostics, UBCMParams::from_x(outcome.x_hat)?)
            }
        };
        if !diagnostics.converged {
            log::warn!(
                "solver did not reach tolerance within {} iteration(s) ({}); \
                 keeping best iterate as an approximate fit",
                diagnostics.iterations,
                diagnostics.status
            );
        }
        self.results = Some(diagnostics);
        self.fitted_params = Some(params);
        self.expected = None;
        self.std_dev = None;
        Ok(())
    }

    /// Expected adjacency matrix of the fitted ensemble (lazy, cached).
    ///
    /// # Errors
    /// - [`ModelError::NotFitted`] if `fit` has not run.
    pub fn expected_matrix(&mut self) -> ModelResult<&Array2<f64>> {
        if self.expected.is_none() {
            let params = self.fitted_params.as_ref().ok_or(ModelError::NotFitted)?;
            let x_nodes = self.structure.expand_to_nodes(params.x());
            self.expected = Some(matrix::expected_matrix(x_nodes.view()));
        }
        Ok(self.expected.as_ref().unwrap())
    }

    /// Per-entry Bernoulli standard deviation of the fitted ensemble
    /// (lazy, cached).
    ///
    /// # Errors
    /// - [`ModelError::NotFitted`] if `fit` has not run.
    pub fn std_dev_matrix(&mut self) -> ModelResult<&Array2<f64>> {
        if self.std_dev.is_none() {
            let params = self.fitted_params.as_ref().ok_or(ModelError::NotFitted)?;
            let x_nodes = self.structure.expand_to_nodes(params.x());
            self.std_dev = Some(matrix::std_dev_matrix(x_nodes.view()));
        }
        Ok(self.std_dev.as_ref().unwrap())
    }

    /// Draw one independent-edge realization from the fitted ensemble.
    ///
    /// Computes the expected matrix on demand if absent. Each call draws a
    /// fresh realization; no state is shared between calls.
    ///
    /// # Errors
    /// - [`ModelError::NotFitted`] if `fit` has not run.
    pub fn sample(&mut self) -> ModelResult<SampledGraph> {
        let expected = self.expected_matrix()?;
        sample::sample_graph(expected.view())
    }

    /// Immutable reduced structure backing this model.
    pub fn structure(&self) -> &DegreeStructure {
        &self.structure
    }

    /// Solve configuration.
    pub fn options(&self) -> &UBCMOptions {
        &self.options
    }

    /// Diagnostics of the last solve, if any.
    pub fn results(&self) -> Option<&SolveDiagnostics> {
        self.results.as_ref()
    }

    /// Fitted parameters, if any.
    pub fn fitted_params(&self) -> Option<&UBCMParams> {
        self.fitted_params.as_ref()
    }

    /// Status flags mirroring which stages have run.
    pub fn status(&self) -> ModelStatus {
        ModelStatus {
            parameters_computed: self.fitted_params.is_some(),
            matrix_computed: self.expected.is_some(),
            variance_computed: self.std_dev.is_some(),
        }
    }

    /// Derive fixed-point options from the shared tolerances.
    ///
    /// `tol_grad` (falling back to `tol_cost`, then [`DEFAULT_STEP_TOL`])
    /// plays the step-tolerance role; `max_iter` falls back to
    /// [`DEFAULT_SWEEP_CAP`].
    fn fixed_point_options(&self) -> ModelResult<FixedPointOptions> {
        let tols = &self.options.mle_opts.tols;
        let tol_step = tols.tol_grad.or(tols.tol_cost).unwrap_or(DEFAULT_STEP_TOL);
        let max_iter = tols.max_iter.unwrap_or(DEFAULT_SWEEP_CAP);
        Ok(FixedPointOptions::new(tol_step, max_iter)?)
    }
}

impl LogLikelihood for UBCMModel {
    type Data = DegreeStructure;

    /// Reduced log-likelihood `L(θ)` against the model's degree structure.
    fn value(&self, theta: &Theta, data: &Self::Data) -> OptResult<Cost> {
        Ok(log_likelihood(theta.view(), data.values(), data.multiplicities()))
    }

    /// Analytic gradient `∇L(θ)` (degree-conservation residual).
    fn grad(&self, theta: &Theta, data: &Self::Data) -> OptResult<Grad> {
        Ok(gradient(theta.view(), data.values(), data.multiplicities()))
    }

    /// Validate a θ-vector: class-count length and finite entries.
    fn check(&self, theta: &Theta, data: &Self::Data) -> OptResult<()> {
        if theta.len() != data.class_count() {
            return Err(ModelError::GuessLengthMismatch {
                expected: data.class_count(),
                actual: theta.len(),
            }
            .into());
        }
        for (index, &value) in theta.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::InvalidThetaInput { index, value });
            }
        }
        Ok(())
    }
}

impl FixedPointMap for UBCMModel {
    type Data = DegreeStructure;

    /// One application of the degree-conservation map in x-space.
    fn apply(&self, x: &Array1<f64>, data: &Self::Data) -> OptResult<Array1<f64>> {
        Ok(fixed_point_map(x.view(), data.values(), data.multiplicities()))
    }

    /// Validate a starting x-vector: class-count length, finite,
    /// non-negative.
    fn check(&self, x0: &Array1<f64>, data: &Self::Data) -> OptResult<()> {
        if x0.len() != data.class_count() {
            return Err(ModelError::GuessLengthMismatch {
                expected: data.class_count(),
                actual: x0.len(),
            }
            .into());
        }
        for (index, &value) in x0.iter().enumerate() {
            if !value.is_finite() {
                return Err(OptError::NonFiniteIterate { index, value });
            }
            if value < 0.0 {
                return Err(OptError::NegativeIterate { index, value });
            }
        }
        Ok(())
    }
}
