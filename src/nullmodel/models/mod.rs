//! Model implementations and the closed model capability set.
//!
//! Purpose
//! -------
//! Host the concrete null-model types and the capability trait they all
//! expose. The trait is a deliberately closed, explicit surface: extending
//! the crate to the directed or weighted variants means adding a new
//! implementer of [`MaxEntNullModel`] next to [`UBCMModel`], not deriving
//! from it.
//!
//! Key behaviors
//! -------------
//! - [`ubcm`]: the undirected degree-constrained model (the one complete
//!   implementation).
//! - [`MaxEntNullModel`]: the shared capability set {degree sequence,
//!   log-likelihood, gradient, expected matrix, dispersion, sample}.

use ndarray::{Array1, Array2};

use crate::{
    nullmodel::{core::graph::SampledGraph, errors::ModelResult},
    optimization::{
        errors::OptResult,
        loglik_optimizer::{Grad, LogLikelihood, Theta},
    },
};

pub mod ubcm;

pub use self::ubcm::UBCMModel;

/// Capability set shared by every maximum-entropy null model in the crate.
///
/// Mirrors the model lifecycle: interrogate the constraint (degree
/// sequence), evaluate the objective and its gradient at arbitrary
/// parameters, and reconstruct/sample from the fitted ensemble. The
/// reconstruction methods take `&mut self` because their results are
/// computed lazily and cached on the model.
pub trait MaxEntNullModel {
    /// Degree sequence the model is constrained on.
    fn degree_sequence(&self) -> Array1<usize>;

    /// Reduced log-likelihood at `theta`.
    fn log_likelihood(&self, theta: &Theta) -> OptResult<f64>;

    /// Analytic gradient of the reduced log-likelihood at `theta`.
    fn gradient(&self, theta: &Theta) -> OptResult<Grad>;

    /// Expected adjacency matrix (requires a prior fit).
    fn expected_matrix(&mut self) -> ModelResult<&Array2<f64>>;

    /// Per-entry Bernoulli standard deviation (requires a prior fit).
    fn std_dev_matrix(&mut self) -> ModelResult<&Array2<f64>>;

    /// One independent-edge realization (requires a prior fit).
    fn sample(&mut self) -> ModelResult<SampledGraph>;
}

impl MaxEntNullModel for UBCMModel {
    fn degree_sequence(&self) -> Array1<usize> {
        self.structure().degrees().to_owned()
    }

    fn log_likelihood(&self, theta: &Theta) -> OptResult<f64> {
        self.value(theta, self.structure())
    }

    fn gradient(&self, theta: &Theta) -> OptResult<Grad> {
        self.grad(theta, self.structure())
    }

    fn expected_matrix(&mut self) -> ModelResult<&Array2<f64>> {
        UBCMModel::expected_matrix(self)
    }

    fn std_dev_matrix(&mut self) -> ModelResult<&Array2<f64>> {
        UBCMModel::std_dev_matrix(self)
    }

    fn sample(&mut self) -> ModelResult<SampledGraph> {
        UBCMModel::sample(self)
    }
}
