//! Degree-sequence reduction: unique values, multiplicities, and index maps.
//!
//! Purpose
//! -------
//! Compress a degree sequence into its unique values with multiplicities.
//! Nodes sharing a degree share a maximum-likelihood parameter, so the
//! solver works in the reduced space of degree classes (size `m ≤ n`)
//! instead of per-node space; for heavy-tailed real networks this shrinks
//! the optimization problem by orders of magnitude. The reduction is the
//! structural, immutable half of a model: it is built once, validated
//! eagerly, and never mutated afterwards.
//!
//! Key behaviors
//! -------------
//! - Sort-based grouping of the sequence into strictly ascending unique
//!   values with per-class multiplicities (linearithmic; cheap next to the
//!   O(n²) matrix stages downstream).
//! - Maintain both directions of the class mapping: `node_to_class` (one
//!   class index per node) and `class_members` (full membership list per
//!   class), so per-class quantities expand back to per-node quantities
//!   without re-scanning the sequence.
//! - Reject sequences the model cannot represent: fewer than two nodes, or
//!   a degree reaching the node count.
//! - Warn (non-fatally) when zero degrees are present; isolated nodes push
//!   their parameter toward infinity and slow convergence.
//!
//! Invariants & assumptions
//! ------------------------
//! - `values` is strictly increasing with no duplicates,
//!   `values.len() == multiplicities.len() == class_count`.
//! - `sum(multiplicities) == node_count` and
//!   `values[node_to_class[i]] == degrees[i] as f64` for every node `i`.
//! - `class_members[k]` lists exactly the nodes whose degree is
//!   `values[k]`; the lists partition `0..node_count`.
//! - All fields are fixed at construction; the type exposes read-only
//!   views only.

use ndarray::{Array1, ArrayView1};

use crate::nullmodel::{
    core::validation::validate_degree_sequence,
    errors::ModelResult,
};

/// Immutable reduced representation of a degree sequence.
///
/// Produced by [`DegreeStructure::from_degrees`]; holds the original
/// sequence, the ascending unique degree values with multiplicities, and
/// the index maps between node space and class space. One instance backs
/// one fitted model and is shared read-only across the likelihood, matrix,
/// and sampling stages.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeStructure {
    /// Original per-node degree sequence, in input order.
    degrees: Array1<usize>,
    /// Unique degree values, strictly ascending, as `f64` for the numerics.
    values: Array1<f64>,
    /// Per-class node counts, aligned with `values`.
    multiplicities: Array1<f64>,
    /// For each node, the index of its degree class in `values`.
    node_to_class: Vec<usize>,
    /// For each class, the nodes belonging to it.
    class_members: Vec<Vec<usize>>,
}

impl DegreeStructure {
    /// Reduce a degree sequence into classes with multiplicities.
    ///
    /// # Behavior
    /// 1. Validates the sequence (length ≥ 2, `max(d) < n`).
    /// 2. Warns via `log::warn!` if any degree is zero.
    /// 3. Sorts node indices by degree and walks the runs, assembling the
    ///    unique values, multiplicities, and both index maps in one pass.
    ///
    /// # Errors
    /// - [`crate::nullmodel::errors::ModelError::EmptyDegreeSequence`] /
    ///   [`crate::nullmodel::errors::ModelError::TooFewNodes`] for sequences
    ///   shorter than two nodes.
    /// - [`crate::nullmodel::errors::ModelError::DegenerateDegree`] if some
    ///   degree reaches the node count.
    pub fn from_degrees(degrees: Array1<usize>) -> ModelResult<Self> {
        validate_degree_sequence(degrees.view())?;
        let zero_count = degrees.iter().filter(|&&d| d == 0).count();
        if zero_count > 0 {
            log::warn!(
                "degree sequence contains {zero_count} zero-degree node(s); \
                 expect slow solver convergence"
            );
        }

        let n = degrees.len();
        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| degrees[i]);

        let mut unique: Vec<usize> = Vec::new();
        let mut multiplicities: Vec<f64> = Vec::new();
        let mut class_members: Vec<Vec<usize>> = Vec::new();
        let mut node_to_class = vec![0usize; n];
        for &i in &order {
            let d = degrees[i];
            if unique.last() != Some(&d) {
                unique.push(d);
                multiplicities.push(0.0);
                class_members.push(Vec::new());
            }
            let k = unique.len() - 1;
            node_to_class[i] = k;
            multiplicities[k] += 1.0;
            class_members[k].push(i);
        }

        let values = Array1::from_iter(unique.into_iter().map(|v| v as f64));
        Ok(Self {
            degrees,
            values,
            multiplicities: Array1::from(multiplicities),
            node_to_class,
            class_members,
        })
    }

    /// Original per-node degree sequence.
    pub fn degrees(&self) -> ArrayView1<'_, usize> {
        self.degrees.view()
    }

    /// Unique degree values, strictly ascending.
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }

    /// Per-class multiplicities, aligned with [`DegreeStructure::values`].
    pub fn multiplicities(&self) -> ArrayView1<'_, f64> {
        self.multiplicities.view()
    }

    /// Class index of each node.
    pub fn node_to_class(&self) -> &[usize] {
        &self.node_to_class
    }

    /// Member nodes of each class.
    pub fn class_members(&self) -> &[Vec<usize>] {
        &self.class_members
    }

    /// Number of nodes in the original sequence.
    pub fn node_count(&self) -> usize {
        self.degrees.len()
    }

    /// Number of distinct degree classes.
    pub fn class_count(&self) -> usize {
        self.values.len()
    }

    /// Ratio of distinct degree values to nodes, in `(0, 1]`.
    ///
    /// Measures how much the reduced parametrization shrinks the
    /// optimization problem; heavy degree repetition drives this toward 0.
    pub fn compression_ratio(&self) -> f64 {
        self.class_count() as f64 / self.node_count() as f64
    }

    /// Expand a per-class vector to a per-node vector via the membership
    /// lists.
    ///
    /// # Panics
    /// Panics if `per_class.len() != self.class_count()`; callers pass
    /// vectors produced from this structure, so a mismatch is a programming
    /// error rather than an input error.
    pub fn expand_to_nodes(&self, per_class: ArrayView1<'_, f64>) -> Array1<f64> {
        assert_eq!(per_class.len(), self.class_count(), "per-class vector length mismatch");
        let mut per_node = Array1::zeros(self.node_count());
        for (k, members) in self.class_members.iter().enumerate() {
            for &i in members {
                per_node[i] = per_class[k];
            }
        }
        per_node
    }
}
