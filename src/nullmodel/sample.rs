//! Independent-edge sampling from an expected adjacency matrix.
//!
//! Purpose
//! -------
//! Draw one graph realization from a fitted ensemble: for every unordered
//! pair `i < j`, an independent Bernoulli trial with success probability
//! `p_ij` decides whether the edge is present. Each call produces a fresh
//! realization from the thread-local RNG; no state is shared between
//! calls and no reproducibility across runs is promised.

use ndarray::{Array2, ArrayView2};
use rand_distr::{Bernoulli, Distribution};

use crate::nullmodel::{
    core::graph::SampledGraph,
    errors::{ModelError, ModelResult},
};

/// Draw one independent-edge realization from an expected matrix.
///
/// # Behavior
/// Walks the upper triangle of `expected`, draws a Bernoulli trial per
/// pair, and mirrors successes into a symmetric 0/1 adjacency with zero
/// diagonal.
///
/// # Errors
/// - [`ModelError::InvalidEdgeProbability`] if an entry is outside
///   `[0, 1]` (possible only if the caller hands a matrix that did not
///   come from a fitted model).
pub fn sample_graph(expected: ArrayView2<'_, f64>) -> ModelResult<SampledGraph> {
    let n = expected.nrows();
    let mut adjacency = Array2::<u8>::zeros((n, n));
    let mut rng = rand::rng();
    for i in 0..n {
        for j in (i + 1)..n {
            let p = expected[[i, j]];
            let trial = Bernoulli::new(p).map_err(|_| ModelError::InvalidEdgeProbability {
                row: i,
                col: j,
                value: p,
            })?;
            if trial.sample(&mut rng) {
                adjacency[[i, j]] = 1;
                adjacency[[j, i]] = 1;
            }
        }
    }
    Ok(SampledGraph::new(adjacency))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Degenerate probabilities (0 and 1) producing deterministic edges.
    // - Symmetry and zero diagonal of realizations.
    // - Rejection of out-of-range probabilities.
    //
    // They intentionally DO NOT cover:
    // - Monte-Carlo agreement with the expected matrix (integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that probabilities of exactly 0 and 1 produce deterministic
    // absent/present edges and a symmetric realization.
    //
    // Given
    // -----
    // - A 3-node expected matrix with p_01 = 1, p_02 = 0, p_12 = 1.
    //
    // Expect
    // ------
    // - Degrees [1, 2, 1], zero diagonal, symmetric adjacency.
    fn degenerate_probabilities_are_deterministic() {
        // Arrange
        let expected = array![[0.0, 1.0, 0.0], [1.0, 0.0, 1.0], [0.0, 1.0, 0.0]];

        // Act
        let graph = sample_graph(expected.view()).expect("probabilities are admissible");

        // Assert
        let adj = graph.adjacency();
        assert_eq!(adj[[0, 1]], 1);
        assert_eq!(adj[[0, 2]], 0);
        assert_eq!(adj[[1, 2]], 1);
        for i in 0..3 {
            assert_eq!(adj[[i, i]], 0);
            for j in 0..3 {
                assert_eq!(adj[[i, j]], adj[[j, i]]);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that an out-of-range probability is rejected with the pair's
    // coordinates.
    //
    // Given
    // -----
    // - A matrix containing p_01 = 1.5.
    //
    // Expect
    // ------
    // - `InvalidEdgeProbability { row: 0, col: 1, .. }`.
    fn rejects_out_of_range_probabilities() {
        let expected = array![[0.0, 1.5], [1.5, 0.0]];
        assert!(matches!(
            sample_graph(expected.view()),
            Err(ModelError::InvalidEdgeProbability { row: 0, col: 1, .. })
        ));
    }
}
