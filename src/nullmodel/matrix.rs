//! Dense reconstruction of the expected adjacency and its dispersion.
//!
//! Purpose
//! -------
//! Expand fitted per-class parameters to per-node values and reconstruct
//! the two dense `n×n` summaries of the fitted ensemble: the expected
//! adjacency matrix (per-pair edge probabilities) and the per-entry
//! Bernoulli standard deviation. For nodes `i ≠ j` with per-node
//! transformed parameters `x_i`, `x_j`:
//!
//! ```text
//! p_ij = x_i x_j / (1 + x_i x_j)
//! σ_ij = sqrt(x_i x_j) / (1 + x_i x_j)     (σ_ij² = p_ij (1 - p_ij))
//! ```
//!
//! Both matrices are symmetric with zero diagonal (no self-loops).
//!
//! Concurrency
//! -----------
//! Every entry depends only on its own pair, so construction is
//! embarrassingly parallel: rows are computed concurrently through
//! ndarray's parallel axis iterator, each row written exactly once with no
//! shared mutable state. The per-cell arithmetic is identical to the
//! sequential form; only the row schedule varies.

use ndarray::parallel::prelude::*;
use ndarray::{Array2, ArrayView1, Axis};

/// Expected adjacency matrix from per-node transformed parameters.
///
/// Returns the symmetric `n×n` matrix with entries
/// `p_ij = x_i x_j / (1 + x_i x_j)` off the diagonal and zeros on it.
pub fn expected_matrix(x_nodes: ArrayView1<'_, f64>) -> Array2<f64> {
    let n = x_nodes.len();
    let mut matrix = Array2::zeros((n, n));
    matrix
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let xi = x_nodes[i];
            for j in 0..n {
                if j != i {
                    let t = xi * x_nodes[j];
                    row[j] = t / (1.0 + t);
                }
            }
        });
    matrix
}

/// Per-entry Bernoulli standard deviation from per-node transformed
/// parameters.
///
/// Returns the symmetric `n×n` matrix with entries
/// `σ_ij = sqrt(x_i x_j) / (1 + x_i x_j)` off the diagonal and zeros on
/// it. Results are written directly into the returned matrix.
pub fn std_dev_matrix(x_nodes: ArrayView1<'_, f64>) -> Array2<f64> {
    let n = x_nodes.len();
    let mut matrix = Array2::zeros((n, n));
    matrix
        .axis_iter_mut(Axis(0))
        .into_par_iter()
        .enumerate()
        .for_each(|(i, mut row)| {
            let xi = x_nodes[i];
            for j in 0..n {
                if j != i {
                    let t = xi * x_nodes[j];
                    row[j] = t.sqrt() / (1.0 + t);
                }
            }
        });
    matrix
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Per-entry formulas against hand-computed values.
    // - Symmetry, zero diagonal, and the variance identity σ² = p(1-p).
    // - Zero parameters producing zero rows (isolated nodes).
    //
    // They intentionally DO NOT cover:
    // - Degree consistency of fitted models (integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Pin the per-entry formulas on a hand-computed 3-node instance.
    //
    // Given
    // -----
    // - x = [1, 2, 0.5].
    //
    // Expect
    // ------
    // - p_01 = 2/3, p_02 = 1/3, p_12 = 1/2, matching entries transposed,
    //   and zero diagonal.
    fn matches_hand_computed_probabilities() {
        // Arrange
        let x = array![1.0, 2.0, 0.5];

        // Act
        let p = expected_matrix(x.view());

        // Assert
        assert_abs_diff_eq!(p[[0, 1]], 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[0, 2]], 1.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(p[[1, 2]], 0.5, epsilon = 1e-12);
        for i in 0..3 {
            assert_eq!(p[[i, i]], 0.0);
            for j in 0..3 {
                assert_abs_diff_eq!(p[[i, j]], p[[j, i]], epsilon = 1e-15);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify the Bernoulli dispersion identity between the two matrices.
    //
    // Given
    // -----
    // - x = [0.3, 1.7, 0.9, 2.4].
    //
    // Expect
    // ------
    // - σ_ij² == p_ij (1 - p_ij) within 1e-12 for every off-diagonal pair,
    //   and σ entries in (0, 0.5].
    fn std_dev_satisfies_variance_identity() {
        // Arrange
        let x = array![0.3, 1.7, 0.9, 2.4];

        // Act
        let p = expected_matrix(x.view());
        let sigma = std_dev_matrix(x.view());

        // Assert
        for i in 0..4 {
            for j in 0..4 {
                if i != j {
                    assert_abs_diff_eq!(
                        sigma[[i, j]] * sigma[[i, j]],
                        p[[i, j]] * (1.0 - p[[i, j]]),
                        epsilon = 1e-12
                    );
                    assert!(sigma[[i, j]] > 0.0 && sigma[[i, j]] <= 0.5);
                }
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Verify that a zero parameter yields a zero row and column (isolated
    // node).
    //
    // Given
    // -----
    // - x = [0, 1, 1].
    //
    // Expect
    // ------
    // - Row 0 and column 0 are identically zero in both matrices.
    fn zero_parameter_isolates_node() {
        let x = array![0.0, 1.0, 1.0];
        let p = expected_matrix(x.view());
        let sigma = std_dev_matrix(x.view());
        for j in 0..3 {
            assert_eq!(p[[0, j]], 0.0);
            assert_eq!(p[[j, 0]], 0.0);
            assert_eq!(sigma[[0, j]], 0.0);
            assert_eq!(sigma[[j, 0]], 0.0);
        }
    }
}
