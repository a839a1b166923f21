//! Graph capability trait and sampled realizations.
//!
//! The core never inspects edges of an input graph: all it consumes is a
//! node count and a per-node degree sequence, captured by the
//! [`DegreeSource`] trait. Any graph representation (adjacency list,
//! edge list, a foreign graph library's type) can feed a model by
//! implementing these two methods. Sampled realizations produced by the
//! model implement the same trait, so a sample can seed a new model
//! directly.

use ndarray::{Array1, Array2, ArrayView2};

/// Capability consumed by model construction: a node count and a degree
/// sequence, nothing more.
pub trait DegreeSource {
    /// Number of nodes.
    fn node_count(&self) -> usize;

    /// Per-node degree sequence, in node order.
    fn degree_sequence(&self) -> Array1<usize>;
}

/// One independent-edge realization drawn from a fitted model.
///
/// Stores a symmetric 0/1 adjacency matrix with zero diagonal. Implements
/// [`DegreeSource`], so realizations can be fed back into model
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledGraph {
    adjacency: Array2<u8>,
}

impl SampledGraph {
    /// Wrap a symmetric 0/1 adjacency matrix.
    pub(crate) fn new(adjacency: Array2<u8>) -> Self {
        Self { adjacency }
    }

    /// Symmetric 0/1 adjacency matrix of the realization.
    pub fn adjacency(&self) -> ArrayView2<'_, u8> {
        self.adjacency.view()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|&v| v as usize).sum::<usize>() / 2
    }
}

impl DegreeSource for SampledGraph {
    fn node_count(&self) -> usize {
        self.adjacency.nrows()
    }

    fn degree_sequence(&self) -> Array1<usize> {
        Array1::from_iter(
            self.adjacency.rows().into_iter().map(|row| {
                row.iter().map(|&v| v as usize).sum()
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Degree-sequence and edge-count extraction from a known adjacency.
    //
    // They intentionally DO NOT cover:
    // - Sampling itself (sample.rs and integration tests).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify `DegreeSource` extraction from a fixed 3-node path graph.
    //
    // Given
    // -----
    // - The adjacency of the path 0 - 1 - 2.
    //
    // Expect
    // ------
    // - node_count = 3, degrees = [1, 2, 1], edge_count = 2.
    fn extracts_degrees_from_adjacency() {
        // Arrange
        let adjacency = array![[0u8, 1, 0], [1, 0, 1], [0, 1, 0]];

        // Act
        let graph = SampledGraph::new(adjacency);

        // Assert
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.degree_sequence(), array![1usize, 2, 1]);
        assert_eq!(graph.edge_count(), 2);
    }
}
