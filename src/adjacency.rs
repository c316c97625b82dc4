//! Symmetric boolean adjacency derived from a matrix's structural pattern.
//!
//! Provides `symmetrize`, `is_structurally_symmetric`, and the graph view
//! (`neighbors`, `degree`) every later algorithm builds on.

use crate::bitset::Bitset;
use crate::matrix::Matrix;

/// A symmetric boolean adjacency matrix of order `n`, one `Bitset` row per
/// vertex. Self-loops are never set: they never affect bandwidth or any
/// traversal here.
#[derive(Debug, Clone)]
pub struct Adjacency {
    rows: Vec<Bitset>,
}

impl Adjacency {
    /// Build the symmetrized structural adjacency of `matrix`:
    /// `Â[i,j] = (A[i,j] != 0) || (A[j,i] != 0)`.
    pub fn from_matrix(matrix: &Matrix) -> Self {
        let n = matrix.order();
        let mut rows = vec![Bitset::new(n); n];
        for i in 0..n {
            for j in 0..n {
                if i == j {
                    continue;
                }
                if matrix.is_nonzero(i, j) || matrix.is_nonzero(j, i) {
                    rows[i].set(j);
                }
            }
        }
        Self { rows }
    }

    /// Build an adjacency directly from an explicit, already-symmetric edge
    /// relation. Used internally to build induced subgraphs for components
    /// and for caller-supplied node selectors.
    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut rows = vec![Bitset::new(n); n];
        for (u, v) in edges {
            if u == v {
                continue;
            }
            rows[u].set(v);
            rows[v].set(u);
        }
        Self { rows }
    }

    pub fn order(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.rows[u].get(v)
    }

    #[inline]
    pub fn degree(&self, v: usize) -> usize {
        self.rows[v].count_ones()
    }

    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + '_ {
        self.rows[v].iter_ones()
    }

    pub(crate) fn row(&self, v: usize) -> &Bitset {
        &self.rows[v]
    }

    /// Build the induced subgraph on `component`, relabeled `0..component.len()`
    /// in the order given. Returns the subgraph and the local-to-global index map.
    pub fn induced_subgraph(&self, component: &[usize]) -> (Adjacency, Vec<usize>) {
        let local_of: indexmap::IndexMap<usize, usize> = component
            .iter()
            .enumerate()
            .map(|(local, &global)| (global, local))
            .collect();
        let m = component.len();
        let mut rows = vec![Bitset::new(m); m];
        for (local_u, &global_u) in component.iter().enumerate() {
            for global_v in self.neighbors(global_u) {
                if let Some(&local_v) = local_of.get(&global_v) {
                    rows[local_u].set(local_v);
                }
            }
        }
        (Adjacency { rows }, component.to_vec())
    }
}

/// `is_structurally_symmetric(A)`: true iff the nonzero pattern equals its
/// transpose for every off-diagonal pair.
pub fn is_structurally_symmetric(matrix: &Matrix) -> bool {
    let n = matrix.order();
    for i in 0..n {
        for j in (i + 1)..n {
            if matrix.is_nonzero(i, j) != matrix.is_nonzero(j, i) {
                return false;
            }
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::Matrix;

    #[test]
    fn symmetrize_unions_both_directions() {
        let m = Matrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0],
            vec![1.0, 0.0, 0.0],
        ])
        .unwrap();
        let adj = Adjacency::from_matrix(&m);
        assert!(adj.has_edge(0, 1));
        assert!(adj.has_edge(1, 0));
        assert!(adj.has_edge(0, 2));
        assert!(adj.has_edge(2, 0));
        assert!(!adj.has_edge(1, 2));
    }

    #[test]
    fn self_loops_are_ignored() {
        let m = Matrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
        let adj = Adjacency::from_matrix(&m);
        assert!(!adj.has_edge(0, 0));
        assert_eq!(adj.degree(0), 0);
    }

    #[test]
    fn structural_symmetry_predicate() {
        let symmetric = Matrix::from_rows(vec![vec![0.0, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(is_structurally_symmetric(&symmetric));

        let asymmetric = Matrix::from_rows(vec![vec![0.0, 1.0], vec![0.0, 0.0]]).unwrap();
        assert!(!is_structurally_symmetric(&asymmetric));
    }

    #[test]
    fn induced_subgraph_relabels_locally() {
        // path 0-1-2-3, component = {1,2,3}
        let adj = Adjacency::from_edges(4, [(0, 1), (1, 2), (2, 3)]);
        let (sub, map) = adj.induced_subgraph(&[1, 2, 3]);
        assert_eq!(map, vec![1, 2, 3]);
        assert!(sub.has_edge(0, 1)); // local 0 == global 1, local 1 == global 2
        assert!(sub.has_edge(1, 2));
        assert!(!sub.has_edge(0, 2));
    }
}
