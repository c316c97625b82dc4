//! Bandwidth, profile, and lower-bound utilities.

use crate::adjacency::Adjacency;
use crate::error::{BandwidthError, Result};
use crate::matrix::Matrix;

/// `bandwidth(A)`: the largest `|i - j|` over off-diagonal structural
/// nonzeros, or 0 if there are none.
pub fn bandwidth(matrix: &Matrix) -> usize {
    let n = matrix.order();
    let mut max_span = 0usize;
    for i in 0..n {
        for j in 0..n {
            if i != j && matrix.is_nonzero(i, j) {
                max_span = max_span.max(i.abs_diff(j));
            }
        }
    }
    max_span
}

/// Bandwidth of the graph view under a given (0-indexed) vertex ordering:
/// the largest distance, in `ordering`, between two adjacent vertices.
/// `ordering[k]` is the original vertex placed at position `k`.
pub fn bandwidth_of_ordering(adjacency: &Adjacency, ordering: &[usize]) -> usize {
    let mut position = vec![0usize; ordering.len()];
    for (pos, &v) in ordering.iter().enumerate() {
        position[v] = pos;
    }
    let mut max_span = 0usize;
    for (pos_u, &u) in ordering.iter().enumerate() {
        for v in adjacency.neighbors(u) {
            max_span = max_span.max(pos_u.abs_diff(position[v]));
        }
    }
    max_span
}

/// Which axis `profile` sums its envelope over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileDim {
    Col,
    Row,
}

impl TryFrom<&str> for ProfileDim {
    type Error = BandwidthError;

    fn try_from(value: &str) -> Result<Self> {
        match value {
            "col" | "column" => Ok(ProfileDim::Col),
            "row" => Ok(ProfileDim::Row),
            other => Err(BandwidthError::UnknownProfileDimension(other.to_string())),
        }
    }
}

/// `profile(A, dim)`: for each column (or row), the distance from the
/// diagonal to the topmost (or leftmost) structural nonzero strictly above
/// (or left of) it, summed over the whole matrix. Diagonal entries are
/// never examined, so they cannot affect the result.
pub fn profile(matrix: &Matrix, dim: ProfileDim) -> usize {
    let n = matrix.order();
    let mut total = 0usize;
    match dim {
        ProfileDim::Col => {
            for j in 0..n {
                let mut top = j;
                for i in 0..j {
                    if matrix.is_nonzero(i, j) {
                        top = i;
                        break;
                    }
                }
                total += j - top;
            }
        }
        ProfileDim::Row => {
            for i in 0..n {
                let mut left = i;
                for j in 0..i {
                    if matrix.is_nonzero(i, j) {
                        left = j;
                        break;
                    }
                }
                total += i - left;
            }
        }
    }
    total
}

/// `bandwidth_lower_bound(A)`: `max_v ceil((deg(v) + 1) / 2) - 1`, clamped to
/// `[0, n - 1]`. A necessary condition any exact bandwidth must satisfy.
pub fn bandwidth_lower_bound(matrix: &Matrix) -> usize {
    let n = matrix.order();
    if n <= 1 {
        return 0;
    }
    let adjacency = Adjacency::from_matrix(matrix);
    let bound = (0..n)
        .map(|v| (adjacency.degree(v) + 1).div_ceil(2).saturating_sub(1))
        .max()
        .unwrap_or(0);
    bound.min(n - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn bandwidth_of_zero_matrix_is_zero() {
        assert_eq!(bandwidth(&Matrix::zeros(5)), 0);
    }

    #[test]
    fn bandwidth_ignores_diagonal() {
        let m = Matrix::from_fn(4, |i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(bandwidth(&m), 0);
    }

    #[test]
    fn bandwidth_of_complete_graph() {
        let m = Matrix::from_fn(5, |i, j| if i != j { 1.0 } else { 0.0 });
        assert_eq!(bandwidth(&m), 4);
    }

    #[test]
    fn profile_dim_parses_known_tags() {
        assert_eq!(ProfileDim::try_from("col").unwrap(), ProfileDim::Col);
        assert_eq!(ProfileDim::try_from("column").unwrap(), ProfileDim::Col);
        assert_eq!(ProfileDim::try_from("row").unwrap(), ProfileDim::Row);
        assert!(ProfileDim::try_from("diagonal").is_err());
    }

    #[test]
    fn profile_is_invariant_to_diagonal_contents() {
        let base = Matrix::from_rows(vec![
            vec![0.0, 1.0, 0.0],
            vec![1.0, 0.0, 1.0],
            vec![0.0, 1.0, 0.0],
        ])
        .unwrap();
        let zero_diag = base.clone();
        let mut one_diag = base.clone();
        for i in 0..3 {
            one_diag.set(i, i, 1.0);
        }
        assert_eq!(profile(&base, ProfileDim::Col), profile(&zero_diag, ProfileDim::Col));
        assert_eq!(profile(&base, ProfileDim::Col), profile(&one_diag, ProfileDim::Col));
    }

    #[test]
    fn lower_bound_never_exceeds_range() {
        let m = Matrix::from_fn(6, |i, j| if i != j { 1.0 } else { 0.0 });
        let lb = bandwidth_lower_bound(&m);
        assert!(lb <= 5);
    }
}
