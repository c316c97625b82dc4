//! The result record returned by [`crate::minimize_bandwidth`].

use crate::matrix::Matrix;
use crate::solver::SolverTag;

/// The outcome of minimizing (or approximating) a matrix's bandwidth.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandwidthResult {
    /// The original, unpermuted matrix this result was computed from. Owned
    /// rather than borrowed: `minimize_bandwidth` takes `&[Vec<f64>]`, not a
    /// handle it could alias past the call, so the result carries its own
    /// copy instead of a reference.
    pub input_ref: Matrix,
    /// Achieved bandwidth `k*` of the matrix permuted by `ordering`.
    pub bandwidth: usize,
    /// A permutation of `{1..n}`: `ordering[k]` is the original row/column
    /// index (1-indexed) placed at new position `k + 1`.
    pub ordering: Vec<usize>,
    /// Which solver produced this result.
    pub solver_tag: SolverTag,
}

/// The outcome of the decision-version query
/// [`crate::has_bandwidth_k_ordering`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BandwidthDecision {
    pub has_ordering: bool,
    /// A witnessing 1-indexed ordering, present iff `has_ordering`.
    pub ordering: Option<Vec<usize>>,
}
