//! Matrix bandwidth minimization: exact branch-and-bound (Del Corso-Manzini,
//! optionally with perimeter-search lookahead) and pseudo-peripheral-node
//! heuristics (Cuthill-McKee, Reverse Cuthill-McKee, Gibbs-Poole-Stockmeyer).
//!
//! The entry points are [`minimize_bandwidth`] and [`has_bandwidth_k_ordering`]:
//! given a square matrix and a [`Solver`], find a row/column permutation that
//! minimizes (or, for the decision version, achieves at most `k`) bandwidth,
//! the largest distance of any structural nonzero from the diagonal.
//!
//! Algorithms operate on the matrix's structural nonzero pattern only;
//! numeric values are never compared for magnitude, only for zero/nonzero.
//! The pattern is symmetrized into an undirected graph before search
//! (self-loops ignored), decomposed into connected components, and each
//! component is solved independently before the orderings are concatenated.

mod adjacency;
mod bitset;
mod components;
mod dispatch;
mod error;
mod exact;
mod heuristic;
mod levels;
mod matrix;
mod measure;
mod pseudo_peripheral;
mod result;
mod solver;

pub use adjacency::is_structurally_symmetric;
pub use dispatch::{connected_components, has_bandwidth_k_ordering, minimize_bandwidth};
pub use error::{BandwidthError, Result};
pub use matrix::Matrix;
pub use measure::{bandwidth, bandwidth_lower_bound, profile, ProfileDim};
pub use pseudo_peripheral::NodeSelector;
pub use result::{BandwidthDecision, BandwidthResult};
pub use solver::{Solver, SolverTag};
