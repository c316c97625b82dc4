//! Domain-level errors.
//!
//! Two classes, per the design: input validation (caller bug, reported
//! synchronously before anything is mutated) and unimplemented solvers
//! (a known tag with no backend yet).

use thiserror::Error;

/// Errors produced by this crate's public API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BandwidthError {
    /// The input was not a square matrix.
    #[error("matrix is not square: {rows} rows x {cols} columns")]
    NonSquareInput { rows: usize, cols: usize },

    /// `profile`'s dimension tag did not resolve to `col` or `row`.
    #[error("unknown profile dimension: {0:?}")]
    UnknownProfileDimension(String),

    /// An exact solver requires structural symmetry and the input lacks it.
    #[error("solver requires a structurally symmetric input")]
    StructuralAsymmetry,

    /// A recognized solver tag has no backend implementation.
    #[error("solver not implemented: {0}")]
    NotImplemented(String),

    /// A caller-supplied node selector returned an index outside the component.
    #[error("invalid selector: {0}")]
    InvalidSelector(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BandwidthError>;
