//! Exact solvers: the brute-force oracle and the Del Corso-Manzini
//! branch-and-bound family.

pub mod brute_force;
pub mod dcm;

pub use brute_force::brute_force_component;
pub use dcm::{dcm_component, dcm_component_with_k, default_perimeter_depth};
