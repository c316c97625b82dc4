//! The pseudo-peripheral-node heuristic family: Cuthill-McKee, Reverse
//! Cuthill-McKee, and Gibbs-Poole-Stockmeyer.

pub mod cm;
pub mod gps;

pub use cm::{cuthill_mckee_ordering, reverse_cuthill_mckee_ordering};
pub use gps::gibbs_poole_stockmeyer_ordering;
