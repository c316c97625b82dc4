//! The `Solver` tagged variant and the routing logic that turns a solver
//! choice into a concatenated, per-component ordering.

use crate::adjacency::Adjacency;
use crate::error::{BandwidthError, Result};
use crate::exact::{brute_force_component, dcm_component, default_perimeter_depth};
use crate::heuristic::{cuthill_mckee_ordering, gibbs_poole_stockmeyer_ordering, reverse_cuthill_mckee_ordering};
use crate::pseudo_peripheral::NodeSelector;
use std::fmt;

/// Which algorithm computes the ordering, and its parameters.
///
/// A plain enum with a method rather than an open trait hierarchy: every
/// solver is one of these variants, never an implementor of some extensible
/// `Solver` trait.
#[derive(Clone)]
pub enum Solver {
    /// Exhaustive permutation search; the exactness ground truth.
    BruteForceSearch,
    /// Del Corso-Manzini exact branch-and-bound.
    DelCorsoManzini,
    /// DCM augmented with perimeter-search lookahead pruning. `depth = None`
    /// uses [`default_perimeter_depth`] per component.
    DelCorsoManziniWithPs { depth: Option<usize> },
    /// Declared, but no backend is implemented yet.
    CapraraSalazarGonzalez,
    /// Declared, but no backend is implemented yet.
    SaxeGurariSudborough,
    /// Cuthill-McKee. `selector = None` uses the built-in pseudo-peripheral finder.
    CuthillMcKee { selector: Option<NodeSelector> },
    /// Reverse Cuthill-McKee.
    ReverseCuthillMcKee { selector: Option<NodeSelector> },
    /// Gibbs-Poole-Stockmeyer.
    GibbsPooleStockmeyer { selector: Option<NodeSelector> },
}

/// The solver's name, carried in [`crate::result::BandwidthResult`] and used
/// in `NotImplemented` error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolverTag {
    BruteForceSearch,
    DelCorsoManzini,
    DelCorsoManziniWithPs,
    CapraraSalazarGonzalez,
    SaxeGurariSudborough,
    CuthillMcKee,
    ReverseCuthillMcKee,
    GibbsPooleStockmeyer,
}

impl fmt::Display for SolverTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SolverTag::BruteForceSearch => "BruteForceSearch",
            SolverTag::DelCorsoManzini => "DelCorsoManzini",
            SolverTag::DelCorsoManziniWithPs => "DelCorsoManziniWithPs",
            SolverTag::CapraraSalazarGonzalez => "CapraraSalazarGonzalez",
            SolverTag::SaxeGurariSudborough => "SaxeGurariSudborough",
            SolverTag::CuthillMcKee => "CuthillMcKee",
            SolverTag::ReverseCuthillMcKee => "ReverseCuthillMcKee",
            SolverTag::GibbsPooleStockmeyer => "GibbsPooleStockmeyer",
        };
        f.write_str(name)
    }
}

impl Solver {
    pub fn tag(&self) -> SolverTag {
        match self {
            Solver::BruteForceSearch => SolverTag::BruteForceSearch,
            Solver::DelCorsoManzini => SolverTag::DelCorsoManzini,
            Solver::DelCorsoManziniWithPs { .. } => SolverTag::DelCorsoManziniWithPs,
            Solver::CapraraSalazarGonzalez => SolverTag::CapraraSalazarGonzalez,
            Solver::SaxeGurariSudborough => SolverTag::SaxeGurariSudborough,
            Solver::CuthillMcKee { .. } => SolverTag::CuthillMcKee,
            Solver::ReverseCuthillMcKee { .. } => SolverTag::ReverseCuthillMcKee,
            Solver::GibbsPooleStockmeyer { .. } => SolverTag::GibbsPooleStockmeyer,
        }
    }

    /// Exact solvers operating on the structural graph require a
    /// structurally symmetric input; `BruteForceSearch` measures bandwidth
    /// directly off the matrix and tolerates asymmetry, and the heuristics
    /// symmetrize internally and tolerate it too.
    pub fn requires_structural_symmetry(&self) -> bool {
        matches!(
            self,
            Solver::DelCorsoManzini
                | Solver::DelCorsoManziniWithPs { .. }
                | Solver::CapraraSalazarGonzalez
                | Solver::SaxeGurariSudborough
        )
    }

    /// Route to this solver's per-component ordering function and
    /// concatenate, producing a full 0-indexed global ordering.
    pub(crate) fn order_all_components(
        &self,
        adjacency: &Adjacency,
        components: &[Vec<usize>],
    ) -> Result<Vec<usize>> {
        match self {
            Solver::BruteForceSearch => {
                let mut ordering = Vec::with_capacity(adjacency.order());
                for component in components {
                    ordering.extend(brute_force_component(adjacency, component));
                }
                Ok(ordering)
            }
            Solver::DelCorsoManzini => {
                let mut ordering = Vec::with_capacity(adjacency.order());
                for component in components {
                    ordering.extend(dcm_component(adjacency, component, None));
                }
                Ok(ordering)
            }
            Solver::DelCorsoManziniWithPs { depth } => {
                let mut ordering = Vec::with_capacity(adjacency.order());
                for component in components {
                    let p = depth.unwrap_or_else(|| default_perimeter_depth(component.len()));
                    ordering.extend(dcm_component(adjacency, component, Some(p)));
                }
                Ok(ordering)
            }
            Solver::CapraraSalazarGonzalez | Solver::SaxeGurariSudborough => {
                Err(BandwidthError::NotImplemented(self.tag().to_string()))
            }
            Solver::CuthillMcKee { selector } => {
                cuthill_mckee_ordering(adjacency, components, selector.as_ref())
            }
            Solver::ReverseCuthillMcKee { selector } => {
                reverse_cuthill_mckee_ordering(adjacency, components, selector.as_ref())
            }
            Solver::GibbsPooleStockmeyer { selector } => {
                gibbs_poole_stockmeyer_ordering(adjacency, components, selector.as_ref())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_display_by_name() {
        assert_eq!(Solver::DelCorsoManzini.tag().to_string(), "DelCorsoManzini");
        assert_eq!(
            Solver::DelCorsoManziniWithPs { depth: None }.tag().to_string(),
            "DelCorsoManziniWithPs"
        );
    }

    #[test]
    fn exact_graph_solvers_require_symmetry() {
        assert!(Solver::DelCorsoManzini.requires_structural_symmetry());
        assert!(Solver::DelCorsoManziniWithPs { depth: None }.requires_structural_symmetry());
        assert!(!Solver::BruteForceSearch.requires_structural_symmetry());
        assert!(!Solver::CuthillMcKee { selector: None }.requires_structural_symmetry());
    }
}
