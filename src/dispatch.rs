//! Validates input, routes to a solver, and assembles the result record.

use crate::adjacency::{is_structurally_symmetric, Adjacency};
use crate::components::connected_components as connected_components_0indexed;
use crate::error::{BandwidthError, Result};
use crate::exact::{brute_force_component, dcm_component_with_k, default_perimeter_depth};
use crate::matrix::Matrix;
use crate::measure::bandwidth as bandwidth_raw;
use crate::result::{BandwidthDecision, BandwidthResult};
use crate::solver::Solver;

fn to_one_indexed(ordering0: Vec<usize>) -> Vec<usize> {
    ordering0.into_iter().map(|v| v + 1).collect()
}

fn build_matrix(rows: &[Vec<f64>]) -> Result<Matrix> {
    Matrix::from_rows(rows.to_vec())
}

/// `minimize_bandwidth(A, solver) -> BandwidthResult`.
///
/// Validates that `A` is square and, for solvers that require it,
/// structurally symmetric; decomposes into connected components; routes
/// each component to `solver`; concatenates; and measures the achieved
/// bandwidth on the permuted matrix.
pub fn minimize_bandwidth(rows: &[Vec<f64>], solver: &Solver) -> Result<BandwidthResult> {
    let matrix = build_matrix(rows)?;

    if solver.requires_structural_symmetry() && !is_structurally_symmetric(&matrix) {
        return Err(BandwidthError::StructuralAsymmetry);
    }

    let adjacency = Adjacency::from_matrix(&matrix);
    let components = connected_components_0indexed(&adjacency);
    let ordering0 = solver.order_all_components(&adjacency, &components)?;

    let permuted = matrix.permuted(&ordering0);
    let bandwidth = bandwidth_raw(&permuted);

    log::debug!(
        "minimize_bandwidth: solver={} order={} components={} bandwidth={bandwidth}",
        solver.tag(),
        matrix.order(),
        components.len()
    );

    Ok(BandwidthResult {
        input_ref: matrix,
        bandwidth,
        ordering: to_one_indexed(ordering0),
        solver_tag: solver.tag(),
    })
}

/// `has_bandwidth_k_ordering(A, k, solver) -> BandwidthDecision`: the
/// decision version. For search-based solvers this fixes the bound at `k`
/// rather than iteratively deepening; for heuristics it evaluates the
/// single deterministic ordering the heuristic produces.
pub fn has_bandwidth_k_ordering(
    rows: &[Vec<f64>],
    k: usize,
    solver: &Solver,
) -> Result<BandwidthDecision> {
    let matrix = build_matrix(rows)?;

    if solver.requires_structural_symmetry() && !is_structurally_symmetric(&matrix) {
        return Err(BandwidthError::StructuralAsymmetry);
    }

    let adjacency = Adjacency::from_matrix(&matrix);
    let components = connected_components_0indexed(&adjacency);

    let ordering0 = match solver {
        Solver::DelCorsoManzini => {
            try_fixed_k_search(&adjacency, &components, k, |_| None)
        }
        Solver::DelCorsoManziniWithPs { depth } => {
            let depth = *depth;
            try_fixed_k_search(&adjacency, &components, k, move |m| {
                Some(depth.unwrap_or_else(|| default_perimeter_depth(m)))
            })
        }
        Solver::BruteForceSearch => {
            let mut ordering = Vec::with_capacity(adjacency.order());
            for component in &components {
                ordering.extend(brute_force_component(&adjacency, component));
            }
            let achieved = crate::measure::bandwidth_of_ordering(&adjacency, &ordering);
            if achieved <= k { Some(ordering) } else { None }
        }
        Solver::CuthillMcKee { .. } | Solver::ReverseCuthillMcKee { .. } | Solver::GibbsPooleStockmeyer { .. } => {
            let ordering = solver.order_all_components(&adjacency, &components)?;
            let achieved = crate::measure::bandwidth_of_ordering(&adjacency, &ordering);
            if achieved <= k { Some(ordering) } else { None }
        }
        Solver::CapraraSalazarGonzalez | Solver::SaxeGurariSudborough => {
            return Err(BandwidthError::NotImplemented(solver.tag().to_string()));
        }
    };

    Ok(match ordering0 {
        Some(ordering0) => BandwidthDecision {
            has_ordering: true,
            ordering: Some(to_one_indexed(ordering0)),
        },
        None => BandwidthDecision {
            has_ordering: false,
            ordering: None,
        },
    })
}

/// Attempt every component at a fixed bound `k` (no iterative deepening);
/// fail the whole decision if any component cannot be placed within it.
/// `perimeter_depth_for` resolves the lookahead depth from a component's
/// size, so `DelCorsoManziniWithPs`'s default can differ per component.
fn try_fixed_k_search(
    adjacency: &Adjacency,
    components: &[Vec<usize>],
    k: usize,
    perimeter_depth_for: impl Fn(usize) -> Option<usize>,
) -> Option<Vec<usize>> {
    let mut ordering = Vec::with_capacity(adjacency.order());
    for component in components {
        let (local_adjacency, _) = adjacency.induced_subgraph(component);
        let depth = perimeter_depth_for(component.len());
        let order = dcm_component_with_k(&local_adjacency, component, k, depth)?;
        ordering.extend(order);
    }
    Some(ordering)
}

/// `connected_components(Â)`: 1-indexed components in BFS-discovery order.
pub fn connected_components(rows: &[Vec<f64>]) -> Result<Vec<Vec<usize>>> {
    let matrix = build_matrix(rows)?;
    let adjacency = Adjacency::from_matrix(&matrix);
    Ok(connected_components_0indexed(&adjacency)
        .into_iter()
        .map(|component| component.into_iter().map(|v| v + 1).collect())
        .collect())
}
