//! `BruteForceSearch`: the ground-truth oracle.
//!
//! Tries every permutation of a component and keeps the best. Only
//! reasonable for small components; this exists to validate the DCM family
//! against, not to scale.

use crate::adjacency::Adjacency;
use crate::measure::bandwidth_of_ordering;
use itertools::Itertools;

/// Return the component ordering (as global vertex ids) with minimum
/// bandwidth, found by exhaustive search over all `m!` permutations.
///
/// Searches on the component's induced subgraph, relabeled `0..m` (the same
/// local-id trick `dcm_component` uses via `induced_subgraph`), then maps the
/// winning permutation back to global ids: `bandwidth_of_ordering` indexes a
/// `position` vector of length `m`, so running it directly on global ids
/// would be out of bounds for any component other than `{0..m-1}`.
pub fn brute_force_component(adjacency: &Adjacency, component: &[usize]) -> Vec<usize> {
    let m = component.len();
    if m <= 2 {
        return component.to_vec();
    }

    let (local_adjacency, _) = adjacency.induced_subgraph(component);

    let mut best_local: Vec<usize> = (0..m).collect();
    let mut best_bandwidth = bandwidth_of_ordering(&local_adjacency, &best_local);

    for perm in (0..m).permutations(m) {
        let bw = bandwidth_of_ordering(&local_adjacency, &perm);
        if bw < best_bandwidth {
            best_bandwidth = bw;
            best_local = perm;
        }
    }

    best_local.into_iter().map(|local| component[local]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::bandwidth_of_ordering as bw;

    #[test]
    fn path_graph_is_already_optimal() {
        let adj = Adjacency::from_edges(5, [(0, 1), (1, 2), (2, 3), (3, 4)]);
        let component: Vec<usize> = (0..5).collect();
        let order = brute_force_component(&adj, &component);
        assert_eq!(bw(&adj, &order), 1);
    }

    #[test]
    fn finds_optimum_on_small_scrambled_graph() {
        // K_{1,1,1} triangle plus a pendant, order 4.
        let adj = Adjacency::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]);
        let component: Vec<usize> = (0..4).collect();
        let order = brute_force_component(&adj, &component);
        // optimal bandwidth for this graph is 2
        assert_eq!(bw(&adj, &order), 2);
    }

    #[test]
    fn component_not_based_at_zero_does_not_panic() {
        // two disjoint triangles: {0,1,2} and {3,4,5}
        let adj = Adjacency::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let order = brute_force_component(&adj, &[3, 4, 5]);
        assert_eq!(bw(&adj, &order), 2);
        assert_eq!(
            order.iter().collect::<std::collections::HashSet<_>>(),
            [3usize, 4, 5].iter().collect::<std::collections::HashSet<_>>()
        );
    }
}
