//! Del Corso-Manzini branch-and-bound search and its perimeter-search
//! lookahead augmentation.
//!
//! Both are the same depth-first partial-ordering search; perimeter search
//! only adds a bounded-depth feasibility simulation before committing to a
//! candidate, so they share one engine (`Search`) parameterized by an
//! optional lookahead depth, rather than two independent implementations.

use crate::adjacency::Adjacency;
use crate::bitset::Bitset;

/// Search state for one component, reused across the outer iterative-deepening
/// loop on `k` (each attempt gets a fresh `Search`).
struct Search<'a> {
    m: usize,
    adjacency: &'a Adjacency,
    k: usize,
    perimeter_depth: Option<usize>,
    placed: Vec<usize>,
    position_of: Vec<Option<usize>>,
    placed_mask: Bitset,
}

impl<'a> Search<'a> {
    fn new(adjacency: &'a Adjacency, k: usize, perimeter_depth: Option<usize>) -> Self {
        let m = adjacency.order();
        Self {
            m,
            adjacency,
            k,
            perimeter_depth,
            placed: Vec::with_capacity(m),
            position_of: vec![None; m],
            placed_mask: Bitset::new(m),
        }
    }

    fn place(&mut self, v: usize) {
        let d = self.placed.len();
        self.placed.push(v);
        self.position_of[v] = Some(d);
        self.placed_mask.set(v);
    }

    fn unplace(&mut self, v: usize) {
        self.placed.pop();
        self.position_of[v] = None;
        self.placed_mask.clear(v);
    }

    /// Is `v` compatible with everything already placed: every already-placed
    /// neighbor `pi[j]` of `v` must satisfy `k + j >= d`.
    fn compatible(&self, v: usize, d: usize) -> bool {
        for u in self.adjacency.row(v).iter_ones() {
            if let Some(j) = self.position_of[u] {
                if d > self.k + j {
                    return false;
                }
            }
        }
        true
    }

    /// Hall-style deadline feasibility test over the frontier implied by the
    /// current placement. `d` is the position the most recently placed vertex
    /// occupies (the same pre-placement depth `compatible` was checked
    /// against), matching spec §4.6's "latest[i] >= d + i": every unplaced
    /// vertex with a placed neighbor has a "latest slot" it can still be
    /// placed in; reject unless the sorted deadlines can accommodate all of
    /// them.
    fn frontier_feasible(&self, d: usize) -> bool {
        let mut latest = Vec::new();
        for u in 0..self.m {
            if self.placed_mask.get(u) {
                continue;
            }
            let mut deadline: Option<usize> = None;
            for p in self.adjacency.row(u).iter_ones() {
                if let Some(j) = self.position_of[p] {
                    let candidate = self.k + j;
                    deadline = Some(deadline.map_or(candidate, |best| best.min(candidate)));
                }
            }
            if let Some(deadline) = deadline {
                latest.push(deadline);
            }
        }

        if latest.len() > self.k {
            return false;
        }
        latest.sort_unstable();
        for (idx, &deadline) in latest.iter().enumerate() {
            // 1-indexed deadline rule latest[i] >= d + i, here 0-indexed.
            if deadline < d + idx + 1 {
                return false;
            }
        }
        true
    }

    /// Bounded-depth simulation used by perimeter search: from the state just
    /// after placing a candidate, verify a feasible continuation exists for up
    /// to `remaining` more placements. Doesn't change correctness, only prunes
    /// branches the full search would eventually reject anyway, at the cost of
    /// extra work when it doesn't.
    fn lookahead_feasible(&mut self, d: usize, remaining: usize) -> bool {
        if remaining == 0 || d == self.m {
            return true;
        }
        for v in 0..self.m {
            if self.placed_mask.get(v) || !self.compatible(v, d) {
                continue;
            }
            self.place(v);
            let ok = self.frontier_feasible(d) && self.lookahead_feasible(d + 1, remaining - 1);
            self.unplace(v);
            if ok {
                return true;
            }
        }
        false
    }

    fn dfs(&mut self) -> bool {
        let d = self.placed.len();
        if d == self.m {
            return true;
        }

        for v in 0..self.m {
            if self.placed_mask.get(v) {
                continue;
            }

            // Anchor symmetry break: the first vertex of a component's
            // labeling must not be the maximum of the unplaced set, which
            // excludes the reverse of every ordering from being re-explored.
            if d == 0 && v == self.m - 1 {
                continue;
            }

            if !self.compatible(v, d) {
                continue;
            }

            self.place(v);

            let feasible = self.frontier_feasible(d)
                && self
                    .perimeter_depth
                    .map_or(true, |p| self.lookahead_feasible(d + 1, p));

            if feasible && self.dfs() {
                return true;
            }

            self.unplace(v);
        }

        false
    }
}

/// Trivial lower bound for the outer iterative-deepening loop:
/// `ceil(max_v deg(v) / 2)`.
fn trivial_lower_bound(adjacency: &Adjacency) -> usize {
    (0..adjacency.order())
        .map(|v| adjacency.degree(v).div_ceil(2))
        .max()
        .unwrap_or(0)
}

/// Attempt to find a component ordering with bandwidth exactly `k`'s search
/// bound (i.e. `<= k`), without iterative deepening. Used both by DCM's own
/// outer loop and directly by the decision procedure
/// `has_bandwidth_k_ordering`.
pub fn dcm_component_with_k(
    local_adjacency: &Adjacency,
    component: &[usize],
    k: usize,
    perimeter_depth: Option<usize>,
) -> Option<Vec<usize>> {
    if component.len() <= 1 {
        return Some(component.to_vec());
    }
    let mut search = Search::new(local_adjacency, k, perimeter_depth);
    if search.dfs() {
        Some(search.placed.iter().map(|&local| component[local]).collect())
    } else {
        None
    }
}

/// Solve one component exactly by iterative deepening on `k`, starting from
/// the trivial lower bound. The first `k` for which the inner DFS succeeds
/// is the exact component bandwidth.
pub fn dcm_component(
    adjacency: &Adjacency,
    component: &[usize],
    perimeter_depth: Option<usize>,
) -> Vec<usize> {
    if component.len() <= 1 {
        return component.to_vec();
    }

    let (local_adjacency, _) = adjacency.induced_subgraph(component);
    let mut k = trivial_lower_bound(&local_adjacency);
    loop {
        log::debug!(
            "dcm: component of size {} attempting bandwidth k={k}",
            component.len()
        );
        if let Some(order) = dcm_component_with_k(&local_adjacency, component, k, perimeter_depth) {
            return order;
        }
        k += 1;
    }
}

/// Default perimeter-search lookahead depth for a component of the given
/// size: `sqrt(m)` rounded and clamped to `[1, 8]`. Balances pruning power
/// (which grows with depth) against the per-node cost of the lookahead
/// simulation (which grows combinatorially); the clamp keeps worst-case
/// lookahead cost bounded on large components.
pub fn default_perimeter_depth(component_size: usize) -> usize {
    let depth = (component_size as f64).sqrt().round() as usize;
    depth.clamp(1, 8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::connected_components;
    use crate::measure::bandwidth_of_ordering;

    fn assemble(adjacency: &Adjacency, perimeter_depth: Option<usize>) -> Vec<usize> {
        let components = connected_components(adjacency);
        let mut ordering = Vec::new();
        for component in &components {
            ordering.extend(dcm_component(adjacency, component, perimeter_depth));
        }
        ordering
    }

    #[test]
    fn path_graph_is_optimal() {
        let adj = Adjacency::from_edges(6, [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let order = assemble(&adj, None);
        assert_eq!(bandwidth_of_ordering(&adj, &order), 1);
    }

    #[test]
    fn complete_graph_bandwidth_is_n_minus_one() {
        let edges: Vec<(usize, usize)> = (0..5)
            .flat_map(|i| (i + 1..5).map(move |j| (i, j)))
            .collect();
        let adj = Adjacency::from_edges(5, edges);
        let order = assemble(&adj, None);
        assert_eq!(bandwidth_of_ordering(&adj, &order), 4);
    }

    #[test]
    fn two_disjoint_triangles_have_exact_bandwidth_two() {
        let adj = Adjacency::from_edges(6, [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)]);
        let order = assemble(&adj, None);
        assert_eq!(bandwidth_of_ordering(&adj, &order), 2);
    }

    #[test]
    fn known_test_graph_exact_bandwidth_is_four() {
        let edges = [
            (0, 3), (0, 5), (1, 2), (1, 4), (1, 6), (1, 9),
            (2, 3), (2, 4), (3, 5), (3, 8), (4, 6), (5, 6), (5, 7), (6, 7),
        ];
        let adj = Adjacency::from_edges(10, edges);
        let order = assemble(&adj, None);
        assert_eq!(bandwidth_of_ordering(&adj, &order), 4);
    }

    #[test]
    fn perimeter_search_agrees_with_plain_dcm() {
        let edges = [
            (0, 3), (0, 5), (1, 2), (1, 4), (1, 6), (1, 9),
            (2, 3), (2, 4), (3, 5), (3, 8), (4, 6), (5, 6), (5, 7), (6, 7),
        ];
        let adj = Adjacency::from_edges(10, edges);
        let order = assemble(&adj, Some(default_perimeter_depth(10)));
        assert_eq!(bandwidth_of_ordering(&adj, &order), 4);
    }

    #[test]
    fn default_perimeter_depth_is_bounded() {
        assert_eq!(default_perimeter_depth(1), 1);
        assert!(default_perimeter_depth(10_000) <= 8);
    }
}
