/*!
Greedy estimates for the classical covering problems: minimum vertex cover,
minimum dominating set, and maximum independent set.

All three are NP-hard; the estimates here are the standard greedy
approximations and are reported as set sizes only.
*/

use super::*;

/// Greedy covering estimates.
pub trait Covering: AdjacencyList {
    /// Size of the vertex cover consisting of all endpoints of a maximal
    /// matching, a 2-approximation of the minimum vertex cover.
    fn matching_vertex_cover_size(&self) -> NumNodes {
        2 * self.maximal_matching().len() as NumNodes
    }

    /// Size of a dominating set built greedily: repeatedly take the node whose
    /// closed neighborhood covers the most still-uncovered nodes.
    fn greedy_dominating_set_size(&self) -> NumNodes {
        let n = self.number_of_nodes();
        let mut covered = self.vertex_bitset_unset();
        let mut num_covered = 0;
        let mut size = 0;

        while num_covered < n {
            let mut best = INVALID_NODE;
            let mut best_gain = 0;
            for u in self.vertices() {
                let gain = self
                    .closed_neighbors_of(u)
                    .filter(|&v| !covered.get_bit(v))
                    .count() as NumNodes;
                if gain > best_gain {
                    best = u;
                    best_gain = gain;
                }
            }

            // isolated uncovered nodes have gain 1, so progress is guaranteed
            debug_assert!(best_gain > 0);
            for v in self.closed_neighbors_of(best) {
                if !covered.get_bit(v) {
                    covered.set_bit(v);
                    num_covered += 1;
                }
            }
            size += 1;
        }

        size
    }

    /// Size of an independent set built greedily in order of non-decreasing
    /// degree, skipping nodes adjacent to an already chosen one.
    fn greedy_independent_set_size(&self) -> NumNodes {
        let mut order: Vec<Node> = self.vertices().collect();
        order.sort_by_key(|&u| (self.degree_of(u), u));

        let mut blocked = self.vertex_bitset_unset();
        let mut size = 0;

        for u in order {
            if blocked.get_bit(u) {
                continue;
            }
            size += 1;
            blocked.set_bit(u);
            for v in self.neighbors_of(u) {
                blocked.set_bit(v);
            }
        }

        size
    }
}

impl<G> Covering for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, graph::AdjArray};

    #[test]
    fn vertex_cover_of_path_and_star() {
        let mut path = AdjArray::new(4);
        path.connect_path(0..4);
        assert_eq!(path.matching_vertex_cover_size(), 4);

        let star = AdjArray::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(star.matching_vertex_cover_size(), 2);
    }

    #[test]
    fn dominating_set_of_star_is_its_center() {
        let star = AdjArray::from_edges(6, [(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)]);
        assert_eq!(star.greedy_dominating_set_size(), 1);
    }

    #[test]
    fn dominating_set_covers_singletons() {
        let mut g = AdjArray::new(5);
        g.connect_cycle([0, 1, 2]);
        assert_eq!(g.greedy_dominating_set_size(), 3);
    }

    #[test]
    fn dominating_set_of_path() {
        let mut g = AdjArray::new(6);
        g.connect_path(0..6);
        assert_eq!(g.greedy_dominating_set_size(), 2);
    }

    #[test]
    fn independent_set_of_known_shapes() {
        let mut cycle = AdjArray::new(6);
        cycle.connect_cycle(0..6);
        assert_eq!(cycle.greedy_independent_set_size(), 3);

        let mut clique = AdjArray::new(5);
        clique.connect_clique(&[0, 1, 2, 3, 4]);
        assert_eq!(clique.greedy_independent_set_size(), 1);

        let star = AdjArray::from_edges(5, [(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(star.greedy_independent_set_size(), 4);
    }

    #[test]
    fn empty_graphs() {
        let g = AdjArray::new(0);
        assert_eq!(g.matching_vertex_cover_size(), 0);
        assert_eq!(g.greedy_dominating_set_size(), 0);
        assert_eq!(g.greedy_independent_set_size(), 0);

        let g = AdjArray::new(3);
        assert_eq!(g.greedy_dominating_set_size(), 3);
        assert_eq!(g.greedy_independent_set_size(), 3);
    }
}
