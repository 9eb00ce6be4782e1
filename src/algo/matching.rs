/*!
# Matching Algorithms

Greedy **maximal matchings** in undirected graphs (not necessarily optimal).

A *matching* is a set of edges without shared endpoints. A **maximal**
matching cannot be extended by adding another edge; its size is within a
factor two of a maximum matching, which makes the matched endpoints a
2-approximation of a minimum vertex cover.
*/

use super::*;

/// A trait providing matching algorithms on undirected graphs.
pub trait Matching: AdjacencyList {
    /// Computes a **maximal matching** greedily:
    /// - Iterates through vertices
    /// - Picks the first available unmatched neighbor
    /// - Marks both endpoints as matched
    ///
    /// Each edge `{u, v}` in the matching is returned only once as `(u, v)`.
    /// The resulting vector is sorted lexicographically.
    fn maximal_matching(&self) -> Vec<(Node, Node)> {
        let mut matching = Vec::new();
        let mut matched = self.vertex_bitset_unset();

        for u in self.vertices() {
            if matched.get_bit(u) {
                continue;
            }

            if let Some(v) = self.neighbors_of(u).find(|&v| v != u && !matched.get_bit(v)) {
                matched.set_bit(u);
                matched.set_bit(v);
                matching.push((u, v));
            }
        }

        matching
    }
}

impl<G> Matching for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, graph::AdjArray};

    #[test]
    fn maximal_matching_on_path() {
        let graph = AdjArray::from_edges(4, [(0, 1), (1, 2), (2, 3)]); // 0 - 1 - 2 - 3
        let matching = graph.maximal_matching();
        assert_eq!(matching, vec![(0, 1), (2, 3)]);
    }

    #[test]
    fn maximal_matching_on_star() {
        let graph = AdjArray::from_edges(4, [(0, 1), (0, 2), (0, 3)]);
        assert_eq!(graph.maximal_matching().len(), 1);
    }

    #[test]
    fn matching_is_maximal() {
        let mut graph = AdjArray::new(9);
        graph.connect_cycle(0..7);
        graph.connect_clique(&[6, 7, 8]);

        let matching = graph.maximal_matching();
        let mut matched = graph.vertex_bitset_unset();
        for &(u, v) in &matching {
            assert!(graph.has_edge(u, v));
            assert!(!matched.get_bit(u) && !matched.get_bit(v));
            matched.set_bit(u);
            matched.set_bit(v);
        }

        // no edge with two unmatched endpoints may remain
        assert!(
            graph
                .edges(true)
                .all(|Edge(u, v)| matched.get_bit(u) || matched.get_bit(v))
        );
    }

    #[test]
    fn empty_graph() {
        assert!(AdjArray::new(0).maximal_matching().is_empty());
        assert!(AdjArray::new(5).maximal_matching().is_empty());
    }
}
