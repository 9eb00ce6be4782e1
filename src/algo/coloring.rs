/*!
Greedy estimates for the chromatic number and the clique number.

Both bounds process the vertices in order of non-increasing degree: greedy
coloring in that order uses at most `degeneracy + 1` colors on many instance
families, and greedy clique extension finds a large (not necessarily maximum)
clique among the high-degree vertices.
*/

use itertools::Itertools;

use super::*;

/// Returns the vertices sorted by non-increasing degree, ties broken by id.
fn by_degree_descending<G: AdjacencyList>(graph: &G) -> Vec<Node> {
    graph
        .vertices()
        .sorted_by_key(|&u| (std::cmp::Reverse(graph.degree_of(u)), u))
        .collect_vec()
}

/// Greedy bounds on the chromatic number and the clique number.
pub trait Coloring: AdjacencyList + AdjacencyTest {
    /// Colors the vertices greedily in order of non-increasing degree, always
    /// assigning the smallest color not used in the neighborhood.
    /// Returns the number of colors used, an upper bound on the chromatic number.
    fn greedy_number_of_colors(&self) -> NumNodes {
        let mut color = vec![INVALID_NODE; self.len()];
        let mut used = vec![false; self.max_degree() as usize + 1];
        let mut num_colors = 0;

        for u in by_degree_descending(self) {
            for v in self.neighbors_of(u) {
                if color[v as usize] != INVALID_NODE {
                    used[color[v as usize] as usize] = true;
                }
            }

            // deg(u) + 1 slots always contain a free color
            let c = (0..).find(|&c| !used[c as usize]).unwrap();
            color[u as usize] = c;
            num_colors = num_colors.max(c + 1);

            for v in self.neighbors_of(u) {
                if color[v as usize] != INVALID_NODE {
                    used[color[v as usize] as usize] = false;
                }
            }
        }

        num_colors
    }

    /// Extends a clique greedily along the degree-descending vertex order.
    /// Returns its size, a lower bound on the clique number.
    fn greedy_clique_number(&self) -> NumNodes {
        let mut clique: Vec<Node> = Vec::new();

        for u in by_degree_descending(self) {
            if clique.iter().all(|&v| self.has_edge(u, v)) {
                clique.push(u);
            }
        }

        clique.len() as NumNodes
    }
}

impl<G> Coloring for G where G: AdjacencyList + AdjacencyTest {}
