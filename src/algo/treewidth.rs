/*!
Treewidth upper bound via the **min-degree elimination heuristic**.

Repeatedly eliminates a node of minimum degree, turning its neighborhood into
a clique; the width of the resulting elimination order (the largest degree at
elimination time) is an upper bound on the treewidth. The fill-in edges make
the intermediate graph dense on bad inputs, so the heuristic can be slow on
large instances even though each step is simple.
*/

use fxhash::FxHashSet;

use super::*;

/// Treewidth estimation.
pub trait Treewidth: AdjacencyList {
    /// Returns the width of the min-degree elimination order,
    /// an upper bound on the treewidth.
    fn treewidth_min_degree(&self) -> NumNodes {
        let n = self.len();
        let mut nbs: Vec<FxHashSet<Node>> = self
            .vertices()
            .map(|u| self.neighbors_of(u).filter(|&v| v != u).collect())
            .collect();
        let mut alive = vec![true; n];
        let mut width = 0;

        for _ in 0..n {
            let u = (0..n)
                .filter(|&u| alive[u])
                .min_by_key(|&u| (nbs[u].len(), u))
                .unwrap() as Node;

            width = width.max(nbs[u as usize].len() as NumNodes);

            // fill-in: the neighborhood of u becomes a clique
            let neighbors: Vec<Node> = nbs[u as usize].iter().copied().collect();
            for (i, &a) in neighbors.iter().enumerate() {
                for &b in &neighbors[i + 1..] {
                    if nbs[a as usize].insert(b) {
                        nbs[b as usize].insert(a);
                    }
                }
            }

            for &a in &neighbors {
                nbs[a as usize].remove(&u);
            }
            nbs[u as usize].clear();
            alive[u as usize] = false;
        }

        width
    }
}

impl<G> Treewidth for G where G: AdjacencyList {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, graph::AdjArray};

    #[test]
    fn trees_have_width_one() {
        let mut g = AdjArray::new(7);
        g.connect_path([0, 1, 2, 3]);
        g.connect_path([1, 4]);
        g.connect_path([4, 5]);
        g.connect_path([2, 6]);

        assert_eq!(g.treewidth_min_degree(), 1);
    }

    #[test]
    fn cycles_have_width_two() {
        let mut g = AdjArray::new(9);
        g.connect_cycle(0..9);
        assert_eq!(g.treewidth_min_degree(), 2);
    }

    #[test]
    fn clique_width_is_tight() {
        let mut g = AdjArray::new(5);
        g.connect_clique(&[0, 1, 2, 3, 4]);
        assert_eq!(g.treewidth_min_degree(), 4);
    }

    #[test]
    fn heuristic_is_an_upper_bound_on_grid() {
        // 3x3 grid: treewidth 3
        let mut g = AdjArray::new(9);
        for r in 0..3 {
            g.connect_path(3 * r..3 * r + 3);
        }
        for c in 0..3 {
            g.connect_path([c, c + 3, c + 6]);
        }

        let width = g.treewidth_min_degree();
        assert!((3..=4).contains(&width));
    }

    #[test]
    fn edgeless_graphs() {
        assert_eq!(AdjArray::new(0).treewidth_min_degree(), 0);
        assert_eq!(AdjArray::new(5).treewidth_min_degree(), 0);
    }
}
