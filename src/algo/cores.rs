/*!
Core decomposition and degeneracy.

The *k-core* of a graph is the maximal subgraph with minimum degree `k`; the
*core number* of a node is the largest `k` such that the node is part of the
k-core. The **degeneracy** is the largest core number in the graph.

Computed with the bucketed peeling scheme of Matula & Beck in `O(n + m)`.
*/

use super::*;

/// Core decomposition of undirected graphs.
pub trait Cores: AdjacencyList {
    /// Returns the core number of every node.
    fn core_numbers(&self) -> Vec<NumNodes> {
        let n = self.len();
        let mut degree: Vec<NumNodes> = self.degrees().collect();

        // bucket sort nodes by degree: bin[d] is the first position of degree d
        let max_degree = self.max_degree() as usize;
        let mut bin = vec![0usize; max_degree + 2];
        for &d in &degree {
            bin[d as usize + 1] += 1;
        }
        for d in 1..bin.len() {
            bin[d] += bin[d - 1];
        }

        let mut vert = vec![0 as Node; n];
        let mut pos = vec![0usize; n];
        {
            let mut next = bin.clone();
            for u in self.vertices() {
                let p = next[degree[u as usize] as usize];
                vert[p] = u;
                pos[u as usize] = p;
                next[degree[u as usize] as usize] += 1;
            }
        }

        // peel nodes in non-decreasing degree order; `degree` degrades to the
        // core number once a node is peeled
        for i in 0..n {
            let u = vert[i];
            for v in self.neighbors_of(u) {
                if degree[v as usize] > degree[u as usize] {
                    let dv = degree[v as usize] as usize;
                    let pv = pos[v as usize];
                    let pw = bin[dv];
                    let w = vert[pw];

                    if v != w {
                        vert.swap(pv, pw);
                        pos[v as usize] = pw;
                        pos[w as usize] = pv;
                    }

                    bin[dv] += 1;
                    degree[v as usize] -= 1;
                }
            }
        }

        degree
    }

    /// Returns the degeneracy, i.e. the maximum core number.
    fn degeneracy(&self) -> NumNodes {
        self.core_numbers().into_iter().max().unwrap_or(0)
    }
}

impl<G> Cores for G where G: AdjacencyList {}
