/*!
# Planarity

Left-right planarity test (Brandes' formulation of the
de Fraysseix–Rosenstiehl criterion) in `O(n + m)`.

The test runs two DFS passes over every connected component:
1. **Orientation**: orients each edge, computing heights, low-points and
   nesting depths of the resulting tree and back edges.
2. **Testing**: walks the oriented tree with adjacency lists sorted by
   nesting depth, maintaining a stack of conflict pairs of back-edge
   intervals; the graph is non-planar exactly if two same-constraint
   intervals conflict.

Both passes are iterative. The wrapped metric computations run inside worker
threads whose stack must not overflow, so recursion over adversarial inputs
is not an option here.

Only the boolean verdict is produced; the sides/embedding phase is omitted.
*/

use fxhash::FxHashSet;

use super::*;

/// Index into the oriented edge arrays of [`LrState`]
type EIdx = usize;

/// An interval of back edges, identified by its extremal oriented edges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Interval {
    low: Option<EIdx>,
    high: Option<EIdx>,
}

impl Interval {
    fn is_empty(&self) -> bool {
        self.low.is_none() && self.high.is_none()
    }
}

/// Two intervals of back edges that must end up on opposite sides of the
/// tree path currently being processed
#[derive(Debug, Clone, Copy, Default)]
struct ConflictPair {
    left: Interval,
    right: Interval,
}

impl ConflictPair {
    fn swap(&mut self) {
        std::mem::swap(&mut self.left, &mut self.right);
    }
}

struct OrientedEdge {
    src: Node,
    dst: Node,
}

struct LrState<'a, G> {
    graph: &'a G,

    /// DFS height per node, `INVALID_NODE` = not yet visited
    height: Vec<NumNodes>,
    parent_edge: Vec<Option<EIdx>>,
    /// Next adjacency index to inspect per node
    ind: Vec<usize>,
    /// Edge a paused DFS has descended into, completed on resume
    pending: Vec<Option<EIdx>>,

    edges: Vec<OrientedEdge>,
    /// Normalized node pairs that were already oriented
    oriented: FxHashSet<Edge>,
    /// Oriented out-edges per node in discovery order
    adj_out: Vec<Vec<EIdx>>,

    lowpt: Vec<NumNodes>,
    lowpt2: Vec<NumNodes>,
    nesting_depth: Vec<u64>,

    /// Out-edges per node sorted by nesting depth (testing phase order)
    ordered_adjs: Vec<Vec<EIdx>>,
    ref_: Vec<Option<EIdx>>,
    lowpt_edge: Vec<Option<EIdx>>,
    /// Height of `s` when the edge was first reached in the testing phase
    stack_bottom: Vec<usize>,
    s: Vec<ConflictPair>,
}

impl<'a, G> LrState<'a, G>
where
    G: AdjacencyList + NeighborsSlice,
{
    fn new(graph: &'a G) -> Self {
        let n = graph.len();
        Self {
            graph,
            height: vec![INVALID_NODE; n],
            parent_edge: vec![None; n],
            ind: vec![0; n],
            pending: vec![None; n],
            edges: Vec::new(),
            oriented: FxHashSet::default(),
            adj_out: vec![Vec::new(); n],
            lowpt: Vec::new(),
            lowpt2: Vec::new(),
            nesting_depth: Vec::new(),
            ordered_adjs: Vec::new(),
            ref_: Vec::new(),
            lowpt_edge: Vec::new(),
            stack_bottom: Vec::new(),
            s: Vec::new(),
        }
    }

    fn run(mut self) -> bool {
        let mut roots = Vec::new();
        for v in self.graph.vertices() {
            if self.height[v as usize] == INVALID_NODE {
                self.height[v as usize] = 0;
                roots.push(v);
                self.dfs_orientation(v);
            }
        }

        self.ordered_adjs = self
            .adj_out
            .iter()
            .map(|out| {
                let mut out = out.clone();
                out.sort_by_key(|&ei| self.nesting_depth[ei]);
                out
            })
            .collect();

        let num_edges = self.edges.len();
        self.ref_ = vec![None; num_edges];
        self.lowpt_edge = vec![None; num_edges];
        self.stack_bottom = vec![0; num_edges];
        self.ind.iter_mut().for_each(|i| *i = 0);

        roots.into_iter().all(|root| self.dfs_testing(root))
    }

    /// First pass: orient the graph into a DFS tree plus back edges and
    /// compute `lowpt`, `lowpt2` and `nesting_depth` per oriented edge.
    fn dfs_orientation(&mut self, root: Node) {
        let mut dfs_stack = vec![root];

        while let Some(v) = dfs_stack.pop() {
            let e = self.parent_edge[v as usize];

            // fold the tree edge we just returned from into the parent edge
            if let Some(ei) = self.pending[v as usize].take() {
                self.update_nesting_and_parent(v, ei, e);
                self.ind[v as usize] += 1;
            }

            while self.ind[v as usize] < self.graph.as_neighbors_slice(v).len() {
                let w = self.graph.as_neighbors_slice(v)[self.ind[v as usize]];
                let key = Edge(v, w).normalized();
                if self.oriented.contains(&key) {
                    self.ind[v as usize] += 1;
                    continue;
                }
                self.oriented.insert(key);

                let ei = self.edges.len();
                self.edges.push(OrientedEdge { src: v, dst: w });
                self.lowpt.push(self.height[v as usize]);
                self.lowpt2.push(self.height[v as usize]);
                self.nesting_depth.push(0);
                self.adj_out[v as usize].push(ei);

                if self.height[w as usize] == INVALID_NODE {
                    // tree edge, descend and revisit v afterwards
                    self.parent_edge[w as usize] = Some(ei);
                    self.height[w as usize] = self.height[v as usize] + 1;
                    self.pending[v as usize] = Some(ei);
                    dfs_stack.push(v);
                    dfs_stack.push(w);
                    break;
                } else {
                    // back edge
                    self.lowpt[ei] = self.height[w as usize];
                    self.update_nesting_and_parent(v, ei, e);
                    self.ind[v as usize] += 1;
                }
            }
        }
    }

    fn update_nesting_and_parent(&mut self, v: Node, ei: EIdx, e: Option<EIdx>) {
        self.nesting_depth[ei] = 2 * self.lowpt[ei] as u64;
        if self.lowpt2[ei] < self.height[v as usize] {
            // chordal edges nest one level deeper
            self.nesting_depth[ei] += 1;
        }

        if let Some(e) = e {
            if self.lowpt[ei] < self.lowpt[e] {
                self.lowpt2[e] = self.lowpt[e].min(self.lowpt2[ei]);
                self.lowpt[e] = self.lowpt[ei];
            } else if self.lowpt[ei] > self.lowpt[e] {
                self.lowpt2[e] = self.lowpt2[e].min(self.lowpt[ei]);
            } else {
                self.lowpt2[e] = self.lowpt2[e].min(self.lowpt2[ei]);
            }
        }
    }

    /// Second pass: check that the back edges can be partitioned into two
    /// non-conflicting sides along every tree path.
    fn dfs_testing(&mut self, root: Node) -> bool {
        let mut dfs_stack = vec![root];

        while let Some(v) = dfs_stack.pop() {
            let e = self.parent_edge[v as usize];
            let mut descended = false;

            if let Some(ei) = self.pending[v as usize].take() {
                if !self.integrate_new_return_edges(v, ei, e) {
                    return false;
                }
                self.ind[v as usize] += 1;
            }

            while self.ind[v as usize] < self.ordered_adjs[v as usize].len() {
                let ei = self.ordered_adjs[v as usize][self.ind[v as usize]];
                let w = self.edges[ei].dst;

                self.stack_bottom[ei] = self.s.len();
                if Some(ei) == self.parent_edge[w as usize] {
                    // tree edge, integrate its constraints once the subtree is done
                    self.pending[v as usize] = Some(ei);
                    dfs_stack.push(v);
                    dfs_stack.push(w);
                    descended = true;
                    break;
                } else {
                    // back edge
                    self.lowpt_edge[ei] = Some(ei);
                    self.s.push(ConflictPair {
                        left: Interval::default(),
                        right: Interval {
                            low: Some(ei),
                            high: Some(ei),
                        },
                    });
                    if !self.integrate_new_return_edges(v, ei, e) {
                        return false;
                    }
                    self.ind[v as usize] += 1;
                }
            }

            if !descended {
                if let Some(e) = e {
                    self.remove_back_edges(e);
                }
            }
        }

        true
    }

    fn integrate_new_return_edges(&mut self, v: Node, ei: EIdx, e: Option<EIdx>) -> bool {
        if self.lowpt[ei] >= self.height[v as usize] {
            // no return edge below v
            return true;
        }

        if let Some(e) = e {
            if self.ind[v as usize] == 0 {
                // the outermost child edge passes its constraints upwards as-is
                self.lowpt_edge[e] = self.lowpt_edge[ei];
            } else if !self.add_constraints(ei, e) {
                return false;
            }
        }

        true
    }

    fn lowpt_of(&self, ei: Option<EIdx>) -> NumNodes {
        ei.map_or(0, |ei| self.lowpt[ei])
    }

    fn conflicting(&self, interval: Interval, b: EIdx) -> bool {
        match interval.high {
            Some(high) => self.lowpt[high] > self.lowpt[b],
            None => false,
        }
    }

    fn add_constraints(&mut self, ei: EIdx, e: EIdx) -> bool {
        let mut p = ConflictPair::default();

        // merge the return edges of e_i into p.right
        loop {
            let mut q = match self.s.pop() {
                Some(q) => q,
                None => break,
            };
            if !q.left.is_empty() {
                q.swap();
            }
            if !q.left.is_empty() {
                return false;
            }

            if self.lowpt_of(q.right.low) > self.lowpt[e] {
                // merge the interval
                if p.right.is_empty() {
                    p.right.high = q.right.high;
                } else if let Some(p_low) = p.right.low {
                    self.ref_[p_low] = q.right.high;
                }
                p.right.low = q.right.low;
            } else {
                // align to the lowest return edge of the parent
                if let Some(q_low) = q.right.low {
                    self.ref_[q_low] = self.lowpt_edge[e];
                }
            }

            if self.s.len() == self.stack_bottom[ei] {
                break;
            }
        }

        // merge the conflicting return edges of e_1 .. e_{i-1} into p.left
        while let Some(&top) = self.s.last() {
            if !(self.conflicting(top.left, ei) || self.conflicting(top.right, ei)) {
                break;
            }

            let mut q = match self.s.pop() {
                Some(q) => q,
                None => break,
            };
            if self.conflicting(q.right, ei) {
                q.swap();
            }
            if self.conflicting(q.right, ei) {
                return false;
            }

            // the part of q.right below lowpt(e_i) belongs to p.right
            if let Some(p_low) = p.right.low {
                self.ref_[p_low] = q.right.high;
            }
            if q.right.low.is_some() {
                p.right.low = q.right.low;
            }

            if p.left.is_empty() {
                p.left.high = q.left.high;
            } else if let Some(p_low) = p.left.low {
                self.ref_[p_low] = q.left.high;
            }
            p.left.low = q.left.low;
        }

        if !(p.left.is_empty() && p.right.is_empty()) {
            self.s.push(p);
        }
        true
    }

    fn pair_lowest(&self, p: &ConflictPair) -> NumNodes {
        match (p.left.low, p.right.low) {
            (Some(l), Some(r)) => self.lowpt[l].min(self.lowpt[r]),
            (Some(l), None) => self.lowpt[l],
            (None, Some(r)) => self.lowpt[r],
            (None, None) => INVALID_NODE,
        }
    }

    /// Drops and trims the intervals of back edges that return to the source
    /// of `e` once its subtree has been fully processed.
    fn remove_back_edges(&mut self, e: EIdx) {
        let u = self.edges[e].src;
        let height_u = self.height[u as usize];

        while let Some(top) = self.s.last() {
            if self.pair_lowest(top) != height_u {
                break;
            }
            self.s.pop();
        }

        if let Some(mut p) = self.s.pop() {
            while let Some(h) = p.left.high {
                if self.edges[h].dst != u {
                    break;
                }
                p.left.high = self.ref_[h];
            }
            if p.left.high.is_none() {
                if let Some(p_low) = p.left.low {
                    // the left interval just emptied out
                    self.ref_[p_low] = p.right.low;
                    p.left.low = None;
                }
            }

            while let Some(h) = p.right.high {
                if self.edges[h].dst != u {
                    break;
                }
                p.right.high = self.ref_[h];
            }
            if p.right.high.is_none() {
                if let Some(p_low) = p.right.low {
                    self.ref_[p_low] = p.left.low;
                    p.right.low = None;
                }
            }

            self.s.push(p);
        }

        if self.lowpt[e] < height_u {
            // e has a return edge: remember the side of the highest one
            if let Some(&top) = self.s.last() {
                let chosen = match (top.left.high, top.right.high) {
                    (Some(l), Some(r)) => {
                        if self.lowpt[l] > self.lowpt[r] {
                            Some(l)
                        } else {
                            Some(r)
                        }
                    }
                    (Some(l), None) => Some(l),
                    (_, hr) => hr,
                };
                self.ref_[e] = chosen;
            }
        }
    }
}

/// Planarity testing.
pub trait Planarity: AdjacencyList + NeighborsSlice + Sized {
    /// Returns *true* if the graph can be drawn in the plane without edge
    /// crossings, using the left-right planarity criterion.
    fn is_planar(&self) -> bool {
        let n = self.number_of_nodes() as u64;
        let m = self.number_of_edges() as u64;

        // Euler bound for simple graphs
        if n > 2 && m > 3 * n - 6 {
            return false;
        }

        LrState::new(self).run()
    }
}

impl<G> Planarity for G where G: AdjacencyList + NeighborsSlice {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{gens::*, graph::AdjArray};
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg64Mcg;

    fn petersen() -> AdjArray {
        let mut g = AdjArray::new(10);
        g.connect_cycle(0..5);
        for i in 0..5 {
            g.connect_path([i, i + 5]);
        }
        for i in 0..5u32 {
            g.connect_path([5 + i, 5 + (i + 2) % 5]);
        }
        g
    }

    #[test]
    fn small_graphs_are_planar() {
        assert!(AdjArray::new(0).is_planar());
        assert!(AdjArray::new(2).is_planar());

        let mut k4 = AdjArray::new(4);
        k4.connect_clique(&[0, 1, 2, 3]);
        assert!(k4.is_planar());
    }

    #[test]
    fn cycles_paths_and_trees_are_planar() {
        let mut g = AdjArray::new(20);
        g.connect_cycle(0..10);
        g.connect_path(10..20);
        assert!(g.is_planar());

        let rng = &mut Pcg64Mcg::seed_from_u64(7);
        for n in [10 as NumNodes, 50, 200] {
            let mut tree = AdjArray::new(n);
            for v in 1..n {
                tree.add_edge(v, rng.random_range(0..v));
            }
            assert!(tree.is_planar());
        }
    }

    #[test]
    fn k5_is_not_planar() {
        let mut g = AdjArray::new(5);
        g.connect_clique(&[0, 1, 2, 3, 4]);
        assert!(!g.is_planar());
    }

    #[test]
    fn k5_minus_an_edge_is_maximal_planar() {
        let mut g = AdjArray::new(5);
        g.connect_clique(&[0, 1, 2, 3]);
        g.connect_path([2, 4]);
        g.connect_path([3, 4]);
        g.connect_path([0, 4]);
        assert!(g.is_planar());
    }

    #[test]
    fn k33_is_not_planar() {
        // passes the Euler bound, so the testing phase has to reject it
        let g = AdjArray::from_edges(
            6,
            (0..3).flat_map(|u| (3..6).map(move |v| (u as Node, v as Node))),
        );
        assert!(!g.is_planar());
    }

    #[test]
    fn petersen_graph_is_not_planar() {
        assert!(!petersen().is_planar());
    }

    #[test]
    fn wheel_is_planar() {
        let mut g = AdjArray::new(7);
        g.connect_cycle(1..7);
        for v in 1..7 {
            g.connect_path([0, v]);
        }
        assert!(g.is_planar());
    }

    #[test]
    fn grids_are_planar() {
        for (rows, cols) in [(3 as Node, 3 as Node), (4, 5), (2, 9)] {
            let mut g = AdjArray::new(rows * cols);
            for r in 0..rows {
                g.connect_path((0..cols).map(|c| r * cols + c));
            }
            for c in 0..cols {
                g.connect_path((0..rows).map(|r| r * cols + c));
            }
            assert!(g.is_planar());
        }
    }

    #[test]
    fn disjoint_union_with_nonplanar_component() {
        let mut g = AdjArray::new(15);
        g.connect_cycle(0..5);
        for (u, v) in [
            (5, 8),
            (5, 9),
            (5, 10),
            (6, 8),
            (6, 9),
            (6, 10),
            (7, 8),
            (7, 9),
            (7, 10),
        ] {
            g.add_edge(u, v);
        }
        assert!(!g.is_planar());
    }

    #[test]
    fn dense_graphs_fail_the_euler_bound() {
        let rng = &mut Pcg64Mcg::seed_from_u64(11);
        let n = 20 as NumNodes;
        let mut g = AdjArray::new(n);
        while g.number_of_edges() as u64 <= 3 * n as u64 - 6 {
            let u = rng.random_range(0..n);
            let v = rng.random_range(0..n);
            if u != v {
                g.try_add_edge(u, v);
            }
        }
        assert!(!g.is_planar());
    }
}
