/*!
# Vertex Connectivity via Unit Flows

Exact global **node connectivity** computed from maximum sets of internally
vertex-disjoint paths.

Every vertex `v` is split into `v_in` and `v_out` joined by a unit-capacity
arc; each undirected edge `{u, v}` becomes the arcs `u_out -> v_in` and
`v_out -> u_in`. A maximum `s_out -> t_in` flow in this network equals the
number of internally vertex-disjoint `s`-`t` paths. The global connectivity
is the minimum local connectivity over all non-adjacent pairs touching a
minimum-degree vertex and its neighborhood.

This is by far the most expensive metric in the crate (one flow computation
per candidate pair); large instances are expected to hit their time budget.
*/

use std::collections::VecDeque;

use itertools::Itertools;

use super::*;

const UNVISITED: u32 = u32::MAX;

/// Unit-capacity residual network on the node-split digraph of an undirected graph.
struct SplitNetwork {
    /// Arc indices per split node; the reverse of arc `a` is `a ^ 1`
    adj: Vec<Vec<u32>>,
    arc_to: Vec<u32>,
    arc_cap: Vec<u8>,
    init_cap: Vec<u8>,
}

impl SplitNetwork {
    fn new<G: AdjacencyList>(graph: &G) -> Self {
        let mut network = Self {
            adj: vec![Vec::new(); 2 * graph.len()],
            arc_to: Vec::new(),
            arc_cap: Vec::new(),
            init_cap: Vec::new(),
        };

        for v in graph.vertices() {
            network.add_arc(Self::node_in(v), Self::node_out(v), 1);
        }
        for Edge(u, v) in graph.edges(true) {
            if u == v {
                continue;
            }
            network.add_arc(Self::node_out(u), Self::node_in(v), 1);
            network.add_arc(Self::node_out(v), Self::node_in(u), 1);
        }

        network
    }

    fn node_in(v: Node) -> usize {
        2 * v as usize
    }

    fn node_out(v: Node) -> usize {
        2 * v as usize + 1
    }

    /// Adds an arc together with its residual reverse arc of capacity 0
    fn add_arc(&mut self, from: usize, to: usize, cap: u8) {
        let idx = self.arc_to.len() as u32;
        self.arc_to.push(to as u32);
        self.arc_cap.push(cap);
        self.adj[from].push(idx);

        self.arc_to.push(from as u32);
        self.arc_cap.push(0);
        self.adj[to].push(idx + 1);
    }

    /// Restores all capacities for the next flow computation
    fn reset(&mut self) {
        self.arc_cap.copy_from_slice(&self.init_cap);
    }

    /// Maximum number of internally vertex-disjoint paths between the
    /// distinct original nodes `s` and `t` (Edmonds-Karp, one BFS per unit).
    fn num_disjoint_paths(&mut self, s: Node, t: Node) -> NumNodes {
        debug_assert_ne!(s, t);
        let source = Self::node_out(s);
        let target = Self::node_in(t);

        let mut flow = 0;
        let mut pred_arc = vec![UNVISITED; self.adj.len()];
        loop {
            pred_arc.fill(UNVISITED);

            let mut queue = VecDeque::from(vec![source]);
            'bfs: while let Some(u) = queue.pop_front() {
                for &a in &self.adj[u] {
                    let w = self.arc_to[a as usize] as usize;
                    if self.arc_cap[a as usize] > 0 && pred_arc[w] == UNVISITED && w != source {
                        pred_arc[w] = a;
                        if w == target {
                            break 'bfs;
                        }
                        queue.push_back(w);
                    }
                }
            }

            if pred_arc[target] == UNVISITED {
                return flow;
            }

            // walk the augmenting path backwards and flip one unit of capacity
            let mut v = target;
            while v != source {
                let a = pred_arc[v] as usize;
                self.arc_cap[a] -= 1;
                self.arc_cap[a ^ 1] += 1;
                v = self.arc_to[a ^ 1] as usize;
            }
            flow += 1;
        }
    }
}

/// Exact global vertex connectivity.
pub trait NodeConnectivity: AdjacencyList + AdjacencyTest {
    /// Returns the minimum number of nodes whose removal disconnects the
    /// graph (or `n - 1` for complete graphs, 0 for disconnected ones).
    fn node_connectivity(&self) -> NumNodes {
        let n = self.number_of_nodes();
        if n <= 1 {
            return 0;
        }

        let mut network = SplitNetwork::new(self);

        // all candidate pairs touch a minimum-degree vertex or its neighborhood
        let v = self
            .vertices()
            .min_by_key(|&u| self.degree_of(u))
            .unwrap();
        let mut kappa = self.degree_of(v);

        for w in self.vertices() {
            if kappa == 0 {
                return 0;
            }
            if w != v && !self.has_edge(v, w) {
                network.reset();
                kappa = kappa.min(network.num_disjoint_paths(v, w));
            }
        }

        let neighbors = self.neighbors_of(v).collect_vec();
        for (&x, &y) in neighbors.iter().tuple_combinations() {
            if x != y && !self.has_edge(x, y) {
                network.reset();
                kappa = kappa.min(network.num_disjoint_paths(x, y));
            }
        }

        kappa
    }
}

impl<G> NodeConnectivity for G where G: AdjacencyList + AdjacencyTest {}
