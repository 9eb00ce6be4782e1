/*!
# Graph Representation

A single undirected, simple graph representation backed by an adjacency array.
Instances are loaded once, evaluated, and discarded; the representation is therefore
optimized for cheap construction and read-only traversal rather than for editing.

Access is exposed through small traits so that every algorithm in [`crate::algo`]
states exactly which capabilities it needs.
*/

use crate::{edge::*, node::*};

/// Provides getters pertaining to the size of a graph
pub trait GraphOrder {
    /// Returns the number of nodes of the graph
    fn number_of_nodes(&self) -> NumNodes;

    /// Returns the number of edges of the graph
    fn number_of_edges(&self) -> NumEdges;

    /// Return the number of nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns an iterator over V.
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        0..self.number_of_nodes()
    }

    /// Returns empty bitset with one entry per node
    fn vertex_bitset_unset(&self) -> NodeBitSet {
        NodeBitSet::new(self.number_of_nodes())
    }
}

/// Traits pertaining getters for neighborhoods & edges
pub trait AdjacencyList: GraphOrder + Sized {
    /// Returns an iterator over the (open) neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of neighbors of `u`
    /// ** Panics if `u >= n` **
    fn degree_of(&self, u: Node) -> NumNodes;

    /// Returns an iterator over the closed neighborhood of a given vertex.
    /// ** Panics if `u >= n` **
    fn closed_neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        std::iter::once(u).chain(self.neighbors_of(u))
    }

    /// Returns an iterator over all degrees in vertex order
    fn degrees(&self) -> impl Iterator<Item = NumNodes> + '_ {
        self.vertices().map(|u| self.degree_of(u))
    }

    /// Returns the maximum degree in the graph
    fn max_degree(&self) -> NumNodes {
        self.degrees().max().unwrap_or(0)
    }

    /// Returns an iterator over all edges in the graph.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.neighbors_of(u)
                .map(move |v| Edge(u, v))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }
}

/// Trait to test existence of certain structures in a graph.
pub trait AdjacencyTest {
    /// Returns *true* if the edge (u,v) exists in the graph.
    /// ** Panics if `u >= n || v >= n` **
    fn has_edge(&self, u: Node, v: Node) -> bool;
}

/// Trait for accessing the neighborhood of nodes as slices
pub trait NeighborsSlice {
    /// Returns a slice-reference of the neighborhood of a given vertex
    fn as_neighbors_slice(&self, u: Node) -> &[Node];
}

/// An undirected graph as an array of neighbor lists.
///
/// The graph is simple: `try_add_edge` deduplicates, `add_edge` panics on duplicates.
#[derive(Clone)]
pub struct AdjArray {
    nbs: Vec<Vec<Node>>,
    num_edges: NumEdges,
}

impl AdjArray {
    /// Creates an empty graph with n singleton nodes
    pub fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![Vec::new(); n as usize],
            num_edges: 0,
        }
    }

    /// Create a graph from a number of nodes and an iterator over Edges.
    /// ** Panics if an edge is repeated or an endpoint is `>= n` **
    pub fn from_edges(n: NumNodes, edges: impl IntoIterator<Item = impl Into<Edge>>) -> Self {
        let mut graph = Self::new(n);
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Adds the edge *{u,v}* to the graph.
    /// ** Panics if `u >= n || v >= n` or the edge was already present **
    pub fn add_edge(&mut self, u: Node, v: Node) {
        assert!(!self.try_add_edge(u, v));
    }

    /// Adds the edge `{u, v}` to the graph if not present.
    /// Returns *true* exactly if the edge was present previously.
    /// ** Panics if `u >= n || v >= n` **
    pub fn try_add_edge(&mut self, u: Node, v: Node) -> bool {
        assert!((v as usize) < self.nbs.len());
        if self.has_edge(u, v) {
            return true;
        }

        self.nbs[u as usize].push(v);
        if u != v {
            self.nbs[v as usize].push(u);
        }
        self.num_edges += 1;
        false
    }
}

impl GraphOrder for AdjArray {
    fn number_of_nodes(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }
}

impl AdjacencyList for AdjArray {
    fn neighbors_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        self.nbs[u as usize].iter().copied()
    }

    fn degree_of(&self, u: Node) -> NumNodes {
        self.nbs[u as usize].len() as NumNodes
    }
}

impl AdjacencyTest for AdjArray {
    fn has_edge(&self, u: Node, v: Node) -> bool {
        // scan the smaller of the two neighborhoods
        let (u, v) = if self.degree_of(u) <= self.degree_of(v) {
            (u, v)
        } else {
            (v, u)
        };
        self.nbs[u as usize].contains(&v)
    }
}

impl NeighborsSlice for AdjArray {
    fn as_neighbors_slice(&self, u: Node) -> &[Node] {
        &self.nbs[u as usize]
    }
}
