/*!
# Substructure Generators

Utility methods to generate common **substructures** (paths, cycles, cliques)
inside an already existing graph. Mainly used to assemble known-shape graphs
when testing the metric implementations.
*/

use itertools::Itertools;

use crate::{graph::AdjArray, node::Node};

/// Trait for creating additional **substructures** (paths, cycles, cliques)
/// inside an already existing graph. Existing edges are kept as-is.
pub trait GeneratorSubstructures {
    /// Connects the given nodes in order with a **simple path**.
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>;

    /// Connects the given nodes with a **cycle**, i.e. a path whose last
    /// node is additionally connected back to the first.
    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>;

    /// Connects all given nodes into a **clique** (complete subgraph).
    fn connect_clique(&mut self, nodes: &[Node]);
}

impl GeneratorSubstructures for AdjArray {
    fn connect_path<P>(&mut self, nodes_on_path: P)
    where
        P: IntoIterator<Item = Node>,
    {
        for (u, v) in nodes_on_path.into_iter().tuple_windows() {
            self.try_add_edge(u, v);
        }
    }

    fn connect_cycle<C>(&mut self, nodes_in_cycle: C)
    where
        C: IntoIterator<Item = Node>,
    {
        let mut iter = nodes_in_cycle.into_iter();
        let first = match iter.next() {
            Some(u) => u,
            None => return,
        };

        let mut prev = first;
        for v in iter {
            self.try_add_edge(prev, v);
            prev = v;
        }

        if prev != first {
            self.try_add_edge(prev, first);
        }
    }

    fn connect_clique(&mut self, nodes: &[Node]) {
        for (i, &u) in nodes.iter().enumerate() {
            for &v in &nodes[i + 1..] {
                self.try_add_edge(u, v);
            }
        }
    }
}
