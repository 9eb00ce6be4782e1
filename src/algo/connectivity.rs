/*!
Connectivity-derived properties: connected components, the feedback edge
number, and the diameter.
*/

use super::*;

/// Component counting and the properties that follow directly from it.
pub trait Connectivity: AdjacencyList + Sized {
    /// Returns the number of connected components.
    fn number_of_connected_components(&self) -> NumNodes {
        if self.is_empty() {
            return 0;
        }

        let mut components = 1;
        let mut bfs = self.bfs(0);
        loop {
            bfs.by_ref().for_each(drop);
            if !bfs.try_restart_at_unvisited() {
                return components;
            }
            components += 1;
        }
    }

    /// Returns *true* if the graph is connected. The empty graph counts as connected.
    fn is_connected(&self) -> bool {
        self.number_of_connected_components() <= 1
    }

    /// Returns the number of edges that have to be removed to make the graph a
    /// forest, i.e. `m - (n - c)` where `c` is the number of connected components.
    fn number_of_feedback_edges(&self) -> NumEdges {
        let spanning_forest = self.number_of_nodes() - self.number_of_connected_components();
        self.number_of_edges() - spanning_forest as NumEdges
    }

    /// Returns the exact diameter via a BFS from every node,
    /// or `None` for the empty or a disconnected graph.
    fn diameter(&self) -> Option<NumNodes> {
        if self.is_empty() {
            return None;
        }

        let mut diameter = 0;
        for u in self.vertices() {
            let ecc = self.bfs_distances(u).into_iter().max().unwrap_or(0);
            if ecc == INVALID_NODE {
                return None;
            }
            diameter = diameter.max(ecc);
        }

        Some(diameter)
    }
}

impl<G> Connectivity for G where G: AdjacencyList {}
