use std::collections::BTreeSet;

use crate::connectivity::count_reachable;
use crate::graph::{Edge, Graph};

/// Find all bridges by single-edge removal trials.
///
/// Each distinct undirected edge is deleted in turn; it is reported when
/// the traversal from node 0 no longer reaches every node. Node 0 is a
/// valid start for every trial because removing an edge removes no vertex;
/// if node 0 is isolated it counts only itself, which still registers as a
/// disconnection whenever the graph has more than one node.
///
/// As with [`find_articulation_points`](crate::find_articulation_points),
/// connectivity is judged from the start node's component: an input graph
/// that is already disconnected reports every edge, because no traversal
/// can reach all nodes. Parallel copies of an edge collapse to one
/// canonical trial whose exclusion suppresses every stored copy at once,
/// so a doubled edge is still reported when its endpoints separate.
///
/// Runs one O(V + E) traversal per distinct edge, O(E·(V+E)) total.
pub fn find_bridges(graph: &Graph) -> BTreeSet<Edge> {
    if graph.len() <= 1 { return BTreeSet::new() }

    let mut bridges = BTreeSet::new();
    for edge in graph.canonical_edges() {
        let reachable = count_reachable(graph, 0, None, Some(edge));
        if reachable < graph.len() { bridges.insert(edge); }
    }
    bridges
}
