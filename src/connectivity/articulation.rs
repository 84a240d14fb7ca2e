use std::collections::BTreeSet;

use crate::connectivity::count_reachable;
use crate::graph::Graph;

/// Pick the smallest node id that is not `excluded`, if any remains.
fn select_start(num_nodes: usize, excluded: usize) -> Option<usize> {
    (0..num_nodes).find(|&node| node != excluded)
}

/// Find all articulation points by single-vertex removal trials.
///
/// Each candidate vertex is deleted in turn; it is reported when the
/// traversal from the lowest surviving node id no longer reaches every
/// remaining node. Graphs with two or fewer nodes have no articulation
/// points under this convention.
///
/// Connectivity is judged from one start node per trial, not from the
/// original component structure: if the input graph is already
/// disconnected, every trial sees fewer reachable nodes than the remainder
/// holds, so nodes outside the start component are flagged along with it.
/// Pass a connected graph for the classical reading of the result.
///
/// Runs one O(V + E) traversal per candidate, O(V·(V+E)) total.
pub fn find_articulation_points(graph: &Graph) -> BTreeSet<usize> {
    let num_nodes = graph.len();
    if num_nodes <= 2 { return BTreeSet::new() }

    let mut points = BTreeSet::new();
    for candidate in 0..num_nodes {
        let Some(start) = select_start(num_nodes, candidate) else { continue };

        // Count what survives with `candidate` deleted. Fewer than all
        // remaining nodes means the deletion disconnected something.
        let reachable = count_reachable(graph, start, Some(candidate), None);
        if reachable < num_nodes - 1 { points.insert(candidate); }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(graph: &Graph) -> Vec<usize> {
        find_articulation_points(graph).into_iter().collect()
    }

    #[test]
    fn path_graph_interior_nodes_are_articulation_points() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(points(&graph), vec![1, 2]);
    }

    #[test]
    fn cycle_graph_has_no_articulation_points() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        assert_eq!(points(&graph), Vec::<usize>::new());
    }

    #[test]
    fn two_triangles_joined_by_an_edge() {
        let graph = Graph::from_edges(
            6,
            &[(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3), (2, 3)],
        );
        assert_eq!(points(&graph), vec![2, 3]);
    }

    #[test]
    fn star_center_is_the_only_articulation_point() {
        let graph = Graph::from_edges(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(points(&graph), vec![0]);
    }

    #[test]
    fn graphs_with_at_most_two_nodes_have_none() {
        assert!(find_articulation_points(&Graph::new(0)).is_empty());
        assert!(find_articulation_points(&Graph::new(1)).is_empty());
        assert!(find_articulation_points(&Graph::from_edges(2, &[(0, 1)])).is_empty());
    }

    #[test]
    fn repeated_calls_return_identical_sets() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(find_articulation_points(&graph), find_articulation_points(&graph));
    }

    #[test]
    fn result_is_a_subset_of_the_node_ids() {
        let graph = Graph::from_edges(6, &[(0, 1), (2, 3), (3, 4)]);
        assert!(find_articulation_points(&graph).iter().all(|&node| node < graph.len()));
    }

    // Connectivity is judged from the start node's component only. In a
    // graph that is already disconnected, every removal trial comes up
    // short, so all triangle nodes are flagged while the isolated node,
    // whose removal leaves the count intact, is not.
    #[test]
    fn already_disconnected_input_flags_through_the_start_component() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(points(&graph), vec![0, 1, 2]);
    }
}
