//! Edge-list input: a node count, an edge count, then one `u v` line per edge.

use std::io::BufRead;

use anyhow::{Context, Result};

use crate::graph::Graph;

/// Whether to print the interactive prompts while reading.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Prompt { Interactive, Silent }

/// Read a graph description from `reader`.
///
/// The first line holds the node count, the second the edge count, and
/// each following line one edge as two whitespace-separated node ids.
/// Malformed or out-of-range edge lines are reported to stderr and
/// skipped; the remaining lines are still read. Running out of input
/// before the announced edge count is reached is not an error: the edges
/// accepted so far make up the graph.
pub(crate) fn read_graph<R: BufRead>(reader: &mut R, prompt: Prompt) -> Result<Graph> {
    if prompt == Prompt::Interactive { println!("Enter the number of nodes (e.g., 5):") }
    let num_nodes = read_count(reader, "node count")?;

    if prompt == Prompt::Interactive { println!("Enter the number of edges (e.g., 6):") }
    let num_edges = read_count(reader, "edge count")?;

    if prompt == Prompt::Interactive {
        println!("\nEnter {num_edges} edges, one per line (e.g., '0 1'):");
    }

    let mut graph = Graph::new(num_nodes);
    for _ in 0..num_edges {
        // Early end of input stops the edge-reading loop without error.
        let Some(line) = next_line(reader)? else { break };
        match parse_edge(&line, num_nodes) {
            Ok((u, v)) => graph.add_edge(u, v),
            Err(message) => eprintln!("{message}"),
        }
    }
    Ok(graph)
}

/// Read one line and parse it as a count.
fn read_count<R: BufRead>(reader: &mut R, what: &str) -> Result<usize> {
    let line = next_line(reader)?
        .with_context(|| format!("[io::edges] Input ended before the {what}"))?;
    line.trim().parse::<usize>()
        .with_context(|| format!("[io::edges] Invalid {what}: {:?}", line.trim()))
}

/// Read the next line, or `None` at end of input.
fn next_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let bytes = reader.read_line(&mut line)
        .context("[io::edges] Failed to read input")?;
    Ok((bytes > 0).then_some(line))
}

/// Parse an edge line, validating both endpoints against `num_nodes`.
fn parse_edge(line: &str, num_nodes: usize) -> std::result::Result<(usize, usize), String> {
    let mut fields = line.split_whitespace();
    let (Some(u), Some(v)) = (fields.next(), fields.next()) else {
        return Err("Invalid input. Please enter two space-separated node IDs.".into());
    };
    let (Ok(u), Ok(v)) = (u.parse::<usize>(), v.parse::<usize>()) else {
        return Err("Invalid input. Please enter two space-separated node IDs.".into());
    };
    if u >= num_nodes || v >= num_nodes {
        return Err(format!(
            "Invalid edge: ({u}, {v}). Nodes must be between 0 and {}.",
            num_nodes.saturating_sub(1),
        ));
    }
    Ok((u, v))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read(input: &str) -> Result<Graph> {
        read_graph(&mut Cursor::new(input), Prompt::Silent)
    }

    #[test]
    fn reads_a_complete_description() {
        let graph = read("4\n3\n0 1\n1 2\n2 3\n").unwrap();

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.canonical_edges().len(), 3);
        assert_eq!(graph.neighbors(1).collect::<Vec<_>>(), vec![0, 2]);
    }

    #[test]
    fn skips_malformed_and_out_of_range_edge_lines() {
        let graph = read("3\n5\n0 1\nnope\n7 0\n1\n1 2\n").unwrap();

        assert_eq!(graph.len(), 3);
        assert_eq!(graph.canonical_edges().len(), 2);
    }

    #[test]
    fn negative_ids_are_rejected_per_line() {
        let graph = read("3\n2\n-1 0\n0 2\n").unwrap();
        assert_eq!(graph.canonical_edges().len(), 1);
    }

    #[test]
    fn early_end_of_input_keeps_accepted_edges() {
        let graph = read("5\n10\n0 1\n1 2\n").unwrap();

        assert_eq!(graph.len(), 5);
        assert_eq!(graph.canonical_edges().len(), 2);
    }

    #[test]
    fn non_integer_node_count_is_an_error() {
        let err = read("five\n2\n0 1\n").unwrap_err();
        assert!(err.to_string().contains("node count"));
    }

    #[test]
    fn missing_edge_count_is_an_error() {
        let err = read("5\n").unwrap_err();
        assert!(err.to_string().contains("edge count"));
    }

    #[test]
    fn tabs_and_extra_whitespace_are_accepted() {
        let graph = read("3\n2\n0\t1\n 1   2 \n").unwrap();
        assert_eq!(graph.canonical_edges().len(), 2);
    }
}
