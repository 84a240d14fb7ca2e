use std::fmt::Write as _;
use std::{fs::File, io::{BufReader, stdin}};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{AnalyzeArgs, Cli, ReportFormat};
use crate::connectivity::{find_articulation_points, find_bridges};
use crate::graph::{Edge, Graph};
use crate::io::edges::{Prompt, read_graph};

/// Analysis results in reporting order.
#[derive(Serialize, Debug)]
pub(crate) struct AnalysisReport {
    pub(crate) num_nodes: usize,
    pub(crate) num_edges: usize,
    pub(crate) articulation_points: Vec<usize>,
    pub(crate) bridges: Vec<Edge>,
}

pub fn run(cli: &Cli, args: &AnalyzeArgs) -> Result<()> {
    let graph = match &args.input {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("[analyze] Failed to open {}", path.display()))?;
            read_graph(&mut BufReader::new(file), Prompt::Silent)?
        }
        None => read_graph(&mut stdin().lock(), Prompt::Interactive)?,
    };

    if cli.verbose > 0 {
        eprintln!("[analyze] n={} m={}", graph.len(), graph.canonical_edges().len());
    }

    let report = analyze(&graph);
    match args.format {
        ReportFormat::Text => print!("{}", format_text_report(&report)),
        ReportFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("[analyze] Failed to serialize the report")?;
            println!("{json}");
        }
    }
    Ok(())
}

/// Run both finders over `graph` and collect the results in sorted order.
pub(crate) fn analyze(graph: &Graph) -> AnalysisReport {
    AnalysisReport {
        num_nodes: graph.len(),
        num_edges: graph.canonical_edges().len(),
        articulation_points: find_articulation_points(graph).into_iter().collect(),
        bridges: find_bridges(graph).into_iter().collect(),
    }
}

/// Render the report as console text, substituting the literal `None`
/// for an empty result set.
pub(crate) fn format_text_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Graph has {} nodes and {} edges.", report.num_nodes, report.num_edges);
    let _ = writeln!(out, "Articulation points: {}", format_set(&report.articulation_points));
    let _ = writeln!(out, "Bridges: {}", format_set(&report.bridges));
    out
}

fn format_set<T: std::fmt::Display>(items: &[T]) -> String {
    if items.is_empty() { return "None".to_string() }

    let body = items.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{{{body}}}")
}
