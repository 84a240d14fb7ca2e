use clap::{Args, Parser, Subcommand, ValueEnum, ValueHint};
use std::path::PathBuf;

/// Connectivity analyzer CLI (argument schema only)
#[derive(Parser, Debug)]
#[command(name = "sunder", version, about, propagate_version = true)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Report the articulation points and bridges of a graph
    Analyze(AnalyzeArgs),

    /// Time the analyzer over generated graph families, writing a results CSV
    Bench(BenchArgs),

    /// Render performance charts and a summary table from a results CSV
    Graphs(GraphsArgs),
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, ValueEnum)]
pub enum ReportFormat { Text, Json }

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Read the graph description from a file instead of interactive stdin
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Output format for the analysis report
    #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

#[derive(Args, Debug)]
pub struct BenchArgs {
    /// Output CSV of timing results
    #[arg(long, default_value = "results.csv", value_hint = ValueHint::FilePath)]
    pub out: PathBuf,

    /// Largest instance size to generate (sizes double, starting at 16)
    #[arg(long, default_value_t = 512)]
    pub max_n: usize,

    /// Instances generated per (category, size) point
    #[arg(long, default_value_t = 3)]
    pub samples: usize,
}

#[derive(Args, Debug)]
pub struct GraphsArgs {
    /// Input CSV of timing results
    #[arg(value_hint = ValueHint::FilePath)]
    pub results: PathBuf,

    /// Output directory for the rendered SVG charts
    #[arg(long, default_value = "graphs", value_hint = ValueHint::DirPath)]
    pub out: PathBuf,
}
