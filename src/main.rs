use anyhow::Result;
use clap::Parser;

use sunder::cli::{Cli, Commands};
use sunder::commands::{analyze, bench, graphs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Analyze(args) => analyze::run(&cli, args),
        Commands::Bench(args) => bench::run(&cli, args),
        Commands::Graphs(args) => graphs::run(&cli, args),
    }
}
