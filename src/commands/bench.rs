use anyhow::{Result, ensure};

use crate::bench::run_sweep;
use crate::cli::{BenchArgs, Cli};
use crate::io::csv::write_results;

pub fn run(cli: &Cli, args: &BenchArgs) -> Result<()> {
    ensure!(args.max_n >= 16, "[bench] --max-n must be at least 16");
    ensure!(args.samples > 0, "[bench] --samples must be positive");

    let mut rng = rand::rng();
    let records = run_sweep(args.max_n, args.samples, cli.verbose, &mut rng);

    write_results(&records, &args.out)?;
    println!("Wrote {} timing records -> {}", records.len(), args.out.display());
    Ok(())
}
