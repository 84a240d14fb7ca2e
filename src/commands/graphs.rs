use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::fs;

use anyhow::{Context, Result, ensure};

use crate::bench::{CategoryStats, RunRecord, summarize};
use crate::cli::{Cli, GraphsArgs};
use crate::io::csv::{read_csv, read_results};
use crate::io::svg::{Series, SvgWriter, write_bar_chart, write_scatter_chart};

pub fn run(cli: &Cli, args: &GraphsArgs) -> Result<()> {
    let df = read_csv(&args.results)?;
    let records = read_results(&df)?;

    // Successful runs only.
    let successful = records.into_iter()
        .filter(|record| record.exitcode == 0)
        .collect::<Vec<_>>();
    ensure!(!successful.is_empty(), "[graphs] no successful runs in {}", args.results.display());

    if cli.verbose > 0 {
        eprintln!("[graphs] loaded {} successful runs from {}", successful.len(), args.results.display());
    }

    fs::create_dir_all(&args.out)
        .with_context(|| format!("[graphs] Failed to create {}", args.out.display()))?;

    // Log-log scatter: time vs instance size, one series per category.
    let scatter_path = args.out.join("time_vs_size.svg");
    let mut writer = SvgWriter::new(&scatter_path)?;
    write_scatter_chart(&mut writer, "Time vs Graph Size", &collect_series(&successful))?;
    writer.finish()?;
    println!("Saved: {}", scatter_path.display());

    // Bar chart: mean time with std-dev whiskers per category.
    let stats = summarize(&successful);
    let bar_path = args.out.join("time_vs_type.svg");
    let mut writer = SvgWriter::new(&bar_path)?;
    write_bar_chart(&mut writer, "Average Time by Graph Type", &stats)?;
    writer.finish()?;
    println!("Saved: {}", bar_path.display());

    print!("{}", format_summary_table(&stats));
    Ok(())
}

/// Group (n, time) samples by category, categories in sorted order.
fn collect_series(records: &[RunRecord]) -> Vec<Series> {
    let mut by_category: BTreeMap<&str, Vec<(f64, f64)>> = BTreeMap::new();
    for record in records {
        by_category.entry(record.category.as_str())
            .or_default()
            .push((record.n as f64, record.time));
    }

    by_category.into_iter()
        .map(|(name, points)| Series { name: name.to_string(), points })
        .collect()
}

/// Fixed-width console table of the per-category summary statistics.
pub(crate) fn format_summary_table(stats: &[CategoryStats]) -> String {
    let rule = "=".repeat(70);
    let mut out = String::new();

    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "SUMMARY STATISTICS BY CATEGORY");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{:<20} {:<12} {:<12} {:<12}", "Category", "Mean (s)", "Median (s)", "Std Dev");
    let _ = writeln!(out, "{}", "-".repeat(70));
    for stat in stats {
        let _ = writeln!(
            out,
            "{:<20} {:<12.6} {:<12.6} {:<12.6}",
            stat.category, stat.mean, stat.median, stat.std_dev,
        );
    }
    let _ = writeln!(out, "{rule}");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(category: &str, n: usize, time: f64) -> RunRecord {
        RunRecord { category: category.to_string(), n, m: n, time, exitcode: 0 }
    }

    #[test]
    fn series_group_by_category_in_sorted_order() {
        let records = vec![
            record("star", 16, 0.1),
            record("cycle", 16, 0.2),
            record("star", 32, 0.4),
        ];

        let series = collect_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name, "cycle");
        assert_eq!(series[1].name, "star");
        assert_eq!(series[1].points, vec![(16.0, 0.1), (32.0, 0.4)]);
    }

    #[test]
    fn summary_table_lists_each_category_row() {
        let stats = summarize(&[
            record("path", 16, 0.5),
            record("path", 32, 1.5),
            record("grid", 16, 2.0),
        ]);

        let table = format_summary_table(&stats);
        assert!(table.contains("SUMMARY STATISTICS BY CATEGORY"));
        assert!(table.contains("path"));
        assert!(table.contains("grid"));
        assert!(table.contains("1.000000"));
    }
}
