//! CSV writing operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result};
use polars::{frame::DataFrame, io::SerWriter, prelude::{CsvWriter, NamedFrom}, series::Series};

use crate::bench::RunRecord;

/// Write a DataFrame to a CSV file.
pub(crate) fn write_csv(df: &mut DataFrame, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("[io::csv::write] Failed to create CSV file: {}", path.display()))?;
    CsvWriter::new(file)
        .finish(df)
        .with_context(|| format!("[io::csv::write] Failed to write CSV to {:?}", path))
}

/// Write benchmark run records to a CSV file.
///
/// Columns: category, n, m, time, exitcode.
pub(crate) fn write_results(records: &[RunRecord], path: &Path) -> Result<()> {
    let categories = records.iter().map(|r| r.category.clone()).collect::<Vec<_>>();
    let ns = records.iter().map(|r| r.n as u32).collect::<Vec<_>>();
    let ms = records.iter().map(|r| r.m as u32).collect::<Vec<_>>();
    let times = records.iter().map(|r| r.time).collect::<Vec<_>>();
    let exitcodes = records.iter().map(|r| r.exitcode).collect::<Vec<_>>();

    let mut df = DataFrame::new(vec![
        Series::new("category".into(), categories).into(),
        Series::new("n".into(), ns).into(),
        Series::new("m".into(), ms).into(),
        Series::new("time".into(), times).into(),
        Series::new("exitcode".into(), exitcodes).into(),
    ])?;

    write_csv(&mut df, path)
}
