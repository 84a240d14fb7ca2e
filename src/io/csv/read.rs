//! CSV reading operations.

use std::{fs::File, path::Path};

use anyhow::{Context, Result, ensure};
use polars::{frame::DataFrame, io::SerReader, prelude::{Column, CsvReader, DataType, NamedFrom}, series::Series};

use crate::bench::RunRecord;

/// Reads a CSV file from `path` into a Polars DataFrame.
pub(crate) fn read_csv(path: &Path) -> Result<DataFrame> {
    let file = File::open(path)
        .with_context(|| format!("[io::csv::read] Failed to open CSV file: {}", path.display()))?;
    CsvReader::new(file)
        .finish()
        .with_context(|| format!("[io::csv::read] Failed to read CSV from {:?}", path))
}

/// Read benchmark run records from a results DataFrame.
///
/// Requires `category`, `n`, `time`, and `exitcode` columns. The `m`
/// column is optional; result files without it read back as zero edges.
pub(crate) fn read_results(df: &DataFrame) -> Result<Vec<RunRecord>> {
    ensure!(df.width() >= 4, "[io::csv::read] results CSV must have category,n,time,exitcode columns");

    let categories = df.column("category")
        .context("[io::csv::read] results CSV is missing the category column")?
        .cast(&DataType::String)?;
    let ns = df.column("n")
        .context("[io::csv::read] results CSV is missing the n column")?
        .cast(&DataType::UInt32)?;
    let times = df.column("time")
        .context("[io::csv::read] results CSV is missing the time column")?
        .cast(&DataType::Float64)?;
    let exitcodes = df.column("exitcode")
        .context("[io::csv::read] results CSV is missing the exitcode column")?
        .cast(&DataType::Int32)?;
    let ms = match df.column("m") {
        Ok(column) => column.cast(&DataType::UInt32)?,
        Err(_) => Column::from(Series::new("m".into(), vec![0u32; df.height()])),
    };

    let categories = categories.str()?;
    let ns = ns.u32()?;
    let ms = ms.u32()?;
    let times = times.f64()?;
    let exitcodes = exitcodes.i32()?;

    let mut records = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        records.push(RunRecord {
            category: categories.get(i).unwrap_or("").to_string(),
            n: ns.get(i).unwrap_or(0) as usize,
            m: ms.get(i).unwrap_or(0) as usize,
            time: times.get(i).unwrap_or(f64::NAN),
            // Rows with a null exitcode read as failures.
            exitcode: exitcodes.get(i).unwrap_or(1),
        });
    }
    Ok(records)
}
