//! CSV point files: a header row and two float columns `x` and `y`.

use anyhow::{bail, Context, Result};
use hullcheck::Point;
use polars::prelude::*;
use std::fs::{self, File};
use std::path::Path;

/// Read every row of `path` as a point. Missing cells are an error.
pub fn read_points(path: &Path) -> Result<Vec<Point>> {
    let df = LazyCsvReader::new(path)
        .with_has_header(true)
        .finish()
        .and_then(|lf| lf.collect())
        .with_context(|| format!("reading {}", path.display()))?;
    let xs = float_column(&df, "x")?;
    let ys = float_column(&df, "y")?;
    let mut pts = Vec::with_capacity(df.height());
    for (row, (x, y)) in xs.into_iter().zip(ys).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => pts.push(Point::new(x, y)),
            _ => bail!("{}: row {} has an empty coordinate", path.display(), row + 1),
        }
    }
    tracing::debug!(path = %path.display(), n = pts.len(), "read points");
    Ok(pts)
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = df
        .column(name)
        .with_context(|| format!("missing column {name:?}"))?
        .cast(&DataType::Float64)?;
    Ok(col.f64()?.into_iter().collect())
}

/// Write `pts` to `path` (parent directories are created).
pub fn write_points(path: &Path, pts: &[Point]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    let xs: Vec<f64> = pts.iter().map(|p| p.x).collect();
    let ys: Vec<f64> = pts.iter().map(|p| p.y).collect();
    let mut df = df!("x" => xs, "y" => ys)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
