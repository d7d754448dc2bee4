//! Loading price series from CSV files.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use stocked_config::DataConfig;
use stocked_core::{retain_valid, PricePoint};
use tracing::{debug, info};

/// Reads a `(date, price)` series from a CSV file with a header row.
///
/// Rows whose price is unparsable, non-finite or not strictly positive are
/// dropped, so the result satisfies the analytics input contract.
pub fn read_series(path: &Path, data: &DataConfig) -> Result<Vec<PricePoint>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read header row of {}", path.display()))?
        .clone();
    let date_idx = column_index(&headers, &data.date_column, path)?;
    let price_idx = column_index(&headers, &data.price_column, path)?;

    let mut series = Vec::new();
    let mut unparsable = 0usize;
    for (row, record) in reader.records().enumerate() {
        // Header is line 1.
        let record =
            record.with_context(|| format!("malformed line {} in {}", row + 2, path.display()))?;
        let date = record.get(date_idx).unwrap_or_default();
        match record
            .get(price_idx)
            .and_then(|raw| raw.parse::<f64>().ok())
        {
            Some(price) => series.push(PricePoint::new(date, price)),
            None => unparsable += 1,
        }
    }

    let invalid = retain_valid(&mut series);
    if unparsable + invalid > 0 {
        debug!(
            path = %path.display(),
            unparsable,
            invalid,
            "dropped rows without a usable price"
        );
    }
    info!(path = %path.display(), samples = series.len(), "loaded price series");
    Ok(series)
}

fn column_index(headers: &StringRecord, name: &str, path: &Path) -> Result<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(name))
        .ok_or_else(|| anyhow!("column '{name}' not found in {}", path.display()))
}
