//! CSV output of monthly tables and flat index series.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use caeli_index::{IndexKind, MonthlyTable};
use chrono::NaiveDate;
use csv::Writer;
use tracing::info;

use crate::error::IoError;

/// Formats a value cell; missing values are written as empty cells.
fn cell(v: f64) -> String {
    if v.is_finite() { v.to_string() } else { String::new() }
}

/// Write a [`MonthlyTable`] as CSV to any writer.
///
/// Header: `year,<label>,<kind>_<label>,...`; one row per year. Values are
/// written unrounded.
///
/// # Errors
///
/// Returns [`IoError`] if writing fails.
pub fn write_table<W: Write>(writer: W, table: &MonthlyTable) -> Result<(), IoError> {
    let mut wtr = Writer::from_writer(writer);

    let mut header = vec!["year".to_string()];
    header.extend(table.headers());
    wtr.write_record(&header)?;

    for (i, year) in table.years().iter().enumerate() {
        let mut row = vec![year.to_string()];
        row.extend(table.row(i).into_iter().map(cell));
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a [`MonthlyTable`] to a CSV file.
///
/// # Errors
///
/// Returns [`IoError`] if the file cannot be created or written.
pub fn write_table_csv(path: &Path, table: &MonthlyTable) -> Result<(), IoError> {
    let file = File::create(path)?;
    write_table(file, table)?;
    info!(path = %path.display(), rows = table.n_rows(), "wrote monthly table");
    Ok(())
}

/// Write a flat index series as CSV to any writer.
///
/// Header: `date,value,<kind>`.
///
/// # Errors
///
/// Returns [`IoError::InvalidConfig`] if the slices differ in length, or
/// [`IoError`] if writing fails.
pub fn write_series<W: Write>(
    writer: W,
    dates: &[NaiveDate],
    values: &[f64],
    index: &[f64],
    kind: IndexKind,
) -> Result<(), IoError> {
    if dates.len() != values.len() || values.len() != index.len() {
        return Err(IoError::InvalidConfig {
            reason: format!(
                "series lengths differ: {} dates, {} values, {} index values",
                dates.len(),
                values.len(),
                index.len()
            ),
        });
    }

    let kind = kind.to_string();
    let mut wtr = Writer::from_writer(writer);
    wtr.write_record(["date", "value", kind.as_str()])?;
    for ((date, &v), &z) in dates.iter().zip(values).zip(index) {
        wtr.write_record([date.format("%Y-%m-%d").to_string(), cell(v), cell(z)])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write a flat index series to a CSV file.
///
/// # Errors
///
/// See [`write_series`].
pub fn write_series_csv(
    path: &Path,
    dates: &[NaiveDate],
    values: &[f64],
    index: &[f64],
    kind: IndexKind,
) -> Result<(), IoError> {
    let file = File::create(path)?;
    write_series(file, dates, values, index, kind)?;
    info!(path = %path.display(), rows = index.len(), "wrote index series");
    Ok(())
}
