//! CSV reader configuration and parsing of dated series.

use std::fs::File;
use std::path::Path;

use caeli_index::climatic_water_balance;
use chrono::{NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info};

use crate::dated::DatedSeries;
use crate::error::IoError;

/// Cell contents read as a missing value (compared case-insensitively).
const MISSING_MARKERS: [&str; 5] = ["", "na", "nan", "null", "-"];

// ---------------------------------------------------------------------------
// ReaderConfig
// ---------------------------------------------------------------------------

/// Configuration for reading a dated series from CSV.
///
/// Use the builder methods (`with_*`) to customise column names and the
/// date format. The [`Default`] implementation expects `date` and `value`
/// columns with ISO dates (`%Y-%m-%d`) and no PET column.
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Header of the date column.
    date_column: String,
    /// Header of the observation column (precipitation).
    value_column: String,
    /// Optional header of a potential evapotranspiration column subtracted
    /// from the observation column.
    pet_column: Option<String>,
    /// chrono format string for the date column.
    date_format: String,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            date_column: "date".into(),
            value_column: "value".into(),
            pet_column: None,
            date_format: "%Y-%m-%d".into(),
        }
    }
}

impl ReaderConfig {
    /// Set the date column header.
    pub fn with_date_column(mut self, name: impl Into<String>) -> Self {
        self.date_column = name.into();
        self
    }

    /// Set the observation column header.
    pub fn with_value_column(mut self, name: impl Into<String>) -> Self {
        self.value_column = name.into();
        self
    }

    /// Set the PET column header, or `None` to read the value column as is.
    pub fn with_pet_column(mut self, name: Option<impl Into<String>>) -> Self {
        self.pet_column = name.map(Into::into);
        self
    }

    /// Set the chrono format of the date column. A date-time format is
    /// accepted; the time of day is dropped.
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// Returns the date column header.
    pub fn date_column(&self) -> &str {
        &self.date_column
    }

    /// Returns the observation column header.
    pub fn value_column(&self) -> &str {
        &self.value_column
    }

    /// Returns the PET column header, if any.
    pub fn pet_column(&self) -> Option<&str> {
        self.pet_column.as_deref()
    }

    /// Returns the date format.
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Validate that the configuration is internally consistent.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidConfig`] for an empty column name or date
    /// format, or when two roles share a column.
    pub fn validate(&self) -> Result<(), IoError> {
        let mut names = vec![&self.date_column, &self.value_column];
        names.extend(self.pet_column.as_ref());
        if names.iter().any(|n| n.trim().is_empty()) {
            return Err(IoError::InvalidConfig {
                reason: "column names must not be empty".to_string(),
            });
        }
        for (i, a) in names.iter().enumerate() {
            if names[i + 1..].contains(a) {
                return Err(IoError::InvalidConfig {
                    reason: format!("column '{a}' is used for more than one role"),
                });
            }
        }
        if self.date_format.is_empty() {
            return Err(IoError::InvalidConfig {
                reason: "date_format must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// read_csv
// ---------------------------------------------------------------------------

/// Read a dated series from a CSV file with a header row.
///
/// Missing cells (`""`, `NA`, `NaN`, `null`, `-`) become `NaN`. With a PET
/// column the returned values are `value - pet`, missing where either is
/// missing.
///
/// # Errors
///
/// Returns [`IoError`] if the file is missing or unreadable, a configured
/// column is absent, a cell cannot be parsed, or there are no data rows.
pub fn read_csv(path: &Path, config: &ReaderConfig) -> Result<DatedSeries, IoError> {
    config.validate()?;

    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path)?;
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(file);

    let headers = rdr.headers()?.clone();
    let column = |name: &str| -> Result<usize, IoError> {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| IoError::MissingColumn {
                name: name.to_string(),
                path: path.to_path_buf(),
            })
    };
    let date_idx = column(&config.date_column)?;
    let value_idx = column(&config.value_column)?;
    let pet_idx = config.pet_column.as_deref().map(column).transpose()?;

    let mut dates = Vec::new();
    let mut values = Vec::new();
    let mut pet = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        dates.push(parse_date(
            record.get(date_idx).unwrap_or(""),
            &config.date_format,
            line,
        )?);
        values.push(parse_value(
            record.get(value_idx).unwrap_or(""),
            &config.value_column,
            line,
        )?);
        if let (Some(idx), Some(name)) = (pet_idx, config.pet_column.as_deref()) {
            pet.push(parse_value(record.get(idx).unwrap_or(""), name, line)?);
        }
    }

    if dates.is_empty() {
        return Err(IoError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let values = if pet_idx.is_some() {
        debug!("subtracting PET column from values");
        climatic_water_balance(&values, &pet)?
    } else {
        values
    };

    let series = DatedSeries::new(dates, values);
    if let Some((first, last)) = series.date_range() {
        info!(
            path = %path.display(),
            rows = series.len(),
            missing = series.n_missing(),
            %first,
            %last,
            "read dated series"
        );
    }
    Ok(series)
}

/// Parse a date cell, falling back to a date-time parse for formats that
/// carry a time of day.
fn parse_date(cell: &str, format: &str, line: u64) -> Result<NaiveDate, IoError> {
    NaiveDate::parse_from_str(cell, format)
        .or_else(|_| NaiveDateTime::parse_from_str(cell, format).map(|dt| dt.date()))
        .map_err(|_| IoError::InvalidDate {
            line,
            value: cell.to_string(),
            format: format.to_string(),
        })
}

/// Parse a value cell; missing markers and non-finite numbers become `NaN`.
fn parse_value(cell: &str, column: &str, line: u64) -> Result<f64, IoError> {
    if MISSING_MARKERS
        .iter()
        .any(|m| cell.eq_ignore_ascii_case(m))
    {
        return Ok(f64::NAN);
    }
    let v: f64 = cell.parse().map_err(|_| IoError::InvalidValue {
        line,
        column: column.to_string(),
        value: cell.to_string(),
    })?;
    Ok(if v.is_finite() { v } else { f64::NAN })
}
