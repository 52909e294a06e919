//! Error types for caeli-io.

use std::path::PathBuf;

use caeli_index::IndexError;

/// Error type for all fallible operations in the caeli-io crate.
///
/// Covers file system and CSV failures, missing columns, unparseable cells
/// and configuration problems encountered when reading dated series or
/// writing index tables.
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    /// Returned when a required file does not exist on disk.
    #[error("file not found: {}", path.display())]
    FileNotFound {
        /// Path that could not be found.
        path: PathBuf,
    },

    /// Wraps an operating system I/O failure.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Wraps an error originating from the csv crate.
    #[error("csv error: {reason}")]
    Csv {
        /// Description of the underlying CSV failure.
        reason: String,
    },

    /// Returned when a required column is not present in the header.
    #[error("column '{name}' not found in {}", path.display())]
    MissingColumn {
        /// Name of the missing column.
        name: String,
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a date cell does not match the configured format.
    #[error("line {line}: cannot parse date '{value}' with format '{format}'")]
    InvalidDate {
        /// 1-based line number in the file.
        line: u64,
        /// Offending cell content.
        value: String,
        /// chrono format string that was tried.
        format: String,
    },

    /// Returned when a value cell is neither a number nor a missing marker.
    #[error("line {line}: cannot parse '{value}' in column '{column}' as a number")]
    InvalidValue {
        /// 1-based line number in the file.
        line: u64,
        /// Column the cell belongs to.
        column: String,
        /// Offending cell content.
        value: String,
    },

    /// Returned when the file has a header but no data rows.
    #[error("no data rows in {}", path.display())]
    EmptyFile {
        /// Path to the file that was inspected.
        path: PathBuf,
    },

    /// Returned when a configuration parameter is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Wraps an error from the index computations.
    #[error(transparent)]
    Index(#[from] IndexError),
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        IoError::Csv {
            reason: e.to_string(),
        }
    }
}
