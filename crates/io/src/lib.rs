//! # caeli-io
//!
//! Read dated precipitation (and optional PET) series from CSV and write
//! drought index tables and series back to CSV. Bridges delimited text
//! files into the `&[f64]` slice-based APIs of `caeli-index`.

mod dated;
mod error;
mod reader;
mod writer;

pub use dated::DatedSeries;
pub use error::IoError;
pub use reader::{ReaderConfig, read_csv};
pub use writer::{write_series, write_series_csv, write_table, write_table_csv};
