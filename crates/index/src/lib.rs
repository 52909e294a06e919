//! Standardized drought indices: SPI and SPEI.
//!
//! Precipitation (SPI) or climatic water balance (SPEI) is fitted to a
//! probability distribution and every observation is expressed as a
//! standard normal deviate: 0 is the median, negative values are drier
//! than usual, positive values wetter.
//!
//! # Two modes
//!
//! - **Series** ([`spi`], [`spei`], [`standardize`]): the whole series is
//!   one fitting group. Typical input is one total per year.
//! - **Monthly** ([`spi_monthly`], [`spei_monthly`],
//!   [`standardize_monthly`]): dated observations of any frequency are
//!   summed per calendar month and per aggregation window, and each window
//!   start month is fitted across years separately. Output is a
//!   [`MonthlyTable`] with one row per year.
//!
//! # Missing values
//!
//! `NaN` (any non-finite value) marks a missing observation. Missing input
//! positions are missing in the output; groups without enough data to fit
//! produce missing output rather than an error.
//!
//! # Quick Start
//!
//! ```
//! use caeli_index::{MonthlyConfig, Severity, spi_monthly};
//! use chrono::NaiveDate;
//!
//! let dates: Vec<NaiveDate> = (1990..2020)
//!     .flat_map(|y| (1..=12).map(move |m| NaiveDate::from_ymd_opt(y, m, 1).unwrap()))
//!     .collect();
//! let precip: Vec<f64> = (0..dates.len())
//!     .map(|i| 40.0 + ((i * 7919) % 97) as f64)
//!     .collect();
//!
//! let config = MonthlyConfig::new().with_aggregation(3).with_months(vec![1, 7]);
//! let table = spi_monthly(&dates, &precip, &config).unwrap();
//! assert_eq!(table.n_rows(), 30);
//! assert_eq!(table.n_columns(), 4);
//!
//! let z = table.column("07-09").unwrap().index()[0];
//! assert!(Severity::classify(z).is_some());
//! ```

mod config;
mod error;
mod monthly;
pub(crate) mod resample;
mod series;
mod severity;
mod table;
mod water_balance;

pub use config::MonthlyConfig;
pub use error::IndexError;
pub use monthly::{spei_monthly, spi_monthly, standardize_monthly};
pub use series::{spei, spi, standardize};
pub use severity::Severity;
pub use table::{IndexKind, MonthlyTable, PeriodColumn};
pub use water_balance::climatic_water_balance;

pub use caeli_distribution::{Family, FitConfig, GammaMethod};
