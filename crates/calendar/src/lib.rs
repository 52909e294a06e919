//! # caeli-calendar
//!
//! Month arithmetic for monthly drought-index aggregation.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["chrono date"] -->|"YearMonth::from_date()"| B["YearMonth"]
//!     B -->|".ordinal()"| C["month ordinal"]
//!     C -->|"YearMonth::from_ordinal()"| B
//!     D["Month (1..=12)"] -->|"Period::new(start, len)"| E["Period"]
//!     E -->|".label()"| F["\"09-11\""]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use caeli_calendar::{Period, YearMonth};
//!
//! let nov = YearMonth::new(2010, 11).unwrap();
//! assert_eq!(nov.add_months(2), YearMonth::new(2011, 1).unwrap());
//!
//! let window = Period::new(11, 3).unwrap();
//! assert_eq!(window.label(), "11-01");
//! assert!(window.wraps_year());
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `month` | Calendar month newtype |
//! | `year_month` | Year-month pair with ordinal arithmetic |
//! | `period` | Aggregation windows and their labels |
//! | `error` | Error types |

mod error;
mod month;
mod period;
mod year_month;

pub use error::CalendarError;
pub use month::Month;
pub use period::Period;
pub use year_month::YearMonth;
